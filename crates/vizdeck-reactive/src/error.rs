use thiserror::Error;

use crate::port::Port;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid port {0:?}: expected \"component.property\"")]
pub struct ParsePortError(pub String);

/// Failure inside one cell invocation. The dispatcher logs it and treats it
/// as "no update".
#[derive(Debug, Error)]
pub enum CellError {
    #[error("Invalid value on {port}: {reason}")]
    InvalidInput { port: Port, reason: String },

    #[error("Cell {cell} returned {got} outputs, declared {expected}")]
    OutputArity { cell: String, expected: usize, got: usize },

    #[error("{0}")]
    Failed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Problems detected while assembling the cell graph. Fatal at startup.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Port {port} is written by both {first} and {second}")]
    DuplicateOutput { port: Port, first: String, second: String },

    #[error("Cell {0} declares no inputs or no outputs")]
    Unconnected(String),

    #[error("Cycle through cell {0}")]
    Cycle(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Route {0} registered twice")]
    DuplicateRoute(String),
}
