//! The cell contract.
//!
//! A cell is a pure function from (prior private state, port values) to
//! (new private state, output values), or no update. The graph keeps each
//! cell's state between invocations.

use std::collections::{BTreeSet, HashMap};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::CellError;
use crate::port::Port;

/// Declared wiring of a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellSpec {
    pub name: String,
    pub inputs: Vec<Port>,
    pub states: Vec<Port>,
    pub outputs: Vec<Port>,
}

impl CellSpec {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), inputs: Vec::new(), states: Vec::new(), outputs: Vec::new() }
    }

    pub fn input(mut self, component: &str, property: &str) -> Self {
        self.inputs.push(Port::new(component, property));
        self
    }

    pub fn state(mut self, component: &str, property: &str) -> Self {
        self.states.push(Port::new(component, property));
        self
    }

    pub fn output(mut self, component: &str, property: &str) -> Self {
        self.outputs.push(Port::new(component, property));
        self
    }
}

/// Values handed to one invocation.
///
/// JSON `null` is the same as absent: a component that never set a property
/// and one that set it to `null` look alike to a cell.
#[derive(Debug, Clone, Default)]
pub struct Args {
    values: HashMap<Port, Value>,
    triggered: BTreeSet<Port>,
}

impl Args {
    pub(crate) fn new(values: HashMap<Port, Value>, triggered: BTreeSet<Port>) -> Self {
        Self { values, triggered }
    }

    /// Set a value that also counts as a trigger.
    pub fn with(mut self, component: &str, property: &str, value: Value) -> Self {
        let port = Port::new(component, property);
        self.triggered.insert(port.clone());
        self.values.insert(port, value);
        self
    }

    /// Set a value without marking it as a trigger.
    pub fn with_state(mut self, component: &str, property: &str, value: Value) -> Self {
        self.values.insert(Port::new(component, property), value);
        self
    }

    pub fn get(&self, component: &str, property: &str) -> Option<&Value> {
        self.values
            .get(&Port::new(component, property))
            .filter(|v| !v.is_null())
    }

    pub fn str(&self, component: &str, property: &str) -> Option<&str> {
        self.get(component, property).and_then(Value::as_str)
    }

    /// Deserialize a value, `None` when absent.
    pub fn parse<T: DeserializeOwned>(
        &self,
        component: &str,
        property: &str,
    ) -> Result<Option<T>, CellError> {
        match self.get(component, property) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(
                |e: serde_json::Error| CellError::InvalidInput {
                    port: Port::new(component, property),
                    reason: e.to_string(),
                },
            ),
        }
    }

    /// Click counters; absent counts as zero.
    pub fn clicks(&self, component: &str, property: &str) -> u64 {
        self.get(component, property).and_then(Value::as_u64).unwrap_or(0)
    }

    pub fn triggered(&self, component: &str, property: &str) -> bool {
        self.triggered.contains(&Port::new(component, property))
    }
}

/// Result of an invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<S> {
    /// New state and one value per declared output, in declaration order.
    Update { state: S, outputs: Vec<Value> },
    /// Keep the prior state and leave every output untouched.
    NoUpdate,
}

impl<S> Outcome<S> {
    pub fn update(state: S, outputs: Vec<Value>) -> Self {
        Outcome::Update { state, outputs }
    }

    pub fn outputs(&self) -> Option<&[Value]> {
        match self {
            Outcome::Update { outputs, .. } => Some(outputs),
            Outcome::NoUpdate => None,
        }
    }
}

impl Outcome<()> {
    /// Update for stateless cells.
    pub fn emit(outputs: Vec<Value>) -> Self {
        Outcome::Update { state: (), outputs }
    }
}

pub trait Cell: Send + 'static {
    type State: Default + Send + 'static;

    fn spec(&self) -> CellSpec;

    fn update(&self, prior: &Self::State, args: &Args) -> Result<Outcome<Self::State>, CellError>;
}

/// Type-erased cell plus its private state, as stored in the graph.
pub(crate) trait DynCell: Send {
    /// Run once, committing the new state on update.
    fn run(&mut self, args: &Args) -> Result<Option<Vec<Value>>, CellError>;
}

pub(crate) struct Slot<C: Cell> {
    cell: C,
    name: String,
    arity: usize,
    state: C::State,
}

impl<C: Cell> Slot<C> {
    pub(crate) fn new(cell: C, spec: &CellSpec) -> Self {
        Self { cell, name: spec.name.clone(), arity: spec.outputs.len(), state: C::State::default() }
    }
}

impl<C: Cell> DynCell for Slot<C> {
    fn run(&mut self, args: &Args) -> Result<Option<Vec<Value>>, CellError> {
        match self.cell.update(&self.state, args)? {
            Outcome::NoUpdate => Ok(None),
            Outcome::Update { state, outputs } => {
                if outputs.len() != self.arity {
                    return Err(CellError::OutputArity {
                        cell: self.name.clone(),
                        expected: self.arity,
                        got: outputs.len(),
                    });
                }
                self.state = state;
                Ok(Some(outputs))
            }
        }
    }
}
