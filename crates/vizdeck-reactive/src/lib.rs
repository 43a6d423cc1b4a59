//! vizdeck-reactive — The reactive update graph.
//!
//! Cells read input and state [`Port`]s and write output ports. A
//! [`CellGraph`] orders cells topologically and runs the affected ones for
//! each event; the [`runtime`] task owns the graph so HTTP handlers never
//! touch cell state directly. The [`Router`] is the cell that swaps slides.

pub mod cell;
pub mod error;
pub mod graph;
pub mod port;
pub mod router;
pub mod runtime;
pub mod views;

pub use cell::{Args, Cell, CellSpec, Outcome};
pub use error::{CellError, GraphError, ParsePortError, RegistryError};
pub use graph::{CellGraph, CellGraphBuilder, Dispatch};
pub use port::Port;
pub use router::{Router, RouterCell};
pub use runtime::{spawn_dispatcher, DispatcherHandle};
pub use views::ViewRegistry;
