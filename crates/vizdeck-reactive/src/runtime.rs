//! The dispatcher task.
//!
//! The cell graph, and with it every cell's private state, lives inside one
//! spawned task. Callers send change sets over an unbounded channel and wait
//! on a oneshot for the resulting [`Dispatch`]; dispatches are serialised in
//! arrival order.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};
use vizdeck_common::{Result, VizdeckError};

use crate::cell::CellSpec;
use crate::graph::{CellGraph, Dispatch};
use crate::port::Port;

struct Command {
    changed: Vec<(Port, Value)>,
    reply: oneshot::Sender<Dispatch>,
}

#[derive(Clone)]
pub struct DispatcherHandle {
    tx: mpsc::UnboundedSender<Command>,
    specs: Arc<Vec<CellSpec>>,
}

impl DispatcherHandle {
    pub async fn dispatch(&self, changed: Vec<(Port, Value)>) -> Result<Dispatch> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command { changed, reply })
            .map_err(|_| VizdeckError::Dispatcher("dispatcher task has stopped".into()))?;
        rx.await
            .map_err(|_| VizdeckError::Dispatcher("dispatcher dropped the reply".into()))
    }

    /// Declared cells in dispatch order.
    pub fn dependencies(&self) -> &[CellSpec] {
        &self.specs
    }
}

/// Move `graph` into a new task and return a handle to it. Must be called
/// inside a tokio runtime.
pub fn spawn_dispatcher(mut graph: CellGraph) -> DispatcherHandle {
    let (tx, mut rx) = mpsc::unbounded_channel::<Command>();
    let specs = Arc::new(graph.specs());

    tokio::spawn(async move {
        info!("Started dispatcher task");
        while let Some(Command { changed, reply }) = rx.recv().await {
            let dispatch = graph.dispatch(changed);
            if reply.send(dispatch).is_err() {
                debug!("dispatch caller went away before the reply");
            }
        }
        info!("Dispatcher task stopped");
    });

    DispatcherHandle { tx, specs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Args, Cell, Outcome};
    use crate::error::CellError;
    use serde_json::json;

    /// Running total of every value seen on `n.v`.
    struct Sum;

    impl Cell for Sum {
        type State = i64;

        fn spec(&self) -> CellSpec {
            CellSpec::new("sum").input("n", "v").output("total", "v")
        }

        fn update(&self, prior: &i64, args: &Args) -> std::result::Result<Outcome<i64>, CellError> {
            let n = args.get("n", "v").and_then(Value::as_i64).unwrap_or(0);
            Ok(Outcome::update(prior + n, vec![json!(prior + n)]))
        }
    }

    #[tokio::test]
    async fn test_state_survives_across_dispatches() {
        let graph = CellGraph::builder().register(Sum).build().unwrap();
        let handle = spawn_dispatcher(graph);
        let port: Port = "n.v".parse().unwrap();

        handle.dispatch(vec![(port.clone(), json!(2))]).await.unwrap();
        let d = handle.dispatch(vec![(port, json!(3))]).await.unwrap();
        assert_eq!(d.get(&"total.v".parse().unwrap()), Some(&json!(5)));
        assert_eq!(handle.dependencies()[0].name, "sum");
    }

    #[tokio::test]
    async fn test_concurrent_callers_are_serialised() {
        let graph = CellGraph::builder().register(Sum).build().unwrap();
        let handle = spawn_dispatcher(graph);

        let mut tasks = Vec::new();
        for _ in 0..10 {
            let h = handle.clone();
            tasks.push(tokio::spawn(async move {
                h.dispatch(vec![("n.v".parse().unwrap(), json!(1))]).await.unwrap()
            }));
        }
        let mut totals = Vec::new();
        for t in tasks {
            let d = t.await.unwrap();
            totals.push(d.updates[0].1.as_i64().unwrap());
        }
        totals.sort();
        assert_eq!(totals, (1..=10).collect::<Vec<_>>());
    }
}
