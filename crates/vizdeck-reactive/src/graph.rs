//! Cell graph and its dispatcher.
//!
//! Edges run from the cell writing a port to every cell reading that port as
//! an input. State ports add no edges: they are read, never waited on. The
//! graph must be acyclic and each port has at most one writer.

use std::collections::{BTreeSet, HashMap, HashSet};

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cell::{Args, Cell, CellSpec, DynCell, Slot};
use crate::error::GraphError;
use crate::port::Port;

struct Node {
    spec: CellSpec,
    cell: Box<dyn DynCell>,
}

#[derive(Default)]
pub struct CellGraphBuilder {
    nodes: Vec<Node>,
}

impl CellGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C: Cell>(mut self, cell: C) -> Self {
        let spec = cell.spec();
        let slot = Slot::new(cell, &spec);
        self.nodes.push(Node { spec, cell: Box::new(slot) });
        self
    }

    pub fn build(self) -> Result<CellGraph, GraphError> {
        let mut writers: HashMap<Port, usize> = HashMap::new();
        for (i, node) in self.nodes.iter().enumerate() {
            if node.spec.inputs.is_empty() || node.spec.outputs.is_empty() {
                return Err(GraphError::Unconnected(node.spec.name.clone()));
            }
            for port in &node.spec.outputs {
                if let Some(&first) = writers.get(port) {
                    return Err(GraphError::DuplicateOutput {
                        port: port.clone(),
                        first: self.nodes[first].spec.name.clone(),
                        second: node.spec.name.clone(),
                    });
                }
                writers.insert(port.clone(), i);
            }
        }

        let mut graph: DiGraph<usize, ()> = DiGraph::new();
        let indices: Vec<NodeIndex> = (0..self.nodes.len()).map(|i| graph.add_node(i)).collect();
        for (i, node) in self.nodes.iter().enumerate() {
            for port in &node.spec.inputs {
                if let Some(&writer) = writers.get(port) {
                    graph.add_edge(indices[writer], indices[i], ());
                }
            }
        }

        let order = toposort(&graph, None)
            .map_err(|cycle| GraphError::Cycle(self.nodes[graph[cycle.node_id()]].spec.name.clone()))?;

        let mut slots: Vec<Option<Node>> = self.nodes.into_iter().map(Some).collect();
        let nodes: Vec<Node> = order
            .into_iter()
            .filter_map(|idx| slots[graph[idx]].take())
            .collect();
        debug!("cell graph built: {} cells", nodes.len());
        Ok(CellGraph { nodes, store: HashMap::new() })
    }
}

/// Ports updated by one dispatch, in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dispatch {
    pub updates: Vec<(Port, Value)>,
    /// Names of the cells that ran, including those that declined to update.
    pub ran: Vec<String>,
}

impl Dispatch {
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn get(&self, port: &Port) -> Option<&Value> {
        self.updates.iter().find(|(p, _)| p == port).map(|(_, v)| v)
    }
}

/// Cells in topological order plus the last known value of every port.
pub struct CellGraph {
    nodes: Vec<Node>,
    store: HashMap<Port, Value>,
}

impl CellGraph {
    pub fn builder() -> CellGraphBuilder {
        CellGraphBuilder::new()
    }

    /// Declared cells in dispatch order.
    pub fn specs(&self) -> Vec<CellSpec> {
        self.nodes.iter().map(|n| n.spec.clone()).collect()
    }

    pub fn value(&self, port: &Port) -> Option<&Value> {
        self.store.get(port)
    }

    /// Apply externally changed ports and run every affected cell once.
    ///
    /// A cell runs when at least one of its inputs changed, either in `changed`
    /// or as the output of a cell earlier in the order. Cell errors are logged
    /// and count as no update.
    pub fn dispatch(&mut self, changed: Vec<(Port, Value)>) -> Dispatch {
        let mut dirty: HashSet<Port> = HashSet::new();
        for (port, value) in changed {
            dirty.insert(port.clone());
            self.store.insert(port, value);
        }

        let mut result = Dispatch::default();
        for node in &mut self.nodes {
            let triggered: BTreeSet<Port> =
                node.spec.inputs.iter().filter(|p| dirty.contains(*p)).cloned().collect();
            if triggered.is_empty() {
                continue;
            }

            let values: HashMap<Port, Value> = node
                .spec
                .inputs
                .iter()
                .chain(&node.spec.states)
                .filter_map(|p| self.store.get(p).map(|v| (p.clone(), v.clone())))
                .collect();
            let args = Args::new(values, triggered);
            result.ran.push(node.spec.name.clone());

            match node.cell.run(&args) {
                Ok(Some(outputs)) => {
                    for (port, value) in node.spec.outputs.iter().zip(outputs) {
                        dirty.insert(port.clone());
                        self.store.insert(port.clone(), value.clone());
                        result.updates.push((port.clone(), value));
                    }
                }
                Ok(None) => debug!("cell {} declined to update", node.spec.name),
                Err(e) => warn!("cell {} failed, keeping prior output: {}", node.spec.name, e),
            }
        }

        debug!(
            "dispatch ran {} cells, updated {} ports",
            result.ran.len(),
            result.updates.len()
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Outcome;
    use crate::error::CellError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Adds one to its single numeric input.
    struct Inc {
        name: &'static str,
        from: (&'static str, &'static str),
        to: (&'static str, &'static str),
    }

    impl Cell for Inc {
        type State = ();

        fn spec(&self) -> CellSpec {
            CellSpec::new(self.name).input(self.from.0, self.from.1).output(self.to.0, self.to.1)
        }

        fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
            match args.get(self.from.0, self.from.1).and_then(Value::as_i64) {
                Some(n) if n >= 0 => Ok(Outcome::emit(vec![json!(n + 1)])),
                Some(_) => Err(CellError::Failed("negative".into())),
                None => Ok(Outcome::NoUpdate),
            }
        }
    }

    fn inc(name: &'static str, from: &'static str, to: &'static str) -> Inc {
        Inc { name, from: (from, "v"), to: (to, "v") }
    }

    fn port(s: &str) -> Port {
        s.parse().unwrap()
    }

    #[test]
    fn test_chain_runs_in_topological_order_regardless_of_registration() {
        let mut graph = CellGraph::builder()
            .register(inc("c", "b", "c"))
            .register(inc("b", "a", "b"))
            .build()
            .unwrap();

        let d = graph.dispatch(vec![(port("a.v"), json!(1))]);
        assert_eq!(d.ran, vec!["b", "c"]);
        assert_eq!(d.updates, vec![(port("b.v"), json!(2)), (port("c.v"), json!(3))]);
    }

    #[test]
    fn test_unaffected_cells_do_not_run() {
        let mut graph = CellGraph::builder()
            .register(inc("b", "a", "b"))
            .register(inc("y", "x", "y"))
            .build()
            .unwrap();
        let d = graph.dispatch(vec![(port("x.v"), json!(5))]);
        assert_eq!(d.ran, vec!["y"]);
    }

    #[test]
    fn test_no_update_stops_propagation_and_keeps_store() {
        let mut graph = CellGraph::builder()
            .register(inc("b", "a", "b"))
            .register(inc("c", "b", "c"))
            .build()
            .unwrap();
        graph.dispatch(vec![(port("a.v"), json!(1))]);

        let d = graph.dispatch(vec![(port("a.v"), Value::Null)]);
        assert!(d.is_empty());
        assert_eq!(d.ran, vec!["b"]);
        assert_eq!(graph.value(&port("b.v")), Some(&json!(2)));
        assert_eq!(graph.value(&port("c.v")), Some(&json!(3)));
    }

    #[test]
    fn test_cell_error_is_swallowed() {
        let mut graph = CellGraph::builder().register(inc("b", "a", "b")).build().unwrap();
        graph.dispatch(vec![(port("a.v"), json!(1))]);
        let d = graph.dispatch(vec![(port("a.v"), json!(-1))]);
        assert!(d.is_empty());
        assert_eq!(graph.value(&port("b.v")), Some(&json!(2)));
    }

    #[test]
    fn test_duplicate_output_rejected() {
        let err = CellGraph::builder()
            .register(inc("first", "a", "b"))
            .register(inc("second", "x", "b"))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, GraphError::DuplicateOutput { ref first, ref second, .. }
            if first == "first" && second == "second"));
    }

    #[test]
    fn test_cycle_rejected() {
        let err = CellGraph::builder()
            .register(inc("ab", "a", "b"))
            .register(inc("ba", "b", "a"))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, GraphError::Cycle(_)));

        let self_loop = CellGraph::builder().register(inc("aa", "a", "a")).build();
        assert!(matches!(self_loop, Err(GraphError::Cycle(_))));
    }

    struct Reader;

    impl Cell for Reader {
        type State = ();

        fn spec(&self) -> CellSpec {
            CellSpec::new("reader").input("t", "v").state("b", "v").output("r", "v")
        }

        fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
            Ok(Outcome::emit(vec![args.get("b", "v").cloned().unwrap_or(Value::Null)]))
        }
    }

    #[test]
    fn test_state_ports_are_read_but_do_not_trigger() {
        let mut graph = CellGraph::builder()
            .register(inc("b", "a", "b"))
            .register(Reader)
            .build()
            .unwrap();

        let d = graph.dispatch(vec![(port("a.v"), json!(1))]);
        assert_eq!(d.ran, vec!["b"]);

        let d = graph.dispatch(vec![(port("t.v"), json!("go"))]);
        assert_eq!(d.get(&port("r.v")), Some(&json!(2)));
    }

    #[test]
    fn test_specs_follow_dispatch_order() {
        let graph = CellGraph::builder()
            .register(inc("c", "b", "c"))
            .register(inc("b", "a", "b"))
            .build()
            .unwrap();
        let names: Vec<String> = graph.specs().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["b", "c"]);
    }
}
