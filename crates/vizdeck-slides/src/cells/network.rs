//! Follower network: clicking a node grows the displayed graph.

use std::sync::Arc;

use tracing::debug;
use vizdeck_network::{expand, Element, ExpansionMode, ExpansionState, FollowerGraph, TappedNode};
use vizdeck_reactive::{Args, Cell, CellError, CellSpec, Outcome};

/// `cytoscape.tapNodeData` with the displayed elements and the
/// `radio-expand` mode as state → `cytoscape.elements`.
///
/// Elements read back from the page take precedence over the cell's own
/// display, so a freshly mounted slide starts from what it shows. The
/// expansion record survives as long as the page keeps extending the
/// elements this cell produced.
pub struct GraphExpansion {
    graph: Arc<FollowerGraph>,
}

impl GraphExpansion {
    pub fn new(graph: Arc<FollowerGraph>) -> Self {
        Self { graph }
    }
}

impl Cell for GraphExpansion {
    type State = ExpansionState;

    fn spec(&self) -> CellSpec {
        CellSpec::new("graph_expansion")
            .input("cytoscape", "tapNodeData")
            .state("cytoscape", "elements")
            .state("radio-expand", "value")
            .output("cytoscape", "elements")
    }

    fn update(
        &self,
        prior: &ExpansionState,
        args: &Args,
    ) -> Result<Outcome<ExpansionState>, CellError> {
        let base = match args.parse::<Vec<Element>>("cytoscape", "elements")? {
            Some(displayed) => prior.resume(displayed),
            None => prior.clone(),
        };
        let tapped: Option<TappedNode> = args.parse("cytoscape", "tapNodeData")?;
        let mode = args.str("radio-expand", "value").and_then(|m| match m.parse::<ExpansionMode>() {
            Ok(mode) => Some(mode),
            Err(e) => {
                debug!("{}", e);
                None
            }
        });

        let next = expand(&self.graph, &base, tapped.as_ref(), mode);
        let elements = serde_json::to_value(next.elements(&self.graph))?;
        Ok(Outcome::update(next, vec![elements]))
    }
}
