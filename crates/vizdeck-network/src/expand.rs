//! Click-to-expand over the follower network.
//!
//! Expansion is append-only: elements are never removed, and a node expands
//! at most once. `expand` is a pure function of the prior state; the caller
//! keeps the returned state for the next click.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::element::{
    Element, FOLLOWER_EDGE_CLASS, FOLLOWER_NODE_CLASS, FOLLOWING_EDGE_CLASS, FOLLOWING_NODE_CLASS,
};
use crate::graph::{FollowerGraph, NetworkError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionMode {
    /// Add the nodes following the clicked node (reverse adjacency).
    Followers,
    /// Add the nodes the clicked node follows (forward adjacency).
    Following,
}

impl FromStr for ExpansionMode {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "followers" => Ok(ExpansionMode::Followers),
            "following" => Ok(ExpansionMode::Following),
            other => Err(NetworkError::UnknownMode(other.to_string())),
        }
    }
}

/// Payload of a node tap.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TappedNode {
    pub id: String,
    #[serde(default)]
    pub expanded: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    displayed: Option<Vec<Element>>,
    expanded: BTreeSet<String>,
}

impl ExpansionState {
    /// Start from an element set already on screen.
    pub fn with_displayed(elements: Vec<Element>) -> Self {
        let expanded = elements
            .iter()
            .filter(|e| e.data.expanded)
            .map(|e| e.id().to_string())
            .collect();
        Self { displayed: Some(elements), expanded }
    }

    /// Continue from the elements on screen. While they still extend what
    /// this state last produced, its expansion record carries over; any other
    /// set (a remounted slide) starts a fresh record.
    pub fn resume(&self, displayed: Vec<Element>) -> Self {
        let continues = match &self.displayed {
            Some(previous) => displayed.starts_with(previous),
            None => false,
        };
        let mut next = Self::with_displayed(displayed);
        if continues {
            next.expanded.extend(self.expanded.iter().cloned());
        }
        next
    }

    /// The displayed set, or the graph's default if nothing was shown yet.
    pub fn elements(&self, graph: &FollowerGraph) -> Vec<Element> {
        self.displayed.clone().unwrap_or_else(|| graph.default_elements())
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}

/// Expand `tapped` in `mode`, returning the next state.
///
/// No payload or an already-expanded node leave the displayed set as it was.
/// The tapped node is flagged before the mode is looked at, so with an
/// unknown mode it is marked expanded without adding anything. The following
/// branch never re-adds the genesis node; the followers branch has no such
/// guard.
pub fn expand(
    graph: &FollowerGraph,
    prior: &ExpansionState,
    tapped: Option<&TappedNode>,
    mode: Option<ExpansionMode>,
) -> ExpansionState {
    let mut elements = prior.elements(graph);
    let mut expanded = prior.expanded.clone();

    let Some(tapped) = tapped else {
        return ExpansionState { displayed: Some(elements), expanded };
    };
    if tapped.expanded || expanded.contains(&tapped.id) {
        debug!("node {} already expanded", tapped.id);
        return ExpansionState { displayed: Some(elements), expanded };
    }

    if let Some(element) = elements.iter_mut().find(|e| e.id() == tapped.id) {
        element.data.expanded = true;
    }
    expanded.insert(tapped.id.clone());

    let Some(mode) = mode else {
        debug!("no expansion mode, {} flagged only", tapped.id);
        return ExpansionState { displayed: Some(elements), expanded };
    };

    match mode {
        ExpansionMode::Followers => {
            if let Some(adjacent) = graph.followers(&tapped.id) {
                elements.extend(adjacent.nodes.iter().cloned().map(|n| n.with_class(FOLLOWER_NODE_CLASS)));
                elements.extend(adjacent.edges.iter().cloned().map(|e| e.with_class(FOLLOWER_EDGE_CLASS)));
            }
        }
        ExpansionMode::Following => {
            if let Some(adjacent) = graph.following(&tapped.id) {
                let genesis = graph.genesis().id();
                elements.extend(
                    adjacent
                        .nodes
                        .iter()
                        .filter(|n| n.id() != genesis)
                        .cloned()
                        .map(|n| n.with_class(FOLLOWING_NODE_CLASS)),
                );
                elements.extend(adjacent.edges.iter().cloned().map(|e| e.with_class(FOLLOWING_EDGE_CLASS)));
            }
        }
    }

    debug!("expanded {} ({:?}): {} elements", tapped.id, mode, elements.len());
    ExpansionState { displayed: Some(elements), expanded }
}
