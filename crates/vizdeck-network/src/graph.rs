//! Edge-list loading and adjacency.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::element::{Element, GENESIS_CLASS};

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Failed to read edge list {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Malformed edge on line {line}: {content:?}")]
    Malformed { line: usize, content: String },

    #[error("Edge list contains no edges")]
    Empty,

    #[error("Unknown expansion mode: {0}")]
    UnknownMode(String),
}

/// Nodes and edges adjacent to one node in one direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjacent {
    pub nodes: Vec<Element>,
    pub edges: Vec<Element>,
}

/// Immutable follower network. Built once; never mutated.
#[derive(Debug, Clone)]
pub struct FollowerGraph {
    nodes: Vec<Element>,
    genesis: Element,
    /// source → nodes it follows, with the connecting edges
    following: HashMap<String, Adjacent>,
    /// target → nodes following it, with the connecting edges
    followers: HashMap<String, Adjacent>,
    edge_count: usize,
}

impl FollowerGraph {
    pub fn from_path(path: &Path, limit: usize) -> Result<Self, NetworkError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| NetworkError::Read { path: path.to_path_buf(), source })?;
        let graph = Self::parse(&text, limit)?;
        info!(
            "Follower network loaded from {:?}: {} nodes, {} edges",
            path,
            graph.nodes.len(),
            graph.edge_count
        );
        Ok(graph)
    }

    /// Parse the first `limit` lines of a `source target` edge list. Lines
    /// without a space are skipped; the first source seen is the genesis node.
    pub fn parse(text: &str, limit: usize) -> Result<Self, NetworkError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut nodes: Vec<Element> = Vec::new();
        let mut following: HashMap<String, Adjacent> = HashMap::new();
        let mut followers: HashMap<String, Adjacent> = HashMap::new();
        let mut edge_count = 0;

        for (i, line) in text.split('\n').take(limit).enumerate() {
            let line = line.trim_end_matches('\r');
            if !line.contains(' ') {
                continue;
            }
            let mut parts = line.split(' ');
            let (source, target) = match (parts.next(), parts.next(), parts.next()) {
                (Some(s), Some(t), None) if !s.is_empty() && !t.is_empty() => (s, t),
                _ => {
                    return Err(NetworkError::Malformed { line: i + 1, content: line.to_string() })
                }
            };

            let edge = Element::edge(source, target);
            let source_node = Element::node(source);
            let target_node = Element::node(target);

            if seen.insert(source.to_string()) {
                nodes.push(source_node.clone());
            }
            if seen.insert(target.to_string()) {
                nodes.push(target_node.clone());
            }

            let out = following.entry(source.to_string()).or_default();
            out.nodes.push(target_node);
            out.edges.push(edge.clone());

            let inc = followers.entry(target.to_string()).or_default();
            inc.nodes.push(source_node);
            inc.edges.push(edge);

            edge_count += 1;
        }

        let genesis = nodes.first().cloned().ok_or(NetworkError::Empty)?.with_class(GENESIS_CLASS);
        Ok(Self { nodes, genesis, following, followers, edge_count })
    }

    pub fn genesis(&self) -> &Element {
        &self.genesis
    }

    /// The set shown before anything has been expanded.
    pub fn default_elements(&self) -> Vec<Element> {
        vec![self.genesis.clone()]
    }

    pub fn following(&self, id: &str) -> Option<&Adjacent> {
        self.following.get(id)
    }

    pub fn followers(&self, id: &str) -> Option<&Adjacent> {
        self.followers.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vizdeck_test_utils::EDGE_LIST;

    fn ids(elements: &[Element]) -> Vec<&str> {
        elements.iter().map(Element::id).collect()
    }

    #[test]
    fn test_parse_buckets_both_directions() {
        let graph = FollowerGraph::parse(EDGE_LIST, 750).unwrap();
        assert_eq!(graph.genesis().id(), "1");
        assert_eq!(graph.genesis().classes.as_deref(), Some("genesis"));
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 6);

        let out = graph.following("1").unwrap();
        assert_eq!(ids(&out.nodes), vec!["2", "3"]);
        assert_eq!(ids(&out.edges), vec!["12", "13"]);

        let inc = graph.followers("1").unwrap();
        assert_eq!(ids(&inc.nodes), vec!["3", "4"]);
        assert_eq!(ids(&inc.edges), vec!["31", "41"]);
        assert!(graph.followers("4").is_none());
    }

    #[test]
    fn test_line_limit_applies_before_skipping() {
        // lines 1..=4 include the skipped "lonely" line
        let graph = FollowerGraph::parse(EDGE_LIST, 4).unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.following("3").is_none());
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let err = FollowerGraph::parse("1 2\n3 4 5\n", 750).unwrap_err();
        assert!(matches!(err, NetworkError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_empty_list_is_fatal() {
        assert!(matches!(FollowerGraph::parse("\n", 750), Err(NetworkError::Empty)));
    }
}
