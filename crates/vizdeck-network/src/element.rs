//! Cytoscape elements (nodes and edges).

use serde::{Deserialize, Serialize};

pub const GENESIS_CLASS: &str = "genesis";
pub const FOLLOWER_NODE_CLASS: &str = "followerNode";
pub const FOLLOWER_EDGE_CLASS: &str = "followerEdge";
pub const FOLLOWING_NODE_CLASS: &str = "followingNode";
pub const FOLLOWING_EDGE_CLASS: &str = "followingEdge";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementData {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub data: ElementData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
}

impl Element {
    /// A user node labelled with the last five characters of its id.
    pub fn node(id: &str) -> Self {
        let tail: String = {
            let chars: Vec<char> = id.chars().collect();
            chars[chars.len().saturating_sub(5)..].iter().collect()
        };
        Self {
            data: ElementData {
                id: id.to_string(),
                label: Some(format!("User #{tail}")),
                source: None,
                target: None,
                expanded: false,
            },
            classes: None,
        }
    }

    /// A directed edge; its id is the concatenation of both endpoints.
    pub fn edge(source: &str, target: &str) -> Self {
        Self {
            data: ElementData {
                id: format!("{source}{target}"),
                label: None,
                source: Some(source.to_string()),
                target: Some(target.to_string()),
                expanded: false,
            },
            classes: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.data.id
    }

    pub fn is_edge(&self) -> bool {
        self.data.source.is_some()
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes = Some(class.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_label_uses_id_tail() {
        assert_eq!(Element::node("1234567890").data.label.as_deref(), Some("User #67890"));
        assert_eq!(Element::node("42").data.label.as_deref(), Some("User #42"));
    }

    #[test]
    fn test_edge_json_shape() {
        let edge = Element::edge("1", "2").with_class(FOLLOWER_EDGE_CLASS);
        assert_eq!(
            serde_json::to_value(&edge).unwrap(),
            json!({"data": {"id": "12", "source": "1", "target": "2"}, "classes": "followerEdge"})
        );
        assert!(edge.is_edge());
    }
}
