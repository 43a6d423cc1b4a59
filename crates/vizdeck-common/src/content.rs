//! Content tree — the immutable structure a slide (or a cell output) renders.
//!
//! Trees are built once at startup and shared behind `Arc`; they are never
//! mutated afterwards, only whole subtrees are swapped by the router or by cell
//! outputs. The JSON form is tagged by `type` and consumed by the page shell.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::figure::Figure;

/// Inline CSS properties, keyed by camelCase property name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, Value>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTag {
    P,
    H1,
    H2,
    H3,
    H4,
    Pre,
}

/// Client-side components the shell knows how to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Location,
    Graph,
    Dropdown,
    Checklist,
    RadioItems,
    DataTable,
    Cytoscape,
    Canvas,
    Molecule2dViewer,
    PowerButton,
    Interval,
    GraduatedBar,
    LedDisplay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentNode {
    Text {
        tag: TextTag,
        text: String,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
    },
    Markdown {
        source: String,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
    },
    Image {
        src: String,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
    },
    Link {
        label: String,
        href: String,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
    },
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Map::is_empty")]
        props: Map<String, Value>,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
        #[serde(default)]
        children: Vec<ContentNode>,
    },
    Widget {
        kind: WidgetKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Map::is_empty")]
        props: Map<String, Value>,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
    },
}

// ── Builders ────────────────────────────────────────────────────────────────

impl ContentNode {
    pub fn text(tag: TextTag, text: impl Into<String>) -> Self {
        ContentNode::Text { tag, text: text.into(), style: Style::new() }
    }

    pub fn p(text: impl Into<String>) -> Self {
        Self::text(TextTag::P, text)
    }

    pub fn h1(text: impl Into<String>) -> Self {
        Self::text(TextTag::H1, text)
    }

    pub fn h2(text: impl Into<String>) -> Self {
        Self::text(TextTag::H2, text)
    }

    pub fn h4(text: impl Into<String>) -> Self {
        Self::text(TextTag::H4, text)
    }

    pub fn pre(text: impl Into<String>) -> Self {
        Self::text(TextTag::Pre, text)
    }

    pub fn markdown(source: impl Into<String>) -> Self {
        ContentNode::Markdown { source: source.into(), style: Style::new() }
    }

    pub fn image(src: impl Into<String>) -> Self {
        ContentNode::Image { src: src.into(), style: Style::new() }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        ContentNode::Link { label: label.into(), href: href.into(), style: Style::new() }
    }

    pub fn element(tag: &str, children: Vec<ContentNode>) -> Self {
        ContentNode::Element {
            tag: tag.to_string(),
            id: None,
            props: Map::new(),
            style: Style::new(),
            children,
        }
    }

    pub fn div(children: Vec<ContentNode>) -> Self {
        Self::element("div", children)
    }

    /// A button starting at `n_clicks = 0`.
    pub fn button(label: impl Into<String>, id: &str) -> Self {
        Self::element("button", vec![Self::p(label)])
            .with_id(id)
            .with_prop("n_clicks", 0)
    }

    pub fn widget(kind: WidgetKind) -> Self {
        ContentNode::Widget { kind, id: None, props: Map::new(), style: Style::new() }
    }

    /// A graph widget showing a fixed figure.
    pub fn graph(figure: &Figure) -> Self {
        Self::widget(WidgetKind::Graph).with_prop("figure", figure.to_value())
    }

    pub fn with_id(mut self, new_id: &str) -> Self {
        match &mut self {
            ContentNode::Element { id, .. } | ContentNode::Widget { id, .. } => {
                *id = Some(new_id.to_string());
            }
            _ => tracing::debug!("ignoring id {new_id} on a leaf node"),
        }
        self
    }

    pub fn with_prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        match &mut self {
            ContentNode::Element { props, .. } | ContentNode::Widget { props, .. } => {
                props.insert(key.to_string(), value.into());
            }
            _ => tracing::debug!("ignoring prop {key} on a leaf node"),
        }
        self
    }

    pub fn with_style(mut self, new_style: Style) -> Self {
        match &mut self {
            ContentNode::Text { style, .. }
            | ContentNode::Markdown { style, .. }
            | ContentNode::Image { style, .. }
            | ContentNode::Link { style, .. }
            | ContentNode::Element { style, .. }
            | ContentNode::Widget { style, .. } => *style = new_style,
        }
        self
    }
}

// ── Queries ─────────────────────────────────────────────────────────────────

impl ContentNode {
    pub fn id(&self) -> Option<&str> {
        match self {
            ContentNode::Element { id, .. } | ContentNode::Widget { id, .. } => id.as_deref(),
            _ => None,
        }
    }

    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Every `(id, property, value)` declared on identified nodes, in
    /// document order. These seed the reactive store when a slide is mounted.
    pub fn initial_props(&self) -> Vec<(String, String, Value)> {
        let mut out = Vec::new();
        self.collect_props(&mut out);
        out
    }

    fn collect_props(&self, out: &mut Vec<(String, String, Value)>) {
        match self {
            ContentNode::Element { id, props, children, .. } => {
                if let Some(id) = id {
                    for (key, value) in props {
                        out.push((id.clone(), key.clone(), value.clone()));
                    }
                }
                for child in children {
                    child.collect_props(out);
                }
            }
            ContentNode::Widget { id: Some(id), props, .. } => {
                for (key, value) in props {
                    out.push((id.clone(), key.clone(), value.clone()));
                }
            }
            _ => {}
        }
    }

    /// Depth-first search for the node carrying `id`.
    pub fn find(&self, id: &str) -> Option<&ContentNode> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(ContentNode::node_count).sum::<usize>()
    }

    pub fn to_value(&self) -> Value {
        // Content nodes only hold strings, maps and JSON values.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> ContentNode {
        ContentNode::div(vec![
            ContentNode::h1("Title"),
            ContentNode::button("change", "toggle_btn"),
            ContentNode::div(vec![
                ContentNode::widget(WidgetKind::Dropdown)
                    .with_id("dd")
                    .with_prop("value", "lifeExp")
                    .with_prop("options", json!(["lifeExp", "pop"])),
            ])
            .with_id("wrapper"),
        ])
    }

    #[test]
    fn test_initial_props_in_document_order() {
        let props = sample().initial_props();
        let keys: Vec<(String, String)> =
            props.iter().map(|(id, p, _)| (id.clone(), p.clone())).collect();
        assert_eq!(
            keys,
            vec![
                ("toggle_btn".to_string(), "n_clicks".to_string()),
                ("dd".to_string(), "options".to_string()),
                ("dd".to_string(), "value".to_string()),
            ]
        );
        assert_eq!(props[0].2, json!(0));
    }

    #[test]
    fn test_find_nested_widget() {
        let tree = sample();
        assert!(matches!(
            tree.find("dd"),
            Some(ContentNode::Widget { kind: WidgetKind::Dropdown, .. })
        ));
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_json_shape_is_tagged() {
        let value = ContentNode::p("hello")
            .with_style(Style::new().set("fontSize", 30))
            .to_value();
        assert_eq!(
            value,
            json!({"type": "text", "tag": "p", "text": "hello", "style": {"fontSize": 30}})
        );
    }

    #[test]
    fn test_round_trip_through_json() {
        let tree = sample();
        let back: ContentNode = serde_json::from_value(tree.to_value()).unwrap();
        assert_eq!(back, tree);
        assert_eq!(back.node_count(), 6);
    }
}
