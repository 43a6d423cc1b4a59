//! Echo an interaction payload back as JSON text.

use serde_json::Value;
use vizdeck_reactive::{Args, Cell, CellError, CellSpec, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoFormat {
    Compact,
    Pretty,
}

/// `source.property` → `target.children` as JSON text.
pub struct Echo {
    name: &'static str,
    source: (&'static str, &'static str),
    target: &'static str,
    format: EchoFormat,
}

impl Echo {
    /// Hover data from the hello-world graph.
    pub fn hover() -> Self {
        Self {
            name: "hover_echo",
            source: ("hello-graph", "hoverData"),
            target: "hello-graph-callback",
            format: EchoFormat::Compact,
        }
    }

    pub fn tap_node() -> Self {
        Self {
            name: "tap_node_echo",
            source: ("cytoscape", "tapNode"),
            target: "tap-node-json-output",
            format: EchoFormat::Pretty,
        }
    }

    pub fn tap_edge() -> Self {
        Self {
            name: "tap_edge_echo",
            source: ("cytoscape", "tapEdge"),
            target: "tap-edge-json-output",
            format: EchoFormat::Pretty,
        }
    }
}

impl Cell for Echo {
    type State = ();

    fn spec(&self) -> CellSpec {
        let (component, property) = self.source;
        CellSpec::new(self.name).input(component, property).output(self.target, "children")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        let (component, property) = self.source;
        let payload = args.get(component, property).cloned().unwrap_or(Value::Null);
        let text = match self.format {
            EchoFormat::Compact => serde_json::to_string(&payload)?,
            EchoFormat::Pretty => serde_json::to_string_pretty(&payload)?,
        };
        Ok(Outcome::emit(vec![Value::String(text)]))
    }
}
