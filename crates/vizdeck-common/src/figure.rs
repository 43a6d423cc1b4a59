//! Plotly-shaped chart specifications.
//!
//! Only the attributes the deck actually emits are modelled; anything else can
//! be attached through [`Layout::extra`]. Rendering happens in the browser.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Bar,
    Scatter,
    Scattermapbox,
    Splom,
    Parcoords,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub x: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub y: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lat: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lon: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Value>,
}

impl Trace {
    pub fn new(kind: TraceKind) -> Self {
        Self {
            kind,
            name: None,
            x: Vec::new(),
            y: Vec::new(),
            lat: Vec::new(),
            lon: Vec::new(),
            text: Vec::new(),
            mode: None,
            marker: None,
            dimensions: Vec::new(),
        }
    }

    pub fn bar(x: Vec<Value>, y: Vec<Value>) -> Self {
        Self { x, y, ..Self::new(TraceKind::Bar) }
    }

    pub fn scatter(x: Vec<Value>, y: Vec<Value>, mode: &str) -> Self {
        Self { x, y, mode: Some(mode.to_string()), ..Self::new(TraceKind::Scatter) }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn text(mut self, text: Vec<Value>) -> Self {
        self.text = text;
        self
    }

    pub fn marker(mut self, marker: Value) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn mode(mut self, mode: &str) -> Self {
        self.mode = Some(mode.to_string());
        self
    }

    /// Number of plotted points (x, lat or first dimension, whichever is set).
    pub fn point_count(&self) -> usize {
        if !self.x.is_empty() {
            self.x.len()
        } else if !self.lat.is_empty() {
            self.lat.len()
        } else {
            self.dimensions
                .first()
                .and_then(|d| d.get("values"))
                .and_then(Value::as_array)
                .map_or(0, Vec::len)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl Axis {
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }

    pub fn log(mut self) -> Self {
        self.axis_type = Some("log".to_string());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapbox: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

impl Layout {
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }
}

/// One animation frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout, frames: Vec::new() }
    }

    /// Sum of plotted points across traces.
    pub fn point_count(&self) -> usize {
        self.data.iter().map(Trace::point_count).sum()
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
