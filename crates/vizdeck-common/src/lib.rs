//! vizdeck-common — Shared types and errors used across all vizdeck crates.
//!
//! - [`content`]: the immutable content tree a slide is built from
//! - [`figure`]: Plotly-shaped chart specifications
//! - [`error`]: workspace error types

pub mod content;
pub mod error;
pub mod figure;

// Re-export commonly used types
pub use content::{ContentNode, Style, TextTag, WidgetKind};
pub use error::{ApiError, Result, VizdeckError};
pub use figure::{Axis, Figure, Layout, Trace, TraceKind};
