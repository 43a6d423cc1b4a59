//! The page shell every client path boots from.

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use minijinja::context;
use vizdeck_common::{ApiError, VizdeckError};

use crate::state::{SharedState, PAGE_TEMPLATE};

pub const PAGE_TITLE: &str = "用Dash的可视化";

/// Layout JSON safe to drop into a `<script>` block.
fn script_json(value: &serde_json::Value) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let layout = script_json(&state.layout.to_value()).map_err(VizdeckError::from)?;
    let template = state
        .templates
        .get_template(PAGE_TEMPLATE)
        .map_err(|e| VizdeckError::Other(e.into()))?;
    let html = template
        .render(context! { title => PAGE_TITLE, layout => layout })
        .map_err(|e| VizdeckError::Other(e.into()))?;
    Ok(Html(html))
}

/// Client-side paths get the shell; anything else is a 404.
pub async fn fallback(method: Method, state: State<SharedState>) -> Response {
    if method != Method::GET {
        return StatusCode::NOT_FOUND.into_response();
    }
    index(state).await.into_response()
}
