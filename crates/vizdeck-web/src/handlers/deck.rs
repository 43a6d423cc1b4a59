//! Endpoints the client drives: mounting a route and pushing changed ports.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use vizdeck_common::ApiError;
use vizdeck_reactive::{CellSpec, Dispatch, Port};

use crate::state::{DeckEvent, SharedState};

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub pathname: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Registered route that was mounted, `null` for the default view.
    pub route: Option<String>,
    pub outputs: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct ChangedPort {
    pub port: Port,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub changed: Vec<ChangedPort>,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub outputs: Map<String, Value>,
}

fn outputs(dispatch: &Dispatch) -> Map<String, Value> {
    dispatch
        .updates
        .iter()
        .map(|(port, value)| (port.to_string(), value.clone()))
        .collect()
}

fn publish_ports(state: &SharedState, dispatch: &Dispatch) {
    if !dispatch.is_empty() {
        let ports = dispatch.updates.iter().map(|(p, _)| p.to_string()).collect();
        state.publish(DeckEvent::PortsUpdated { ports });
    }
}

/// Mount the slide for `pathname`: the location change and the slide's
/// seeded component values go through the graph as one change set.
pub async fn mount_route(
    State(state): State<SharedState>,
    body: Result<Json<RouteRequest>, JsonRejection>,
) -> Result<Json<RouteResponse>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let pathname = req.pathname.as_deref();
    let route = state.router.route_key(pathname);
    let view = state.router.resolve(pathname);

    let mut changed = vec![(
        Port::new("url", "pathname"),
        pathname.map(Value::from).unwrap_or(Value::Null),
    )];
    changed.extend(
        view.initial_props()
            .into_iter()
            .map(|(id, prop, value)| (Port::new(&id, &prop), value)),
    );
    debug!(?pathname, ports = changed.len(), "mounting route");

    let dispatch = state.dispatcher.dispatch(changed).await?;
    state.publish(DeckEvent::RouteChanged {
        pathname: pathname.unwrap_or_default().to_string(),
        route: route.clone(),
    });
    publish_ports(&state, &dispatch);

    Ok(Json(RouteResponse { route, outputs: outputs(&dispatch) }))
}

/// Push changed ports. Answers 204 when no cell produced an update.
pub async fn update(
    State(state): State<SharedState>,
    body: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    if req.changed.is_empty() {
        return Err(ApiError::bad_request("no changed ports"));
    }
    let changed = req.changed.into_iter().map(|c| (c.port, c.value)).collect();

    let dispatch = state.dispatcher.dispatch(changed).await?;
    if dispatch.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    publish_ports(&state, &dispatch);
    Ok(Json(UpdateResponse { outputs: outputs(&dispatch) }).into_response())
}

pub async fn dependencies(State(state): State<SharedState>) -> Json<Vec<CellSpec>> {
    Json(state.dispatcher.dependencies().to_vec())
}

pub async fn routes(State(state): State<SharedState>) -> Json<Vec<String>> {
    Json(state.router.views().routes().map(str::to_string).collect())
}
