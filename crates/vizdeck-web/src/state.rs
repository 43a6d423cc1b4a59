//! Shared application state for the web server.

use std::sync::Arc;

use anyhow::Context;
use minijinja::Environment;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use vizdeck_common::ContentNode;
use vizdeck_reactive::{spawn_dispatcher, DispatcherHandle, Router};
use vizdeck_slides::Deck;

pub const PAGE_TEMPLATE: &str = "index.html";

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeckEvent {
    /// A client mounted a slide. `route` is `None` when the default view was used.
    RouteChanged { pathname: String, route: Option<String> },
    /// A dispatch wrote these ports.
    PortsUpdated { ports: Vec<String> },
}

impl DeckEvent {
    /// SSE event name; matches the serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            DeckEvent::RouteChanged { .. } => "route_changed",
            DeckEvent::PortsUpdated { .. } => "ports_updated",
        }
    }
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub dispatcher: DispatcherHandle,
    pub router: Router,
    pub layout: Arc<ContentNode>,
    pub templates: Environment<'static>,
    /// Broadcast channel for SSE push events
    pub event_tx: broadcast::Sender<DeckEvent>,
}

impl AppState {
    /// Move the deck's cell graph into the dispatcher task. Must be called
    /// inside a tokio runtime.
    pub fn new(deck: Deck) -> anyhow::Result<Self> {
        let Deck { router, graph, layout } = deck;
        let mut templates = Environment::new();
        templates
            .add_template(PAGE_TEMPLATE, include_str!("../templates/index.html"))
            .context("compiling page template")?;
        let (event_tx, _) = broadcast::channel(256);

        Ok(Self {
            dispatcher: spawn_dispatcher(graph),
            router,
            layout: Arc::new(layout),
            templates,
            event_tx,
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DeckEvent> {
        self.event_tx.subscribe()
    }

    /// Nobody listening is the common case, so send errors are ignored.
    pub fn publish(&self, event: DeckEvent) {
        let _ = self.event_tx.send(event);
    }
}

pub type SharedState = Arc<AppState>;
