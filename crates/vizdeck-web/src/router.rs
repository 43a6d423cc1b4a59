//! Axum router — all routes and middleware.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use vizdeck_config::Config;

use crate::handlers::{deck, page};
use crate::sse::sse_handler;
use crate::state::AppState;

pub fn build_router(state: AppState, config: &Config) -> Router {
    let shared = Arc::new(state);

    let app = Router::new()
        .route("/", get(page::index))
        .route("/_deck/route", post(deck::mount_route))
        .route("/_deck/update", post(deck::update))
        .route("/_deck/dependencies", get(deck::dependencies))
        .route("/_deck/routes", get(deck::routes))
        .route("/_deck/events", get(sse_handler))
        .nest_service("/assets", ServeDir::new(&config.assets.dir))
        .fallback(page::fallback)
        .with_state(shared);

    let app = if config.server.debug {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };
    app.layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
