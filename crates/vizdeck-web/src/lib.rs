//! vizdeck-web — axum server for the deck.
//!
//! Serves the page shell, the route and update endpoints the client drives,
//! a server-sent event stream and the static asset directory.

pub mod handlers;
pub mod router;
pub mod sse;
pub mod state;

pub use router::build_router;
pub use state::{AppState, DeckEvent, SharedState};
