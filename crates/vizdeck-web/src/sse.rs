//! Server-sent deck activity.
//!
//! Each [`DeckEvent`] goes out as a named SSE event (`route_changed`,
//! `ports_updated`) carrying the event as JSON. Subscribers that fall behind
//! the broadcast buffer skip what they missed.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_core::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use tracing::debug;

use crate::state::{DeckEvent, SharedState};

fn to_sse(event: &DeckEvent) -> Option<Event> {
    match Event::default().event(event.kind()).json_data(event) {
        Ok(sse) => Some(sse),
        Err(e) => {
            debug!("dropping {} event: {}", event.kind(), e);
            None
        }
    }
}

pub async fn sse_handler(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.subscribe())
        .filter_map(|received| received.ok().as_ref().and_then(to_sse).map(Ok));

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}
