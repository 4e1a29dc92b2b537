//! Route definitions for events.

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// ```text
/// GET    /events?zip=NNNNN    -> list_events
/// POST   /events              -> create_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/events",
        get(events::list_events).post(events::create_event),
    )
}
