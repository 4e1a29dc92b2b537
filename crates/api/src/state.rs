use eventfinder_db::EventRepo;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store handle is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Event repository over the process-wide store handle.
    pub event_repo: EventRepo,
}
