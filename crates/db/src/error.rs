/// Failure talking to the event store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Event query failed: {0}")]
    Query(String),

    #[error("Event write failed: {0}")]
    Write(String),

    #[error("Event store unavailable: {0}")]
    Unavailable(String),
}

/// A stored item that cannot be mapped to an event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed event item: {0}")]
pub struct MalformedRecord(pub String);
