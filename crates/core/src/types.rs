/// Event timestamps are local date-times with no zone component.
pub type Timestamp = chrono::NaiveDateTime;

/// Flat attribute map as read from or written to the event store.
pub type Item = std::collections::HashMap<String, String>;
