//! Repository for events, with placeholder fallback on the read path.

use std::sync::Arc;

use eventfinder_core::event::Event;
use eventfinder_core::fallback;
use eventfinder_core::types::Item;
use eventfinder_core::zip_code::ZipCode;

use crate::error::StoreError;
use crate::mapping::{event_from_item, item_from_event};
use crate::store::EventStore;

/// Reads and writes events through a shared [`EventStore`] handle.
///
/// Cloning is cheap; all clones share the same store.
#[derive(Clone)]
pub struct EventRepo {
    store: Arc<dyn EventStore>,
}

impl EventRepo {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// List events for `zip`.
    ///
    /// Never fails and never returns an empty list: see
    /// [`resolve_query_outcome`].
    pub async fn find_by_zip_code(&self, zip: &ZipCode) -> Vec<Event> {
        let outcome = self
            .store
            .query_by_zip_code(zip)
            .await
            .map(|items| map_items(zip, &items));
        resolve_query_outcome(zip, outcome)
    }

    /// Upsert `event` keyed by `(zip_code, id)`. Store errors propagate.
    pub async fn save(&self, event: &Event) -> Result<(), StoreError> {
        self.store.put_item(item_from_event(event)).await?;
        tracing::info!(zip_code = %event.zip_code, event_id = %event.id, "Event saved");
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.store.health_check().await
    }
}

/// Fallback policy for the read path.
///
/// An empty result and a failed query are treated the same: both yield
/// freshly generated placeholder events. The error is logged, not returned.
pub fn resolve_query_outcome(
    zip: &ZipCode,
    outcome: Result<Vec<Event>, StoreError>,
) -> Vec<Event> {
    match outcome {
        Ok(events) if !events.is_empty() => events,
        Ok(_) => {
            tracing::info!(zip_code = %zip, "No stored events, generating placeholders");
            fallback::generate_events(zip)
        }
        Err(err) => {
            tracing::error!(
                zip_code = %zip,
                error = %err,
                "Event query failed, generating placeholders"
            );
            fallback::generate_events(zip)
        }
    }
}

/// Map store items to events, skipping rows that cannot be mapped.
fn map_items(zip: &ZipCode, items: &[Item]) -> Vec<Event> {
    items
        .iter()
        .filter_map(|item| match event_from_item(item) {
            Ok(event) => Some(event),
            Err(err) => {
                tracing::warn!(zip_code = %zip, error = %err, "Skipping malformed event item");
                None
            }
        })
        .collect()
}
