use async_trait::async_trait;
use eventfinder_core::types::Item;
use eventfinder_core::zip_code::ZipCode;

use crate::error::StoreError;

/// Key-value store holding event items, partitioned by `zipCode` and keyed
/// by `(zipCode, id)`.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// All items in the `zip` partition, in store order.
    async fn query_by_zip_code(&self, zip: &ZipCode) -> Result<Vec<Item>, StoreError>;

    /// Insert `item`, fully replacing any item with the same `(zipCode, id)`.
    async fn put_item(&self, item: Item) -> Result<(), StoreError>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
