//! In-process [`EventStore`] for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use eventfinder_core::types::Item;
use eventfinder_core::zip_code::ZipCode;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::mapping;
use crate::store::EventStore;

/// Items grouped by `zipCode`, each partition in insertion order.
#[derive(Default)]
pub struct InMemoryEventStore {
    partitions: RwLock<HashMap<String, Vec<Item>>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored items across all partitions.
    pub async fn len(&self) -> usize {
        self.partitions.read().await.values().map(Vec::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn query_by_zip_code(&self, zip: &ZipCode) -> Result<Vec<Item>, StoreError> {
        let partitions = self.partitions.read().await;
        Ok(partitions.get(zip.as_str()).cloned().unwrap_or_default())
    }

    async fn put_item(&self, item: Item) -> Result<(), StoreError> {
        let (Some(zip), Some(id)) = (item.get(mapping::ZIP_CODE), item.get(mapping::ID)) else {
            return Err(StoreError::Write(format!(
                "item is missing key attribute '{}' or '{}'",
                mapping::ZIP_CODE,
                mapping::ID
            )));
        };
        let (zip, id) = (zip.clone(), id.clone());

        let mut partitions = self.partitions.write().await;
        let partition = partitions.entry(zip).or_default();
        match partition
            .iter()
            .position(|existing| existing.get(mapping::ID) == Some(&id))
        {
            Some(index) => partition[index] = item,
            None => partition.push(item),
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
