//! DynamoDB-backed [`EventStore`].

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use eventfinder_core::types::Item;
use eventfinder_core::zip_code::ZipCode;

use crate::error::StoreError;
use crate::mapping;
use crate::store::EventStore;

/// Events table accessed through the AWS SDK.
///
/// The table's partition key is `zipCode` and its sort key is `id`. The
/// client is cheap to clone and safe for concurrent use.
#[derive(Clone)]
pub struct DynamoEventStore {
    client: Client,
    table_name: String,
}

impl DynamoEventStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl EventStore for DynamoEventStore {
    async fn query_by_zip_code(&self, zip: &ZipCode) -> Result<Vec<Item>, StoreError> {
        let mut items = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("#zip = :zip")
                .expression_attribute_names("#zip", mapping::ZIP_CODE)
                .expression_attribute_values(":zip", AttributeValue::S(zip.to_string()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| StoreError::Query(DisplayErrorContext(&e).to_string()))?;

            items.extend(output.items().iter().map(flatten));

            start_key = output
                .last_evaluated_key()
                .filter(|key| !key.is_empty())
                .cloned();
            if start_key.is_none() {
                break;
            }
        }

        Ok(items)
    }

    async fn put_item(&self, item: Item) -> Result<(), StoreError> {
        let attributes: HashMap<String, AttributeValue> = item
            .into_iter()
            .map(|(name, value)| (name, AttributeValue::S(value)))
            .collect();

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attributes))
            .send()
            .await
            .map_err(|e| StoreError::Write(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}

/// Keep string attributes only; anything else reads as absent.
fn flatten(attributes: &HashMap<String, AttributeValue>) -> Item {
    attributes
        .iter()
        .filter_map(|(name, value)| value.as_s().ok().map(|s| (name.clone(), s.clone())))
        .collect()
}
