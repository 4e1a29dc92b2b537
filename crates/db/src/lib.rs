//! Event store access.
//!
//! [`EventRepo`] is the only entry point handlers use. It talks to an
//! [`EventStore`] implementation ([`DynamoEventStore`] in production,
//! [`InMemoryEventStore`] for tests and local runs) and applies the
//! fallback policy on the read path.

use aws_config::{BehaviorVersion, Region};

pub mod dynamo;
pub mod error;
pub mod mapping;
pub mod memory;
pub mod repositories;
pub mod store;

pub use dynamo::DynamoEventStore;
pub use error::{MalformedRecord, StoreError};
pub use memory::InMemoryEventStore;
pub use repositories::EventRepo;
pub use store::EventStore;

/// Default table holding event items.
pub const DEFAULT_TABLE_NAME: &str = "Events";

/// Create a DynamoDB client for `region`.
///
/// Credentials come from the default AWS provider chain. `endpoint_url`
/// overrides the service endpoint, e.g. to point at DynamoDB Local.
pub async fn create_client(region: &str, endpoint_url: Option<&str>) -> aws_sdk_dynamodb::Client {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
    if let Some(url) = endpoint_url {
        loader = loader.endpoint_url(url);
    }
    let sdk_config = loader.load().await;
    aws_sdk_dynamodb::Client::new(&sdk_config)
}
