//! Query parameter types for API handlers.

use serde::Deserialize;

/// `?zip=` for the event listing.
///
/// Optional at the extractor level so a missing value is reported with
/// the same validation error as a malformed one.
#[derive(Debug, Deserialize)]
pub struct ZipParams {
    pub zip: Option<String>,
}
