//! The event record and its create payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::datetime;
use crate::error::CoreError;
use crate::types::Timestamp;
use crate::zip_code::ZIP_CODE_RE;

/// A dated, located occurrence keyed by postal code.
///
/// The store's composite key is `(zip_code, id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "datetime::iso_local")]
    pub date_time: Timestamp,
    pub location: String,
    pub zip_code: String,
    pub category: Option<String>,
    pub source_url: Option<String>,
}

impl Event {
    /// Build an event from its five required fields, parsing `date_time`
    /// as an ISO local date-time.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        zip_code: impl Into<String>,
        date_time: &str,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::Validation("name must not be empty".to_string()));
        }
        Ok(Self::at(
            id,
            name,
            location,
            zip_code,
            datetime::parse(date_time)?,
        ))
    }

    /// Same as [`Event::new`] with an already-parsed timestamp.
    pub fn at(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        zip_code: impl Into<String>,
        date_time: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            date_time,
            location: location.into(),
            zip_code: zip_code.into(),
            category: None,
            source_url: None,
        }
    }
}

/// Request body for creating (or overwriting) an event.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    /// Assigned as a random UUID when absent or blank.
    pub id: Option<String>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub date_time: String,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    #[validate(regex(path = *ZIP_CODE_RE, message = "zipCode must be exactly five digits"))]
    pub zip_code: String,
    pub category: Option<String>,
    #[validate(url(message = "sourceUrl must be a valid URL"))]
    pub source_url: Option<String>,
}

impl NewEvent {
    /// Validate the payload and turn it into an [`Event`].
    ///
    /// `name` and `location` are trimmed first, so blank values are rejected.
    pub fn into_event(mut self) -> Result<Event, CoreError> {
        self.name = self.name.trim().to_string();
        self.location = self.location.trim().to_string();
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        let date_time = datetime::parse(&self.date_time)?;

        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(Event {
            id,
            name: self.name,
            description: self.description,
            date_time,
            location: self.location,
            zip_code: self.zip_code,
            category: self.category,
            source_url: self.source_url,
        })
    }
}
