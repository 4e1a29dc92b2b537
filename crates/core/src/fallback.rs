//! Placeholder events for postal codes with no stored data.
//!
//! The generated records are never persisted. Every call draws fresh ids
//! and dates relative to the clock at call time.

use chrono::{Duration, Local};
use uuid::Uuid;

use crate::event::Event;
use crate::types::Timestamp;
use crate::zip_code::ZipCode;

/// `(name, location, days from now)` for each generated event, in output order.
pub const FALLBACK_TEMPLATES: [(&str, &str, i64); 3] = [
    ("Zip Jam Festival", "Main Street Park", 3),
    ("Art & Wine Walk", "Historic District", 7),
    ("Tech Meetup", "Innovation Hub", 10),
];

/// Generate the placeholder events for `zip` relative to the local clock.
pub fn generate_events(zip: &ZipCode) -> Vec<Event> {
    generate_events_at(zip, Local::now().naive_local())
}

/// Generate the placeholder events for `zip` relative to `now`.
pub fn generate_events_at(zip: &ZipCode, now: Timestamp) -> Vec<Event> {
    FALLBACK_TEMPLATES
        .iter()
        .map(|(name, location, days)| {
            Event::at(
                Uuid::new_v4().to_string(),
                *name,
                *location,
                zip.as_str(),
                now + Duration::days(*days),
            )
        })
        .collect()
}
