//! Conversion between [`Event`] and the flat attribute map stored per item.
//!
//! Attribute names live here and nowhere else.

use eventfinder_core::datetime;
use eventfinder_core::event::Event;
use eventfinder_core::types::Item;

use crate::error::MalformedRecord;

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const LOCATION: &str = "location";
/// Partition key.
pub const ZIP_CODE: &str = "zipCode";
/// Stored form of `Event::date_time`.
pub const DATE: &str = "date";
pub const DESCRIPTION: &str = "description";
pub const CATEGORY: &str = "category";
pub const SOURCE_URL: &str = "sourceUrl";

/// Map a stored item to an [`Event`].
///
/// `id`, `name`, `location`, `zipCode` and `date` are required and must not
/// be blank; optional attributes are carried through when present.
pub fn event_from_item(item: &Item) -> Result<Event, MalformedRecord> {
    let date = required(item, DATE)?;
    let date_time = datetime::parse(date)
        .map_err(|e| MalformedRecord(format!("attribute '{DATE}': {e}")))?;

    let mut event = Event::at(
        required(item, ID)?,
        required(item, NAME)?,
        required(item, LOCATION)?,
        required(item, ZIP_CODE)?,
        date_time,
    );
    event.description = item.get(DESCRIPTION).cloned();
    event.category = item.get(CATEGORY).cloned();
    event.source_url = item.get(SOURCE_URL).cloned();
    Ok(event)
}

/// Flatten an [`Event`] into a store item. Absent optional fields are omitted.
pub fn item_from_event(event: &Event) -> Item {
    let mut item = Item::from([
        (ID.to_string(), event.id.clone()),
        (NAME.to_string(), event.name.clone()),
        (LOCATION.to_string(), event.location.clone()),
        (ZIP_CODE.to_string(), event.zip_code.clone()),
        (DATE.to_string(), datetime::format(&event.date_time)),
    ]);

    let optional = [
        (DESCRIPTION, &event.description),
        (CATEGORY, &event.category),
        (SOURCE_URL, &event.source_url),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            item.insert(name.to_string(), value.clone());
        }
    }

    item
}

fn required<'a>(item: &'a Item, name: &str) -> Result<&'a str, MalformedRecord> {
    match item.get(name).map(String::as_str) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(MalformedRecord(format!("blank attribute '{name}'"))),
        None => Err(MalformedRecord(format!("missing attribute '{name}'"))),
    }
}
