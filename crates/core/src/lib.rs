//! Domain types for the zip-code event finder.
//!
//! Holds everything that does not touch the network: the [`event::Event`]
//! record, postal-code validation, the local date-time codec used on the
//! wire and in the store, and the placeholder generator used when a lookup
//! comes back empty.

pub mod datetime;
pub mod error;
pub mod event;
pub mod fallback;
pub mod types;
pub mod zip_code;
