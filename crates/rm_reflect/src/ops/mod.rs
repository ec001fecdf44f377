//! Provide the [`Record`] interface and the conversions between a record and
//! a [`GenericMap`](crate::value::GenericMap).
//!
//! ## Menu
//!
//! - [`Record`]: field access by index, implemented by [`#[derive(Record)]`](crate::derive::Record).
//! - [`to_map`]: writes the exported fields of a record into a flat map.
//! - [`from_map`] and [`from_map_owned`]: assign map entries to fields.
//! - [`value_to_map`]: like [`to_map`], for a record held in a [`Value`](crate::value::Value).
//! - [`Exclusions`]: field names skipped by [`to_map`], matched case-insensitively.
//! - [`ConvertError`]: failures of [`from_map`] and [`value_to_map`].

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod error;
mod exclusions;
mod record;

// -----------------------------------------------------------------------------
// Exports

pub use convert::{from_map, from_map_owned, to_map, value_to_map};
pub use error::ConvertError;
pub use exclusions::Exclusions;
pub use record::Record;
