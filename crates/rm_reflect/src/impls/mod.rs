//! Provide some utilities for implementing the record traits.
//!
//! - [`NonGenericInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericInfoCell`]: Used to implement [`Typed`] for generic types.
//! - [`embedded_from_value`] and [`optional_embedded_from_value`]: Used to assign
//!   a flattened field from a [`Value`].
//!
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericInfoCell, NonGenericInfoCell};

use crate::ops::Record;
use crate::value::Value;

/// Takes the embedded record of type `T` out of `value`.
///
/// Only a [`Value::Record`] holding exactly `T` is accepted, anything else is
/// handed back unchanged.
pub fn embedded_from_value<T: Record>(value: Value) -> Result<T, Value> {
    match value {
        Value::Record(record) => record.downcast::<T>().map_err(Value::Record),
        other => Err(other),
    }
}

/// Like [`embedded_from_value`], for a nullable embedded record:
/// [`Value::Nil`] clears it.
pub fn optional_embedded_from_value<T: Record>(value: Value) -> Result<Option<T>, Value> {
    match value {
        Value::Nil => Ok(None),
        other => embedded_from_value(other).map(Some),
    }
}
