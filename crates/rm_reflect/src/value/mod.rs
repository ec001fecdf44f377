//! Provide the dynamic value container used by the converter.
//!
//! - [`Value`]: a tagged union over every kind a record field can hold.
//! - [`ValueKind`]: the bare tag of a [`Value`].
//! - [`RecordValue`]: a type-erased record stored inside a [`Value`].
//! - [`FieldValue`]: conversion between a field type and [`Value`],
//!   with exact type checking.
//! - [`GenericMap`]: the flat, string-keyed map produced by [`to_map`].
//!
//! [`to_map`]: crate::ops::to_map

// -----------------------------------------------------------------------------
// Modules

mod field_value;
mod record_value;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use field_value::FieldValue;
pub use record_value::RecordValue;
pub use value::{Value, ValueKind};

/// A string-keyed, heterogeneously-valued map.
///
/// Keys are unique, iteration order is unspecified.
pub type GenericMap = rm_utils::hash::HashMap<String, Value>;
