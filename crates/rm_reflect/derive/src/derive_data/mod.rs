//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod record_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use record_struct::{EmbedShape, RecordField, RecordStruct};
