//! Provide compile-time record infomation.
//!
//! ## Menu
//!
//! - [`FieldInfo`]: static metadata of one field: name, optional alias,
//!   [`Visibility`], flatten flag and declared type.
//! - [`RecordInfo`]: the table of [`FieldInfo`] of a record type, in declaration order.
//! - [`Typed`]: A trait for obtaining `RecordInfo` without an instance.
//!
//! Both are generated by [`#[derive(Record)]`](crate::derive::Record) and cached
//! in a process-wide cell, see [`impls`](crate::impls).

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod record_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::{FieldInfo, Visibility};
pub use record_info::RecordInfo;
pub use typed::Typed;
