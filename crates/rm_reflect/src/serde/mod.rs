//! Provide `serde` support for [`Value`](crate::value::Value).
//!
//! A [`GenericMap`](crate::value::GenericMap) holds `Value`s, so it can be
//! written to and read from any `serde` format.
//!
//! - Serialization writes the plain content: scalars as themselves, `Nil` as
//!   unit, lists as sequences, maps as maps and records as the map produced by
//!   [`to_map`](crate::ops::to_map) with no exclusions.
//! - Deserialization only produces dynamic kinds: `Nil`, `Bool`, `I64` or
//!   `U64`, `F64`, `String`, `List` and `Map`. The width of the original
//!   integers is not kept.
//!
//! # Examples
//!
//! ```
//! use rm_reflect::{derive::Record, ops::{Exclusions, to_map}, value::{GenericMap, Value}};
//!
//! #[derive(Record)]
//! struct User {
//!     pub name: String,
//!     pub age: u8,
//! }
//!
//! let map = to_map(&User { name: "Ann".into(), age: 7 }, &Exclusions::empty());
//! let json = serde_json::to_string(&map).unwrap();
//!
//! let back: GenericMap = serde_json::from_str(&json).unwrap();
//! assert_eq!(back["name"], Value::from("Ann"));
//! assert_eq!(back["age"], Value::U64(7));
//! ```

// -----------------------------------------------------------------------------
// Modules

mod de;
mod ser;
