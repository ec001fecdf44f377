#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub(crate) mod cfg {
    /// Expands its body only when `debug_assertions` and the `debug` feature
    /// are both enabled.
    macro_rules! debug {
        ($($tt:tt)*) => {
            if cfg!(all(debug_assertions, feature = "debug")) {
                $($tt)*
            }
        };
    }

    pub(crate) use debug;
}

// -----------------------------------------------------------------------------
// Extern Self

// Usually, we need to use `crate` in the crate itself and use `rm_reflect` in doc testing.
// But `macro_utils::Manifest` can only choose one, so we must have an
// `extern self` to ensure `rm_reflect` can be used as an alias for `crate`.
extern crate self as rm_reflect;

// -----------------------------------------------------------------------------
// Modules

pub mod impls;
pub mod info;
pub mod ops;
pub mod serde;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use ops::{ConvertError, Exclusions, Record, from_map, from_map_owned, to_map, value_to_map};
pub use rm_reflect_derive as derive;
pub use value::{FieldValue, GenericMap, Value};
