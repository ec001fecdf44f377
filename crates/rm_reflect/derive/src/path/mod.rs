//! This independent module is used to provide the required path.
//! So as to minimize changes when the `rm_reflect` structure is modified.
//!
//! The only special feature is the path of rm_reflect itself,
//! See [`rm_reflect`] function doc.

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `rm_reflect` crate.
///
/// 1. For crates that depend on `rm_reflect`, `::rm_reflect` is returned here.
/// 2. For crates that depend on `recmap`, `::recmap::reflect` is returned here.
/// 3. For other situations, `::rm_reflect` is returned here, but this may be incorrect.
///
/// It reads the builder's `Cargo.toml`, so the result is passed around
/// instead of being fetched again.
pub(crate) fn rm_reflect() -> syn::Path {
    rm_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("rm_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;
