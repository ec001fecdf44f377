//! See [`Record`].
#![cfg_attr(docsrs, feature(doc_cfg))]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static RECORD_ATTRIBUTE_NAME: &str = "record";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` implements `Typed` and `Record` for a struct with
/// named fields, so it can be converted to and from a `GenericMap`.
///
/// Tuple structs, unit structs, enums and unions are rejected, as are types
/// with lifetime parameters.
///
/// ## Visibility
///
/// Only `pub` fields are exported. Fields declared `pub(crate)`,
/// `pub(super)` or private are listed in the `RecordInfo`, but never read or
/// assigned by the conversions, and their types need no `FieldValue`.
///
/// Every exported field type must implement `FieldValue`. Nested records
/// do so when they also implement `Clone`, `PartialEq` and `Debug`.
///
/// ## Alias
///
/// The key written by `to_map` can be changed with `alias`. It does not
/// change the name used by `from_map`.
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct User {
///     #[record(alias = "mail")]
///     pub email: String,
/// }
/// ```
///
/// An empty alias is ignored.
///
/// ## Flatten
///
/// A `flatten` field merges the fields of an embedded record into the
/// parent map, whatever its own visibility. Its type must be a record `T`,
/// or `Box<T>`, `Option<T>` or `Option<Box<T>>`.
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct Base {
///     pub id: u64,
/// }
///
/// #[derive(Record)]
/// struct User {
///     #[record(flatten)]
///     base: Option<Box<Base>>,
///     pub name: String,
/// }
/// ```
///
/// A flattened field cannot have an alias, and a record cannot flatten itself.
///
/// ## Generics
///
/// Type parameters get a `'static` bound. Field types that mention them get
/// `FieldValue` (exported fields) or `Record + Typed` (flattened fields) bounds.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let record = match derive_data::RecordStruct::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let record_impls = impls::impl_record_struct(&record);

    TokenStream::from(quote! {
        const _: () = {
            #record_impls
        };
    })
}
