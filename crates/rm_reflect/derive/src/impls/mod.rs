// -----------------------------------------------------------------------------
// Modules

mod trait_record;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordStruct;

pub(crate) use trait_record::impl_trait_record;
pub(crate) use trait_typed::impl_trait_typed;

/// Provided for `#[derive(Record)]`.
pub(crate) fn impl_record_struct(record: &RecordStruct) -> TokenStream {
    let typed_impl = impl_trait_typed(record);
    let record_impl = impl_trait_record(record);

    quote! {
        #typed_impl

        #record_impl
    }
}

/// Splits the generics of `record` for an impl block, adding the record bounds.
fn split_generics(record: &RecordStruct) -> (TokenStream, TokenStream, TokenStream) {
    let (impl_generics, ty_generics, where_clause) = record.generics().split_for_impl();

    let mut predicates: Vec<TokenStream> = match where_clause {
        // Maintain existing where clause bounds, if any.
        Some(where_clause) => where_clause.predicates.iter().map(|p| quote!(#p)).collect(),
        None => Vec::new(),
    };
    predicates.extend(record.where_predicates());

    let where_clause = if predicates.is_empty() {
        crate::utils::empty()
    } else {
        quote!(where #(#predicates,)*)
    };

    (quote!(#impl_generics), quote!(#ty_generics), where_clause)
}
