use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn record_(rm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rm_reflect_path::ops::Record
    }
}

#[inline]
pub(crate) fn field_value_(rm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rm_reflect_path::value::FieldValue
    }
}

#[inline]
pub(crate) fn value_(rm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rm_reflect_path::value::Value
    }
}
