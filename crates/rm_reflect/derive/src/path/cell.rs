use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn non_generic_info_cell_(rm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rm_reflect_path::impls::NonGenericInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_info_cell_(rm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rm_reflect_path::impls::GenericInfoCell
    }
}

#[inline(always)]
pub(crate) fn embedded_from_value_(rm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rm_reflect_path::impls::embedded_from_value
    }
}

#[inline(always)]
pub(crate) fn optional_embedded_from_value_(rm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rm_reflect_path::impls::optional_embedded_from_value
    }
}
