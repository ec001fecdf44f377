use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn typed_(rm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rm_reflect_path::info::Typed
    }
}

#[inline]
pub(crate) fn record_info_(rm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rm_reflect_path::info::RecordInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(rm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rm_reflect_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn visibility_(rm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #rm_reflect_path::info::Visibility
    }
}
