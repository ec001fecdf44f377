use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{RecordField, RecordStruct};

/// Generate the `FieldInfo` expression of one field.
///
/// Similar to following:
///
/// ```ignore
/// _path_::FieldInfo::new::<u64>("id")
///     .with_alias("key")
///     .with_visibility(_path_::Visibility::Exported)
/// ```
fn field_info_tokens(record: &RecordStruct, field: &RecordField) -> TokenStream {
    let rm_reflect_path = record.rm_reflect_path();
    let field_info_ = crate::path::field_info_(rm_reflect_path);
    let visibility_ = crate::path::visibility_(rm_reflect_path);

    let name = field.ident.to_string();
    let ty = field.ty;

    let constructor = match field.embed {
        Some((_, embedded)) => quote!(#field_info_::flatten::<#ty, #embedded>(#name)),
        None => quote!(#field_info_::new::<#ty>(#name)),
    };

    let with_alias = match &field.attrs.alias {
        Some(alias) => quote!(.with_alias(#alias)),
        None => crate::utils::empty(),
    };

    let with_visibility = if field.exported {
        quote!(.with_visibility(#visibility_::Exported))
    } else {
        crate::utils::empty()
    };

    quote! {
        #constructor
            #with_alias
            #with_visibility
    }
}

/// Generate implementation code for `Typed`.
pub(crate) fn impl_trait_typed(record: &RecordStruct) -> TokenStream {
    let rm_reflect_path = record.rm_reflect_path();
    let typed_ = crate::path::typed_(rm_reflect_path);
    let record_info_ = crate::path::record_info_(rm_reflect_path);

    let type_name = record.ident().to_string();
    let fields = record
        .fields()
        .iter()
        .map(|field| field_info_tokens(record, field));

    let info_tokens = quote! {
        #record_info_::new::<Self>(#type_name, ::std::vec![#(#fields),*])
    };

    let inner_cell_tokens = if record.is_generic() {
        let info_cell = crate::path::generic_info_cell_(rm_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_info_cell_(rm_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #info_tokens
            })
        }
    };

    let ident = record.ident();
    let (impl_generics, ty_generics, where_clause) = super::split_generics(record);

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn record_info() -> &'static #record_info_ {
                #inner_cell_tokens
            }
        }
    }
}
