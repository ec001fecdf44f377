use proc_macro2::TokenStream;
use quote::quote;
use syn::Index;

use crate::derive_data::{EmbedShape, RecordStruct};

/// Generate implementation code for `Record`.
///
/// Every method is a `match` on the field index; fields that do not take
/// part (unexported, or not flattened for `embedded`) fall into the `_` arm.
pub(crate) fn impl_trait_record(record: &RecordStruct) -> TokenStream {
    let rm_reflect_path = record.rm_reflect_path();
    let record_ = crate::path::record_(rm_reflect_path);
    let typed_ = crate::path::typed_(rm_reflect_path);
    let record_info_ = crate::path::record_info_(rm_reflect_path);
    let field_value_ = crate::path::field_value_(rm_reflect_path);
    let value_ = crate::path::value_(rm_reflect_path);
    let embedded_from_value_ = crate::path::embedded_from_value_(rm_reflect_path);
    let optional_embedded_from_value_ =
        crate::path::optional_embedded_from_value_(rm_reflect_path);

    let mut value_arms = Vec::new();
    let mut embedded_arms = Vec::new();
    let mut embedded_mut_arms = Vec::new();
    let mut set_arms = Vec::new();

    for field in record.fields() {
        let index = Index::from(field.index);
        let ident = field.ident;
        let ty = field.ty;

        if let Some((shape, embedded)) = field.embed {
            let (get, get_mut) = match shape {
                EmbedShape::Plain => (
                    quote!(::core::option::Option::Some(&self.#ident as &dyn #record_)),
                    quote!(::core::option::Option::Some(&mut self.#ident as &mut dyn #record_)),
                ),
                EmbedShape::Boxed => (
                    quote!(::core::option::Option::Some(&*self.#ident as &dyn #record_)),
                    quote!(::core::option::Option::Some(&mut *self.#ident as &mut dyn #record_)),
                ),
                EmbedShape::Optional => (
                    quote!(self.#ident.as_ref().map(|v| v as &dyn #record_)),
                    quote!(self.#ident.as_mut().map(|v| v as &mut dyn #record_)),
                ),
                EmbedShape::OptionalBoxed => (
                    quote!(self.#ident.as_deref().map(|v| v as &dyn #record_)),
                    quote!(self.#ident.as_deref_mut().map(|v| v as &mut dyn #record_)),
                ),
            };
            embedded_arms.push(quote!(#index => #get,));
            embedded_mut_arms.push(quote!(#index => #get_mut,));

            if field.exported {
                let take = match shape {
                    EmbedShape::Plain => quote!(#embedded_from_value_::<#embedded>(value)?),
                    EmbedShape::Boxed => {
                        quote!(::std::boxed::Box::new(#embedded_from_value_::<#embedded>(value)?))
                    }
                    EmbedShape::Optional => {
                        quote!(#optional_embedded_from_value_::<#embedded>(value)?)
                    }
                    EmbedShape::OptionalBoxed => quote! {
                        #optional_embedded_from_value_::<#embedded>(value)?
                            .map(::std::boxed::Box::new)
                    },
                };
                set_arms.push(quote! {
                    #index => {
                        self.#ident = #take;
                        ::core::result::Result::Ok(())
                    }
                });
            }
        } else if field.is_value() {
            value_arms.push(quote! {
                #index => ::core::option::Option::Some(
                    <#ty as #field_value_>::to_value(&self.#ident)
                ),
            });
            set_arms.push(quote! {
                #index => {
                    self.#ident = <#ty as #field_value_>::from_value(value)?;
                    ::core::result::Result::Ok(())
                }
            });
        }
    }

    let ident = record.ident();
    let (impl_generics, ty_generics, where_clause) = super::split_generics(record);

    quote! {
        #[allow(clippy::match_single_binding)]
        impl #impl_generics #record_ for #ident #ty_generics #where_clause {
            #[inline]
            fn info(&self) -> &'static #record_info_ {
                <Self as #typed_>::record_info()
            }

            fn field_value(&self, index: usize) -> ::core::option::Option<#value_> {
                match index {
                    #(#value_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn embedded(&self, index: usize) -> ::core::option::Option<&dyn #record_> {
                match index {
                    #(#embedded_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn embedded_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #record_> {
                match index {
                    #(#embedded_mut_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn set_field(
                &mut self,
                index: usize,
                value: #value_,
            ) -> ::core::result::Result<(), #value_> {
                match index {
                    #(#set_arms)*
                    _ => ::core::result::Result::Err(value),
                }
            }
        }
    }
}
