use quote::ToTokens;
use syn::{
    Data, DeriveInput, Fields, GenericArgument, Generics, Ident, Path, PathArguments, Type,
    TypePath, spanned::Spanned,
};

use super::FieldAttributes;
use crate::RECORD_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// EmbedShape

/// How a flattened field holds its embedded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EmbedShape {
    /// `T`
    Plain,
    /// `Box<T>`
    Boxed,
    /// `Option<T>`
    Optional,
    /// `Option<Box<T>>`
    OptionalBoxed,
}

/// Returns `T` if `ty` is `wrapper<T>`, matching the last path segment only.
fn unwrap_generic<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let last = path.segments.last()?;
    if last.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    match (args.args.len(), args.args.first()?) {
        (1, GenericArgument::Type(inner)) => Some(inner),
        _ => None,
    }
}

impl EmbedShape {
    /// Splits a declared type into its shape and the embedded record type.
    pub fn of(ty: &Type) -> (Self, &Type) {
        if let Some(inner) = unwrap_generic(ty, "Option") {
            match unwrap_generic(inner, "Box") {
                Some(record) => (Self::OptionalBoxed, record),
                None => (Self::Optional, inner),
            }
        } else {
            match unwrap_generic(ty, "Box") {
                Some(record) => (Self::Boxed, record),
                None => (Self::Plain, ty),
            }
        }
    }
}

// -----------------------------------------------------------------------------
// RecordField

#[derive(Debug)]
pub(crate) struct RecordField<'a> {
    /// Position in declaration order, the index used by `Record`.
    pub index: usize,
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
    /// `true` only for plain `pub`.
    pub exported: bool,
    /// Shape and record type, for flattened fields.
    pub embed: Option<(EmbedShape, &'a Type)>,
}

impl RecordField<'_> {
    /// Exported and not flattened: read and written through `FieldValue`.
    #[inline]
    pub fn is_value(&self) -> bool {
        self.exported && self.embed.is_none()
    }
}

// -----------------------------------------------------------------------------
// RecordStruct

/// A struct with named fields accepted by `#[derive(Record)]`.
pub(crate) struct RecordStruct<'a> {
    rm_reflect_path: Path,
    ident: &'a Ident,
    generics: &'a Generics,
    fields: Vec<RecordField<'a>>,
}

fn is_self_type(ty: &Type, ident: &Ident) -> bool {
    match ty {
        Type::Path(TypePath { qself: None, path }) => {
            path.is_ident("Self") || path.is_ident(ident)
        }
        _ => false,
    }
}

impl<'a> RecordStruct<'a> {
    pub fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(attr) = ast
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident(RECORD_ATTRIBUTE_NAME))
        {
            return Err(syn::Error::new(
                attr.span(),
                "`#[record(...)]` is only supported on fields",
            ));
        }

        if let Some(lifetime) = ast.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "records cannot have lifetime parameters",
            ));
        }

        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) => {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "`Record` cannot be derived for tuple structs",
                    ));
                }
                Fields::Unit => {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "`Record` cannot be derived for unit structs",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Record` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Record` cannot be derived for unions",
                ));
            }
        };

        let fields = named
            .named
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let attrs = FieldAttributes::parse_attrs(&field.attrs)?;

                // `Fields::Named` always have an ident.
                let ident = field
                    .ident
                    .as_ref()
                    .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;

                let embed = match attrs.flatten {
                    Some(_) => {
                        let (shape, record) = EmbedShape::of(&field.ty);
                        if is_self_type(record, &ast.ident) {
                            return Err(syn::Error::new(
                                field.ty.span(),
                                "a record cannot flatten itself",
                            ));
                        }
                        Some((shape, record))
                    }
                    None => None,
                };

                Ok(RecordField {
                    index,
                    ident,
                    ty: &field.ty,
                    attrs,
                    exported: matches!(field.vis, syn::Visibility::Public(_)),
                    embed,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            rm_reflect_path: crate::path::rm_reflect(),
            ident: &ast.ident,
            generics: &ast.generics,
            fields,
        })
    }

    #[inline]
    pub fn rm_reflect_path(&self) -> &Path {
        &self.rm_reflect_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn generics(&self) -> &Generics {
        self.generics
    }

    #[inline]
    pub fn fields(&self) -> &[RecordField<'a>] {
        &self.fields
    }

    /// Whether the generated `Typed` must use a per-type cell.
    #[inline]
    pub fn is_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
            || self.generics.const_params().next().is_some()
    }

    /// Extra where-clause predicates for generic records.
    ///
    /// - every type param: `'static`.
    /// - exported field type mentioning a type param: `FieldValue`.
    /// - flattened record type mentioning a type param: `Record + Typed`.
    pub fn where_predicates(&self) -> Vec<proc_macro2::TokenStream> {
        let params: Vec<&Ident> = self.generics.type_params().map(|p| &p.ident).collect();
        if params.is_empty() {
            return Vec::new();
        }

        let path = &self.rm_reflect_path;
        let field_value_ = crate::path::field_value_(path);
        let record_ = crate::path::record_(path);
        let typed_ = crate::path::typed_(path);

        let mut predicates: Vec<_> = params
            .iter()
            .map(|ident| quote::quote!(#ident: 'static))
            .collect();

        for field in &self.fields {
            match field.embed {
                Some((_, record)) if mentions_any(&params, record) => {
                    predicates.push(quote::quote!(#record: #record_ + #typed_));
                }
                None if field.exported && mentions_any(&params, field.ty) => {
                    let ty = field.ty;
                    predicates.push(quote::quote!(#ty: #field_value_));
                }
                _ => {}
            }
        }

        predicates
    }
}

/// Do any of the identifiers in `idents` appear in `ty`?
fn mentions_any(idents: &[&Ident], ty: &Type) -> bool {
    fn walk(idents: &[&Ident], tokens: proc_macro2::TokenStream) -> bool {
        tokens.into_iter().any(|tree| match tree {
            proc_macro2::TokenTree::Ident(ident) => idents.iter().any(|i| **i == ident),
            proc_macro2::TokenTree::Group(group) => walk(idents, group.stream()),
            _ => false,
        })
    }
    walk(idents, ty.to_token_stream())
}
