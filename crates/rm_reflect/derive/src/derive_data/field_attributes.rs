use proc_macro2::Span;
use syn::{Attribute, LitStr, spanned::Spanned};

use crate::RECORD_ATTRIBUTE_NAME;

/// Parsed `#[record(...)]` attributes of a field.
///
/// Examples:
/// - `#[record(alias = "mail")]`
/// - `#[record(flatten)]`
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// Key written by `to_map` instead of the field name.
    pub alias: Option<LitStr>,
    /// Span of the `flatten` flag, if present.
    pub flatten: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("alias") {
                    if out.alias.is_some() {
                        return Err(meta.error("duplicate `alias`"));
                    }
                    out.alias = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("flatten") {
                    if out.flatten.is_some() {
                        return Err(meta.error("duplicate `flatten`"));
                    }
                    out.flatten = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error("unsupported attribute, expected `alias = \"...\"` or `flatten`"))
                }
            })?;
        }

        if let (Some(alias), Some(_)) = (&out.alias, out.flatten) {
            return Err(syn::Error::new(
                alias.span(),
                "a `flatten` field writes no key of its own, `alias` is not allowed",
            ));
        }

        Ok(out)
    }
}
