//! Parsing of `#[decode(...)]` attributes.

use syn::{Attribute, LitStr};

use crate::DECODE_ATTRIBUTE_NAME;
use crate::utils::RenameRule;

fn decode_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(DECODE_ATTRIBUTE_NAME))
}

// -----------------------------------------------------------------------------
// Container

/// `#[decode(crate = "...", rename_all = "...")]` on the type.
#[derive(Default)]
pub(crate) struct ContainerAttributes {
    pub krate: Option<syn::Path>,
    pub rename_all: Option<RenameRule>,
}

impl ContainerAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in decode_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("crate") {
                    let lit: LitStr = meta.value()?.parse()?;
                    this.krate = Some(lit.parse()?);
                    Ok(())
                } else if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    let rule = RenameRule::from_name(&lit.value()).ok_or_else(|| {
                        syn::Error::new(
                            lit.span(),
                            format!(
                                "unknown `rename_all` rule, expected one of: {}",
                                RenameRule::NAMES.join(", ")
                            ),
                        )
                    })?;
                    this.rename_all = Some(rule);
                    Ok(())
                } else {
                    Err(meta.error("unknown container attribute, expected `crate` or `rename_all`"))
                }
            })?;
        }
        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// Field

/// `#[decode(rename = "...", default, skip)]` on a named field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub rename: Option<String>,
    pub default: bool,
    pub skip: bool,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in decode_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    this.rename = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("default") {
                    this.default = true;
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    this.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown field attribute, expected `rename`, `default` or `skip`"))
                }
            })?;
        }
        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// Variant

/// `#[decode(rename = "...")]` on an enum variant.
#[derive(Default)]
pub(crate) struct VariantAttributes {
    pub rename: Option<String>,
}

impl VariantAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in decode_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    this.rename = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("unknown variant attribute, expected `rename`"))
                }
            })?;
        }
        Ok(this)
    }
}
