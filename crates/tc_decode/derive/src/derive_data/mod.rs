//! The parsed form of a `#[derive(Decode)]` input.

mod attributes;

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type};

use crate::utils::RenameRule;

pub(crate) use attributes::{ContainerAttributes, FieldAttributes, VariantAttributes};

// -----------------------------------------------------------------------------
// DecodeInput

pub(crate) struct DecodeInput<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub krate: syn::Path,
    pub shape: Shape<'a>,
}

pub(crate) enum Shape<'a> {
    Named(Vec<NamedField<'a>>),
    Newtype(&'a Type),
    Tuple(Vec<&'a Type>),
    Unit,
    UnitEnum(Vec<UnitVariant<'a>>),
}

pub(crate) struct NamedField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The key read from the object.
    pub key: String,
    pub attrs: FieldAttributes,
}

pub(crate) struct UnitVariant<'a> {
    pub ident: &'a Ident,
    /// The tag matched against the input string.
    pub tag: String,
}

impl<'a> DecodeInput<'a> {
    pub(crate) fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(lifetime) = ast.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Decode` cannot be derived for types with lifetime parameters",
            ));
        }

        let container = ContainerAttributes::parse_attrs(&ast.attrs)?;
        let rename_all = container.rename_all;

        let shape = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => Shape::Named(
                    fields
                        .named
                        .iter()
                        .map(|field| NamedField::parse(field, rename_all))
                        .collect::<syn::Result<_>>()?,
                ),
                Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                    Shape::Newtype(&fields.unnamed[0].ty)
                }
                Fields::Unnamed(fields) => {
                    Shape::Tuple(fields.unnamed.iter().map(|field| &field.ty).collect())
                }
                Fields::Unit => Shape::Unit,
            },
            Data::Enum(data) => Shape::UnitEnum(
                data.variants
                    .iter()
                    .map(|variant| UnitVariant::parse(variant, rename_all))
                    .collect::<syn::Result<_>>()?,
            ),
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Decode` cannot be derived for unions",
                ));
            }
        };

        let krate = container
            .krate
            .unwrap_or_else(|| tc_macro_utils::Manifest::shared(|m| m.get_crate_path("tc_decode")));

        Ok(Self {
            ident: &ast.ident,
            generics: &ast.generics,
            krate,
            shape,
        })
    }
}

impl<'a> NamedField<'a> {
    fn parse(field: &'a syn::Field, rename_all: Option<RenameRule>) -> syn::Result<Self> {
        let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;

        let name = ident.unraw().to_string();
        let key = match (&attrs.rename, rename_all) {
            (Some(rename), _) => rename.clone(),
            (None, Some(rule)) => rule.apply(&name),
            (None, None) => name,
        };

        Ok(Self {
            ident,
            ty: &field.ty,
            key,
            attrs,
        })
    }
}

impl<'a> UnitVariant<'a> {
    fn parse(variant: &'a syn::Variant, rename_all: Option<RenameRule>) -> syn::Result<Self> {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.fields.span(),
                "`Decode` can only be derived for enums whose variants are all units",
            ));
        }
        let attrs = VariantAttributes::parse_attrs(&variant.attrs)?;
        let name = variant.ident.unraw().to_string();
        let tag = match (attrs.rename, rename_all) {
            (Some(rename), _) => rename,
            (None, Some(rule)) => rule.apply(&name),
            (None, None) => name,
        };

        Ok(Self {
            ident: &variant.ident,
            tag,
        })
    }
}
