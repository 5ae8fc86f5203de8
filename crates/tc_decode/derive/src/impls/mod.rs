//! Code generation for `impl Decode`.

mod enum_impl;
mod struct_impl;

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse_quote;

use crate::derive_data::{DecodeInput, Shape};

pub(crate) fn impl_decode(input: &DecodeInput) -> TokenStream {
    let krate = &input.krate;
    let ident = input.ident;

    let mut generics = input.generics.clone();
    let type_params: Vec<_> = generics.type_params().map(|param| param.ident.clone()).collect();
    if !type_params.is_empty() {
        let where_clause = generics.make_where_clause();
        for param in type_params {
            where_clause
                .predicates
                .push(parse_quote!(#param: #krate::Decode));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body = match &input.shape {
        Shape::Named(fields) => struct_impl::named(krate, fields),
        Shape::Newtype(ty) => struct_impl::newtype(krate, ty),
        Shape::Tuple(types) => struct_impl::tuple(krate, types),
        Shape::Unit => struct_impl::unit(),
        Shape::UnitEnum(variants) => enum_impl::unit_enum(krate, variants),
    };

    quote! {
        impl #impl_generics #krate::Decode for #ident #ty_generics #where_clause {
            fn decode(
                __decoder: &dyn #krate::Decoder,
            ) -> ::core::result::Result<Self, #krate::DecodeError> {
                #body
            }
        }
    }
}
