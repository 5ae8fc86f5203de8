use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use crate::derive_data::NamedField;

/// `struct T { a: A, .. }`: one keyed read per field.
pub(crate) fn named(krate: &syn::Path, fields: &[NamedField]) -> TokenStream {
    let inits = fields.iter().map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        let key = &field.key;

        let value = if field.attrs.skip {
            quote! { ::core::default::Default::default() }
        } else if field.attrs.default {
            quote! {
                ::core::option::Option::unwrap_or_default(
                    __keyed.decode_if_present::<#ty>(#key)?,
                )
            }
        } else {
            quote! { __keyed.decode::<#ty>(#key)? }
        };

        quote! { #ident: #value }
    });

    // A struct whose fields are all skipped still requires an object.
    quote! {
        let __keyed = #krate::Decoder::keyed_reader(__decoder)?;
        let _ = &__keyed;
        ::core::result::Result::Ok(Self {
            #(#inits,)*
        })
    }
}

/// `struct T(U);`: the inner value at the same position.
pub(crate) fn newtype(krate: &syn::Path, ty: &Type) -> TokenStream {
    quote! {
        ::core::result::Result::Ok(Self(
            <#ty as #krate::Decode>::intercept(__decoder)?,
        ))
    }
}

/// `struct T(A, B, ..);`: one element per field.
pub(crate) fn tuple(krate: &syn::Path, types: &[&Type]) -> TokenStream {
    if types.is_empty() {
        return quote! {
            #krate::Decoder::seq_reader(__decoder)?;
            ::core::result::Result::Ok(Self())
        };
    }
    quote! {
        let mut __seq = #krate::Decoder::seq_reader(__decoder)?;
        ::core::result::Result::Ok(Self(
            #(__seq.decode::<#types>()?,)*
        ))
    }
}

/// `struct T;`
pub(crate) fn unit() -> TokenStream {
    quote! {
        let _ = __decoder;
        ::core::result::Result::Ok(Self)
    }
}
