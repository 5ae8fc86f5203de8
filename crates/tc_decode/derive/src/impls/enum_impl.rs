use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::UnitVariant;

/// `enum T { A, B, .. }`: a string tag naming the variant.
pub(crate) fn unit_enum(krate: &syn::Path, variants: &[UnitVariant]) -> TokenStream {
    let tags: Vec<&str> = variants.iter().map(|variant| variant.tag.as_str()).collect();
    let idents = variants.iter().map(|variant| variant.ident);

    quote! {
        let __reader = #krate::Decoder::single_value_reader(__decoder)?;
        let __tag = #krate::SingleValueReader::read_string(&*__reader)?;
        match __tag.as_str() {
            #(#tags => ::core::result::Result::Ok(Self::#idents),)*
            _ => ::core::result::Result::Err(#krate::DecodeError::unknown_variant(
                #krate::SingleValueReader::coding_path(&*__reader),
                &__tag,
                &[#(#tags),*],
            )),
        }
    }
}
