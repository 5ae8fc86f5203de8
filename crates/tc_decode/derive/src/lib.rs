//! Derive macro for `tc_decode::Decode`.
//!
//! See [`Decode`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static DECODE_ATTRIBUTE_NAME: &str = "decode";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Decode Derivation
///
/// `#[derive(Decode)]` implements `Decode` for:
///
/// - structs with named fields, read from an object,
/// - newtype structs (`struct T(U);`), read as the inner value at the same position,
/// - tuple structs, read from an array with one element per field,
/// - unit structs, which accept any value,
/// - enums whose variants are all units, read from a string tag.
///
/// Every field is requested through the reader's `decode`, so conversions
/// registered for a field's type apply to it. `Option<_>` fields treat an
/// absent key like `null`.
///
/// ## Container attributes
///
/// ```rust, ignore
/// #[derive(Decode)]
/// #[decode(rename_all = "camelCase")]
/// struct Foo { user_id: u64 }
/// ```
///
/// - `rename_all = "..."`: one of `camelCase`, `snake_case`, `kebab-case`,
///   `lowercase`, `UPPERCASE`, `PascalCase` or `SCREAMING_SNAKE_CASE`. Applies
///   to field names of structs and variant names of enums.
/// - `crate = "path"`: the path of the `tc_decode` crate. By default this is
///   read from the caller's `Cargo.toml`.
///
/// ## Field attributes
///
/// - `rename = "..."`: the key to read.
/// - `default`: a missing key or `null` yields `Default::default()`.
/// - `skip`: never read; always `Default::default()`.
///
/// ## Variant attributes
///
/// - `rename = "..."`: the tag to match.
///
/// ## Unsupported
///
/// Types with lifetime parameters, enums with data-carrying variants and
/// unions are rejected.
#[proc_macro_derive(Decode, attributes(decode))]
pub fn derive_decode(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::DecodeInput::from_ast(&ast) {
        Ok(input) => impls::impl_decode(&input).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
