//! Type-keyed decoding interception.
//!
//! This crate wraps a structural decoder (JSON by default) and lets callers
//! substitute their own conversion for any type, wherever a value of that
//! type is decoded: at the top level, in object fields, in array elements,
//! and inside other conversions.
//!
//! # Overview
//!
//! - [`Decode`]: types that can decode themselves from a [`Decoder`].
//!   Derive it with [`#[derive(Decode)]`](derive@Decode).
//! - [`Decoder`], [`KeyedReader`], [`SeqReader`], [`SingleValueReader`]: the
//!   structural reader contract every wrapped decoder implements.
//! - [`ConversionRegistry`]: conversions keyed by the exact requested type.
//!   `T` and `Option<T>` are separate keys.
//! - [`proxy`]: readers that wrap another decoder's readers and consult the
//!   registry on every typed request.
//! - [`ConversionDecoder`]: the session facade. Owns a [`WrappableDecoder`]
//!   and a registry, and routes every decode through the proxies.
//! - [`json`]: the `serde_json` backed [`WrappableDecoder`].
//!
//! # Example
//!
//! ```
//! use tc_decode::{ConversionDecoder, Decode, DecodeError};
//! use tc_decode::json::JsonDecoder;
//!
//! #[derive(Decode, Debug, PartialEq)]
//! struct Item {
//!     number: i64,
//! }
//!
//! let mut decoder = ConversionDecoder::new(JsonDecoder::new());
//! decoder.register::<i64, _>(|decoder| {
//!     let text = decoder.decode::<String>()?;
//!     text.parse()
//!         .map_err(|_| DecodeError::data_corrupted(decoder.coding_path(), "not an integer"))
//! });
//!
//! let item: Item = decoder.decode_str(r#"{ "number": "10" }"#).unwrap();
//! assert_eq!(item, Item { number: 10 });
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// Generated code names `::tc_decode`, which must also resolve inside this crate.
extern crate self as tc_decode;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod decode;
mod decoder;
mod error;
mod path;
mod registry;
mod session;

pub mod proxy;

#[cfg(feature = "json")]
pub mod json;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use decode::Decode;
pub use decoder::{Decoder, KeyedReader, SeqReader, SingleValueReader, UserInfo};
pub use error::DecodeError;
pub use path::{CodingKey, CodingPath};
pub use registry::{Conversion, ConversionRegistry};
pub use session::{ConversionDecoder, DecodeSeed, Interceptor, WrappableDecoder};

pub use tc_decode_derive::Decode;
