//! The JSON backend, built on [`serde_json`].
//!
//! [`JsonDecoder`] parses bytes into a [`serde_json::Value`] tree and walks it
//! with [`JsonValueDecoder`].
//!
//! Numbers follow these rules:
//! - integers must be exact; floats with a zero fraction are accepted,
//! - a number outside the requested range is [`DataCorrupted`],
//! - `null` read as a scalar is [`ValueNotFound`],
//! - any other kind mismatch is [`TypeMismatch`].
//!
//! [`DataCorrupted`]: crate::DecodeError::DataCorrupted
//! [`ValueNotFound`]: crate::DecodeError::ValueNotFound
//! [`TypeMismatch`]: crate::DecodeError::TypeMismatch

mod decoder;
mod readers;
mod value;

pub use decoder::JsonDecoder;
pub use readers::{JsonKeyedReader, JsonSeqReader, JsonSingleValueReader};
pub use value::JsonValueDecoder;

use serde_json::Value;

/// The name of `value`'s JSON kind, as used in error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
