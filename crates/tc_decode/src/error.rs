use alloc::string::{String, ToString};
use alloc::vec::Vec;
use thiserror::Error;

use crate::path::CodingPath;

/// An error raised while decoding.
///
/// Every variant except [`Malformed`](DecodeError::Malformed) and
/// [`Custom`](DecodeError::Custom) carries the [`CodingPath`] of the
/// position that failed.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The raw input could not be parsed at all.
    #[error("malformed input: {0}")]
    Malformed(String),
    /// The value has a different shape than the one requested.
    #[error("type mismatch at `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: CodingPath,
        expected: &'static str,
        found: &'static str,
    },
    /// A null was found where a value is required, or a sequence ran out.
    #[error("value not found at `{path}`: expected {expected}")]
    ValueNotFound {
        path: CodingPath,
        expected: &'static str,
    },
    /// A required key is absent.
    #[error("key `{key}` not found at `{path}`")]
    KeyNotFound { path: CodingPath, key: String },
    /// The value is present but unusable.
    #[error("data corrupted at `{path}`: {message}")]
    DataCorrupted { path: CodingPath, message: String },
    #[error("{0}")]
    Custom(String),
}

impl DecodeError {
    /// Creates a free-form error.
    pub fn custom(message: impl ToString) -> Self {
        DecodeError::Custom(message.to_string())
    }

    pub fn data_corrupted(path: &CodingPath, message: impl ToString) -> Self {
        DecodeError::DataCorrupted {
            path: path.clone(),
            message: message.to_string(),
        }
    }

    pub fn type_mismatch(path: &CodingPath, expected: &'static str, found: &'static str) -> Self {
        DecodeError::TypeMismatch {
            path: path.clone(),
            expected,
            found,
        }
    }

    pub fn value_not_found(path: &CodingPath, expected: &'static str) -> Self {
        DecodeError::ValueNotFound {
            path: path.clone(),
            expected,
        }
    }

    pub fn key_not_found(path: &CodingPath, key: &str) -> Self {
        DecodeError::KeyNotFound {
            path: path.clone(),
            key: key.to_string(),
        }
    }

    /// A string tag that matches none of the `expected` variant names.
    pub fn unknown_variant(path: &CodingPath, found: &str, expected: &'static [&'static str]) -> Self {
        let expected = expected
            .iter()
            .map(|name| alloc::format!("`{name}`"))
            .collect::<Vec<_>>()
            .join(", ");
        DecodeError::DataCorrupted {
            path: path.clone(),
            message: alloc::format!("unknown variant `{found}`, expected one of {expected}"),
        }
    }

    /// The coding path of the failing position, if the error has one.
    pub fn path(&self) -> Option<&CodingPath> {
        match self {
            DecodeError::TypeMismatch { path, .. }
            | DecodeError::ValueNotFound { path, .. }
            | DecodeError::KeyNotFound { path, .. }
            | DecodeError::DataCorrupted { path, .. } => Some(path),
            DecodeError::Malformed(_) | DecodeError::Custom(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::DecodeError;
    use crate::CodingPath;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_path() {
        let path = CodingPath::root().field("items").index(1);
        let err = DecodeError::type_mismatch(&path, "string", "number");
        assert_eq!(
            err.to_string(),
            "type mismatch at `items[1]`: expected string, found number"
        );
        assert_eq!(err.path(), Some(&path));
    }

    #[test]
    fn unknown_variant_lists_choices() {
        let err = DecodeError::unknown_variant(&CodingPath::root(), "c", &["a", "b"]);
        assert_eq!(
            err.to_string(),
            "data corrupted at `<root>`: unknown variant `c`, expected one of `a`, `b`"
        );
    }
}
