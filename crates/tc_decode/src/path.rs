use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

// -----------------------------------------------------------------------------
// CodingKey

/// One step in a [`CodingPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodingKey {
    /// An object field.
    Field(Box<str>),
    /// A sequence element.
    Index(usize),
    /// The `super` position of a keyed reader.
    Super,
}

impl CodingKey {
    /// Returns the field name, if this key names one.
    pub fn as_field(&self) -> Option<&str> {
        match self {
            CodingKey::Field(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the element index, if this key is one.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            CodingKey::Index(index) => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for CodingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodingKey::Field(name) => f.write_str(name),
            CodingKey::Index(index) => write!(f, "[{index}]"),
            CodingKey::Super => f.write_str("super"),
        }
    }
}

// -----------------------------------------------------------------------------
// CodingPath

/// The keys leading from the root value to the current decode position.
///
/// Displayed as `nested.items[2]`; the root renders as `<root>`.
///
/// # Examples
///
/// ```
/// use tc_decode::CodingPath;
///
/// let path = CodingPath::root().field("nested").field("items").index(2);
/// assert_eq!(path.to_string(), "nested.items[2]");
/// assert_eq!(CodingPath::root().to_string(), "<root>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodingPath(Vec<CodingKey>);

impl CodingPath {
    /// The empty path.
    #[inline]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns a copy of this path extended by `key`.
    pub fn child(&self, key: CodingKey) -> Self {
        let mut keys = Vec::with_capacity(self.0.len() + 1);
        keys.extend_from_slice(&self.0);
        keys.push(key);
        Self(keys)
    }

    #[inline]
    pub fn field(&self, name: &str) -> Self {
        self.child(CodingKey::Field(name.into()))
    }

    #[inline]
    pub fn index(&self, index: usize) -> Self {
        self.child(CodingKey::Index(index))
    }

    #[inline]
    pub fn super_key(&self) -> Self {
        self.child(CodingKey::Super)
    }

    #[inline]
    pub fn keys(&self) -> &[CodingKey] {
        &self.0
    }

    #[inline]
    pub fn last(&self) -> Option<&CodingKey> {
        self.0.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (position, key) in self.0.iter().enumerate() {
            if position > 0 && !matches!(key, CodingKey::Index(_)) {
                f.write_str(".")?;
            }
            fmt::Display::fmt(key, f)?;
        }
        Ok(())
    }
}

impl FromIterator<CodingKey> for CodingPath {
    fn from_iter<I: IntoIterator<Item = CodingKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{CodingKey, CodingPath};
    use alloc::string::ToString;

    #[test]
    fn leading_index_has_no_separator() {
        let path = CodingPath::root().index(0).field("name");
        assert_eq!(path.to_string(), "[0].name");
    }

    #[test]
    fn child_leaves_parent_untouched() {
        let parent = CodingPath::root().field("a");
        let child = parent.super_key();
        assert_eq!(parent.len(), 1);
        assert_eq!(child.last(), Some(&CodingKey::Super));
        assert_eq!(child.to_string(), "a.super");
    }
}
