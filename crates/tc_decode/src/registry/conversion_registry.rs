use alloc::boxed::Box;
use core::any::{Any, type_name};
use core::fmt;

use log::debug;
use tc_utils::TypeIdMap;

use super::Conversion;

struct Entry {
    type_name: &'static str,
    // Always a `Conversion<T>` for the `T` this entry is keyed by.
    conversion: Box<dyn Any>,
}

/// A set of [`Conversion`]s, at most one per type.
///
/// Lookups are exact: a conversion for `T` is never used for `Option<T>`,
/// `Box<T>` or any other related type, and the other way round.
///
/// # Examples
///
/// ```
/// use tc_decode::{Conversion, ConversionRegistry};
///
/// let mut registry = ConversionRegistry::new();
/// registry.insert(Conversion::<i64>::new(|_| Ok(7)));
///
/// assert!(registry.contains::<i64>());
/// assert!(!registry.contains::<Option<i64>>());
/// assert!(registry.get::<i32>().is_none());
/// ```
#[derive(Default)]
pub struct ConversionRegistry {
    entries: TypeIdMap<Entry>,
}

impl ConversionRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: TypeIdMap::new(),
        }
    }

    /// Stores `conversion` for `T`, or clears the entry if it is `None`.
    pub fn set<T: 'static>(&mut self, conversion: Option<Conversion<T>>) {
        match conversion {
            Some(conversion) => {
                self.insert(conversion);
            }
            None => {
                self.remove::<T>();
            }
        }
    }

    /// Stores `conversion` for `T`.
    ///
    /// Returns `true` if a previous conversion was replaced.
    pub fn insert<T: 'static>(&mut self, conversion: Conversion<T>) -> bool {
        let entry = Entry {
            type_name: type_name::<T>(),
            conversion: Box::new(conversion),
        };
        let replaced = self.entries.insert_type::<T>(entry).is_some();
        if replaced {
            debug!("replaced conversion for `{}`", type_name::<T>());
        }
        replaced
    }

    /// Removes the conversion for `T`.
    ///
    /// Returns `true` if one was registered.
    pub fn remove<T: 'static>(&mut self) -> bool {
        let removed = self.entries.remove_type::<T>().is_some();
        if removed {
            debug!("removed conversion for `{}`", type_name::<T>());
        }
        removed
    }

    /// Returns the conversion registered for exactly `T`.
    #[inline]
    pub fn get<T: 'static>(&self) -> Option<&Conversion<T>> {
        self.entries
            .get_type::<T>()?
            .conversion
            .downcast_ref::<Conversion<T>>()
    }

    #[inline]
    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_type::<T>()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Names of the registered types, in arbitrary order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(|entry| entry.type_name)
    }
}

impl fmt::Debug for ConversionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.type_names()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ConversionRegistry;
    use crate::registry::Conversion;
    use crate::{DecodeError, Decoder};
    use alloc::vec::Vec;

    fn constant(value: i64) -> Conversion<i64> {
        Conversion::new(move |_: &dyn Decoder| Ok::<_, DecodeError>(value))
    }

    #[test]
    fn insert_replaces() {
        let mut registry = ConversionRegistry::new();
        assert!(!registry.insert(constant(1)));
        assert!(registry.insert(constant(2)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn set_none_clears() {
        let mut registry = ConversionRegistry::new();
        registry.set(Some(constant(1)));
        registry.set::<i64>(None);
        assert!(registry.is_empty());
        assert!(!registry.remove::<i64>());
    }

    #[test]
    fn option_is_a_separate_key() {
        let mut registry = ConversionRegistry::new();
        registry.insert(constant(1));
        registry.insert(Conversion::<Option<i64>>::new(|_| Ok(None)));
        assert_eq!(registry.len(), 2);

        registry.remove::<Option<i64>>();
        assert!(registry.contains::<i64>());
        assert!(registry.get::<Option<i64>>().is_none());
    }

    #[test]
    fn type_names_are_listed() {
        let mut registry = ConversionRegistry::new();
        registry.insert(constant(1));
        let names: Vec<_> = registry.type_names().collect();
        assert_eq!(names, ["i64"]);
    }
}
