use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use tc_utils::TypeIdMap;

/// A bag of caller values, keyed by type.
///
/// Attached to a wrapped decoder and visible to every decoder, reader and
/// conversion created while it runs.
///
/// # Examples
///
/// ```
/// use tc_decode::UserInfo;
///
/// struct Locale(&'static str);
///
/// let mut info = UserInfo::new();
/// info.insert(Locale("de"));
/// assert_eq!(info.get::<Locale>().map(|l| l.0), Some("de"));
/// ```
#[derive(Default)]
pub struct UserInfo {
    values: TypeIdMap<Box<dyn Any>>,
}

impl UserInfo {
    #[inline]
    pub const fn new() -> Self {
        Self {
            values: TypeIdMap::new(),
        }
    }

    /// Stores `value`, returning the previous value of the same type.
    pub fn insert<T: 'static>(&mut self, value: T) -> Option<T> {
        let old = self.values.insert_type::<T>(Box::new(value))?;
        old.downcast::<T>().ok().map(|boxed| *boxed)
    }

    #[inline]
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.values.get_type::<T>()?.downcast_ref()
    }

    #[inline]
    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.values.get_mut_type::<T>()?.downcast_mut()
    }

    pub fn remove<T: 'static>(&mut self) -> Option<T> {
        let old = self.values.remove_type::<T>()?;
        old.downcast::<T>().ok().map(|boxed| *boxed)
    }

    #[inline]
    pub fn contains<T: 'static>(&self) -> bool {
        self.values.contains_type::<T>()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl fmt::Debug for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInfo")
            .field("len", &self.values.len())
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::UserInfo;

    #[test]
    fn insert_returns_previous() {
        let mut info = UserInfo::new();
        assert_eq!(info.insert(1_u8), None);
        assert_eq!(info.insert(2_u8), Some(1));
        assert_eq!(info.get::<u8>(), Some(&2));
        assert!(info.get::<u16>().is_none());
    }

    #[test]
    fn remove_empties() {
        let mut info = UserInfo::new();
        info.insert("tag");
        *info.get_mut::<&'static str>().unwrap() = "other";
        assert_eq!(info.remove::<&'static str>(), Some("other"));
        assert!(info.is_empty());
    }
}
