// Container views shared by the slice and map assertions

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Anything that can be viewed as a contiguous run of `T`.
///
/// `None` from `elements` is the absent state (an `Option::None` container),
/// which is distinct from a present but empty one.
pub trait SliceLike<T> {
    fn elements(&self) -> Option<&[T]>;
}

impl<T> SliceLike<T> for [T] {
    fn elements(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T> SliceLike<T> for Vec<T> {
    fn elements(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T, const N: usize> SliceLike<T> for [T; N] {
    fn elements(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T, S: SliceLike<T> + ?Sized> SliceLike<T> for &S {
    fn elements(&self) -> Option<&[T]> {
        (**self).elements()
    }
}

impl<T, S: SliceLike<T>> SliceLike<T> for Option<S> {
    fn elements(&self) -> Option<&[T]> {
        self.as_ref().and_then(|s| s.elements())
    }
}

/// Key-value container with native key lookup
pub trait MapLike<K, V> {
    /// True for an `Option::None` map
    fn is_absent(&self) -> bool {
        false
    }

    fn entry_count(&self) -> usize;

    fn lookup(&self, key: &K) -> Option<&V>;

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_>;
}

impl<K: Eq + Hash, V, S: BuildHasher> MapLike<K, V> for HashMap<K, V, S> {
    fn entry_count(&self) -> usize {
        self.len()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K: Ord, V> MapLike<K, V> for BTreeMap<K, V> {
    fn entry_count(&self) -> usize {
        self.len()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K, V, M: MapLike<K, V>> MapLike<K, V> for Option<M> {
    fn is_absent(&self) -> bool {
        self.as_ref().is_none_or(|m| m.is_absent())
    }

    fn entry_count(&self) -> usize {
        self.as_ref().map_or(0, |m| m.entry_count())
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.as_ref().and_then(|m| m.lookup(key))
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        match self {
            Some(m) => m.entries(),
            None => Box::new(std::iter::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_slice_is_not_empty_slice() {
        let absent: Option<Vec<i32>> = None;
        let empty: Option<Vec<i32>> = Some(vec![]);

        assert!(absent.elements().is_none());
        assert_eq!(empty.elements(), Some(&[][..]));
    }

    #[test]
    fn test_array_and_reference_views() {
        let array = [1, 2, 3];
        let slice: &[i32] = &array;

        assert_eq!(array.elements(), Some(&[1, 2, 3][..]));
        assert_eq!(slice.elements(), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn test_optional_map_view() {
        let absent: Option<HashMap<i32, i32>> = None;
        let present = Some(BTreeMap::from([(1, "one")]));

        assert!(absent.is_absent());
        assert_eq!(absent.entry_count(), 0);
        assert_eq!(absent.entries().count(), 0);

        assert!(!present.is_absent());
        assert_eq!(present.lookup(&1), Some(&"one"));
        assert_eq!(present.lookup(&2), None);
    }
}
