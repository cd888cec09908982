// Pure comparison predicates behind every assertion

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::collection::MapLike;

/// Native equality
pub fn primitive_equal<T: PartialEq + ?Sized>(expected: &T, actual: &T) -> bool {
    expected == actual
}

/// Same length and pairwise equal at every index
pub fn ordered_equal<T: PartialEq>(expected: &[T], actual: &[T]) -> bool {
    if expected.len() != actual.len() {
        return false;
    }

    expected.iter().zip(actual).all(|(e, a)| e == a)
}

/// Occurrence count of every distinct element
pub fn count_elements<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
    let mut counts = HashMap::with_capacity(items.len());
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Multiset equality: same elements with the same multiplicities, in any order
pub fn similar<T: Eq + Hash>(expected: &[T], actual: &[T]) -> bool {
    if expected.len() != actual.len() {
        return false;
    }

    maps_equal(&count_elements(expected), &count_elements(actual))
}

/// Multiset equality for elements that only offer an equality predicate.
///
/// Each expected element claims the first unclaimed actual element it equals.
/// The greedy pass is exact as long as `eq` is an equivalence relation; for
/// anything weaker a valid pairing may be missed.
pub fn similar_by<T, F>(expected: &[T], actual: &[T], mut eq: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if expected.len() != actual.len() {
        return false;
    }

    let mut matched_actual_indices = HashSet::with_capacity(actual.len());

    for exp_item in expected {
        let found = actual
            .iter()
            .enumerate()
            .find(|(idx, act_item)| !matched_actual_indices.contains(idx) && eq(exp_item, *act_item))
            .map(|(idx, _)| idx);

        match found {
            Some(idx) => {
                matched_actual_indices.insert(idx);
            }
            None => return false,
        }
    }

    matched_actual_indices.len() == expected.len()
}

/// Same cardinality and every actual entry present in expected with an equal value
pub fn maps_equal<K, V, M>(expected: &M, actual: &M) -> bool
where
    V: PartialEq,
    M: MapLike<K, V> + ?Sized,
{
    if expected.entry_count() != actual.entry_count() {
        return false;
    }

    actual
        .entries()
        .all(|(key, value)| expected.lookup(key).is_some_and(|v| v == value))
}

/// Linear membership scan
pub fn contains<T: PartialEq>(items: &[T], element: &T) -> bool {
    items.iter().any(|item| item == element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_primitive_equal() {
        assert!(primitive_equal("expected value", "expected value"));
        assert!(!primitive_equal(&1, &2));
        assert!(!primitive_equal(&f64::NAN, &f64::NAN));
    }

    #[test]
    fn test_ordered_equal() {
        let values = [3, 10, 5, 16];
        let mut reversed = values;
        reversed.reverse();

        assert!(ordered_equal(&values, &values));
        assert!(!ordered_equal(&values, &reversed));
        assert!(!ordered_equal(&[3, 10, 5], &[3, 10, 5, 8]));
        assert!(ordered_equal::<i32>(&[], &[]));
    }

    #[test]
    fn test_similar_reordered() {
        assert!(similar(&[3, 10, 5, 16], &[16, 10, 5, 3]));
    }

    #[test]
    fn test_similar_length_mismatch() {
        assert!(!similar(&[3, 10, 5], &[3, 10, 5, 8]));
    }

    #[test]
    fn test_similar_different_multiset() {
        assert!(!similar(&[3, 7, 5, 5, 16], &[3, 10, 5, 5, 8]));
        assert!(!similar(&[1, 1, 2], &[1, 2, 2]));
    }

    #[test]
    fn test_similar_is_commutative() {
        let cases: [(&[i32], &[i32]); 4] = [
            (&[1, 2, 3], &[3, 2, 1]),
            (&[1, 1, 2], &[1, 2, 2]),
            (&[], &[]),
            (&[4], &[5]),
        ];

        for (a, b) in cases {
            assert_eq!(similar(a, b), similar(b, a));
            assert_eq!(
                similar_by(a, b, |x, y| x == y),
                similar_by(b, a, |x, y| x == y)
            );
        }
    }

    #[test]
    fn test_similar_by_agrees_with_counting() {
        let expected = [3, 7, 5, 5, 16];
        let same = [5, 16, 3, 5, 7];
        let different = [3, 10, 5, 5, 8];

        assert!(similar_by(&expected, &same, |a, b| a == b));
        assert!(!similar_by(&expected, &different, |a, b| a == b));
        assert!(!similar_by(&[1, 1, 2], &[1, 2, 2], |a, b| a == b));
    }

    #[test]
    fn test_similar_by_floats() {
        let expected = [0.1, 0.2, 0.2];
        let actual = [0.2, 0.1, 0.2];
        assert!(similar_by(&expected, &actual, |a: &f64, b: &f64| a == b));
    }

    #[test]
    fn test_maps_equal() {
        let expected = HashMap::from([(10, 10), (5, 5), (16, 16)]);
        let reordered = HashMap::from([(5, 5), (10, 10), (16, 16)]);
        let shorter = HashMap::from([(10, 10), (16, 16)]);
        let other_key = HashMap::from([(7, 5), (10, 10), (16, 16)]);
        let other_value = HashMap::from([(5, 6), (10, 10), (16, 16)]);

        assert!(maps_equal(&expected, &reordered));
        assert!(!maps_equal(&expected, &shorter));
        assert!(!maps_equal(&expected, &other_key));
        assert!(!maps_equal(&expected, &other_value));
    }

    #[test]
    fn test_maps_equal_absent_and_empty() {
        let absent: Option<BTreeMap<i32, i32>> = None;
        let empty = Some(BTreeMap::new());

        assert!(maps_equal(&absent, &empty));
    }

    #[test]
    fn test_contains() {
        assert!(contains(&[10, 3, 5], &3));
        assert!(!contains(&[10, 3, 5], &4));
        assert!(!contains::<i32>(&[], &4));
    }
}
