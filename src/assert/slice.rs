// Sequence assertions

use std::fmt::Debug;
use std::hash::Hash;

use super::collection::SliceLike;
use super::comparator::{contains, ordered_equal, similar, similar_by};
use super::message;
use super::shape::{Inspect, structural_equal};
use super::{Reporter, fail};

/// Asserts that both slices hold equal elements in the same order
#[track_caller]
pub fn equal_slice<R, T>(t: &R, expected: &[T], actual: &[T])
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    if !ordered_equal(expected, actual) {
        fail(t, message::inequality(expected, actual));
    }
}

/// Asserts that the slices differ in length or in at least one position
#[track_caller]
pub fn not_equal_slice<R, T>(t: &R, expected: &[T], actual: &[T])
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    if ordered_equal(expected, actual) {
        fail(t, message::equality(expected));
    }
}

/// Asserts that both slices hold the same elements with the same
/// multiplicities, in any order
#[track_caller]
pub fn similar_slice<R, T>(t: &R, expected: &[T], actual: &[T])
where
    R: Reporter + ?Sized,
    T: Eq + Hash + Debug,
{
    if !similar(expected, actual) {
        fail(t, message::inequality(expected, actual));
    }
}

/// Asserts that the slices are not permutations of each other
#[track_caller]
pub fn not_similar_slice<R, T>(t: &R, expected: &[T], actual: &[T])
where
    R: Reporter + ?Sized,
    T: Eq + Hash + Debug,
{
    if similar(expected, actual) {
        fail(t, message::equality(expected));
    }
}

/// Like [`similar_slice`], comparing elements structurally.
///
/// Elements are paired greedily, which is exact because structural equality
/// is an equivalence relation.
#[track_caller]
pub fn deep_similar_slice<R, T>(t: &R, expected: &[T], actual: &[T])
where
    R: Reporter + ?Sized,
    T: Inspect + Debug,
{
    if !deep_similar(expected, actual) {
        fail(t, message::inequality(expected, actual));
    }
}

#[track_caller]
pub fn not_deep_similar_slice<R, T>(t: &R, expected: &[T], actual: &[T])
where
    R: Reporter + ?Sized,
    T: Inspect + Debug,
{
    if deep_similar(expected, actual) {
        fail(t, message::equality(expected));
    }
}

fn deep_similar<T: Inspect>(expected: &[T], actual: &[T]) -> bool {
    let expected: Vec<_> = expected.iter().map(Inspect::shape).collect();
    let actual: Vec<_> = actual.iter().map(Inspect::shape).collect();
    similar_by(&expected, &actual, structural_equal)
}

/// Asserts that the slice is present and has no elements
#[track_caller]
pub fn empty_slice<R, T, S>(t: &R, s: &S)
where
    R: Reporter + ?Sized,
    S: SliceLike<T> + ?Sized,
{
    match s.elements() {
        None => fail(t, "Expected empty slice but got nil".to_string()),
        Some(items) if !items.is_empty() => fail(
            t,
            format!(
                "Expected empty slice but got slice with length {}",
                items.len()
            ),
        ),
        Some(_) => {}
    }
}

/// Asserts that the slice is present and has at least one element
#[track_caller]
pub fn not_empty_slice<R, T, S>(t: &R, s: &S)
where
    R: Reporter + ?Sized,
    S: SliceLike<T> + ?Sized,
{
    match s.elements() {
        None => fail(t, "Expected non-empty slice but got nil".to_string()),
        Some([]) => fail(t, "Expected non-empty slice but got empty slice".to_string()),
        Some(_) => {}
    }
}

/// Asserts the slice length; an absent slice has length zero
#[track_caller]
pub fn slice_length<R, T, S>(t: &R, s: &S, expected_length: usize)
where
    R: Reporter + ?Sized,
    S: SliceLike<T> + ?Sized,
{
    let length = s.elements().map_or(0, <[T]>::len);
    if length != expected_length {
        fail(
            t,
            format!(
                "Expected slice to have length of {} but got {}",
                expected_length, length
            ),
        );
    }
}

/// Asserts that the slice contains the element
#[track_caller]
pub fn slice_contains<R, T, S>(t: &R, s: &S, element: T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
    S: SliceLike<T> + ?Sized,
{
    let items = s.elements().unwrap_or_default();
    if !contains(items, &element) {
        fail(
            t,
            format!(
                "Element {:?} could not be found in the slice {:?}",
                element, items
            ),
        );
    }
}

/// Asserts that the slice does not contain the element
#[track_caller]
pub fn slice_not_contains<R, T, S>(t: &R, s: &S, element: T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
    S: SliceLike<T> + ?Sized,
{
    let items = s.elements().unwrap_or_default();
    if contains(items, &element) {
        fail(
            t,
            format!(
                "Element {:?} was not expected to be found in the slice {:?}",
                element, items
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::Recorder;

    #[test]
    fn test_empty_slice_distinguishes_nil_from_non_empty() {
        let t = Recorder::new();
        let absent: Option<Vec<i32>> = None;

        empty_slice(&t, &absent);
        empty_slice(&t, &vec![10, 3, 5]);

        assert_eq!(
            t.messages(),
            vec![
                "Expected empty slice but got nil",
                "Expected empty slice but got slice with length 3"
            ]
        );
    }

    #[test]
    fn test_slice_contains_message() {
        let t = Recorder::new();
        slice_contains(&t, &[10, 3, 5], 4);
        assert_eq!(
            t.messages(),
            vec!["Element 4 could not be found in the slice [10, 3, 5]"]
        );
    }

    #[test]
    fn test_slice_contains_on_absent_slice() {
        let t = Recorder::new();
        let absent: Option<Vec<i32>> = None;

        slice_contains(&t, &absent, 1);
        slice_not_contains(&t, &absent, 1);

        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_deep_similar_slice_with_boxes() {
        let t = Recorder::new();
        let expected = vec![Box::new(vec![1]), Box::new(vec![2, 2]), Box::new(vec![1])];
        let actual = vec![Box::new(vec![2, 2]), Box::new(vec![1]), Box::new(vec![1])];

        deep_similar_slice(&t, &expected, &actual);
        not_deep_similar_slice(&t, &expected, &actual[..2]);

        assert!(!t.failed());
    }
}
