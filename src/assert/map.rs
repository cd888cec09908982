// Mapping assertions

use std::fmt::Debug;

use super::collection::MapLike;
use super::comparator::maps_equal;
use super::message;
use super::{Reporter, fail};

/// Asserts that both maps hold the same key-value pairs
#[track_caller]
pub fn equal_map<R, K, V, M>(t: &R, expected: &M, actual: &M)
where
    R: Reporter + ?Sized,
    V: PartialEq,
    M: MapLike<K, V> + Debug + ?Sized,
{
    if !maps_equal(expected, actual) {
        fail(t, message::inequality(expected, actual));
    }
}

/// Asserts that the maps differ in at least one key or value
#[track_caller]
pub fn not_equal_map<R, K, V, M>(t: &R, expected: &M, actual: &M)
where
    R: Reporter + ?Sized,
    V: PartialEq,
    M: MapLike<K, V> + Debug + ?Sized,
{
    if maps_equal(expected, actual) {
        fail(t, message::equality(expected));
    }
}

/// Asserts that the map is present and has no entries
#[track_caller]
pub fn empty_map<R, K, V, M>(t: &R, m: &M)
where
    R: Reporter + ?Sized,
    M: MapLike<K, V> + ?Sized,
{
    if m.is_absent() {
        fail(t, "Expected empty map but got nil".to_string());
        return;
    }

    let length = m.entry_count();
    if length != 0 {
        fail(
            t,
            format!("Expected empty map but got map with length of {}", length),
        );
    }
}

/// Asserts that the map is present and has at least one entry
#[track_caller]
pub fn not_empty_map<R, K, V, M>(t: &R, m: &M)
where
    R: Reporter + ?Sized,
    M: MapLike<K, V> + ?Sized,
{
    if m.is_absent() {
        fail(t, "Expected non-empty map but got nil".to_string());
        return;
    }

    if m.entry_count() == 0 {
        fail(t, "Expected non-empty map but got empty map".to_string());
    }
}

/// Asserts the number of entries; an absent map has none
#[track_caller]
pub fn map_length<R, K, V, M>(t: &R, m: &M, expected_length: usize)
where
    R: Reporter + ?Sized,
    M: MapLike<K, V> + ?Sized,
{
    let length = m.entry_count();
    if length != expected_length {
        fail(
            t,
            format!(
                "Expected map to have length of {} but got {}",
                expected_length, length
            ),
        );
    }
}

/// Asserts that the map has the key
#[track_caller]
pub fn map_contains_key<R, K, V, M>(t: &R, m: &M, key: K)
where
    R: Reporter + ?Sized,
    K: Debug,
    M: MapLike<K, V> + ?Sized,
{
    if m.lookup(&key).is_none() {
        fail(
            t,
            format!(
                "The given map was expected to contain key {:?} but did not",
                key
            ),
        );
    }
}

/// Asserts that the map does not have the key
#[track_caller]
pub fn map_not_contains_key<R, K, V, M>(t: &R, m: &M, key: K)
where
    R: Reporter + ?Sized,
    K: Debug,
    M: MapLike<K, V> + ?Sized,
{
    if m.lookup(&key).is_some() {
        fail(
            t,
            format!(
                "The given map was expected to not contain key {:?} but did",
                key
            ),
        );
    }
}

/// Asserts that the map holds `value` under `key`
#[track_caller]
pub fn map_contains<R, K, V, M>(t: &R, m: &M, key: K, value: V)
where
    R: Reporter + ?Sized,
    K: Debug,
    V: PartialEq + Debug,
    M: MapLike<K, V> + ?Sized,
{
    match m.lookup(&key) {
        None => fail(t, format!("Key {:?} was not found in the map", key)),
        Some(actual) if *actual != value => fail(
            t,
            format!(
                "Expected {:?} for key {:?} in the map but got {:?}",
                value, key, actual
            ),
        ),
        Some(_) => {}
    }
}

/// Asserts that the map does not hold `value` under `key`
#[track_caller]
pub fn map_not_contains<R, K, V, M>(t: &R, m: &M, key: K, value: V)
where
    R: Reporter + ?Sized,
    K: Debug,
    V: PartialEq + Debug,
    M: MapLike<K, V> + ?Sized,
{
    if m.lookup(&key).is_some_and(|actual| *actual == value) {
        fail(
            t,
            format!(
                "Key {:?} and value {:?} was not expected to be found in the map",
                key, value
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::Recorder;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_empty_map_distinguishes_nil_from_non_empty() {
        let t = Recorder::new();
        let absent: Option<HashMap<i32, i32>> = None;

        empty_map(&t, &absent);
        empty_map(&t, &HashMap::from([(1, 1)]));

        assert_eq!(
            t.messages(),
            vec![
                "Expected empty map but got nil",
                "Expected empty map but got map with length of 1"
            ]
        );
    }

    #[test]
    fn test_map_contains_messages() {
        let t = Recorder::new();
        let m = BTreeMap::from([("a", 1)]);

        map_contains(&t, &m, "b", 1);
        map_contains(&t, &m, "a", 2);

        assert_eq!(
            t.messages(),
            vec![
                "Key \"b\" was not found in the map",
                "Expected 2 for key \"a\" in the map but got 1"
            ]
        );
    }

    #[test]
    fn test_equal_map_message() {
        let t = Recorder::new();
        let expected = BTreeMap::from([(1, 1)]);
        let actual = BTreeMap::from([(1, 2)]);

        equal_map(&t, &expected, &actual);

        assert_eq!(t.messages(), vec!["Expected: {1: 1}. Actual: {1: 2}"]);
    }
}
