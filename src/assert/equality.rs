// Equality, nil and boolean assertions

use std::fmt::Debug;

use serde::Serialize;

use super::comparator::primitive_equal;
use super::message::{self, NIL};
use super::shape::{Inspect, inspect_serialized, is_nil, structural_equal};
use super::{Reporter, fail};

/// Asserts that the two values are equal
#[track_caller]
pub fn equal<R, T>(t: &R, expected: T, actual: T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    if !primitive_equal(&expected, &actual) {
        fail(t, message::inequality(&expected, &actual));
    }
}

/// Asserts that the two values are not equal
#[track_caller]
pub fn not_equal<R, T>(t: &R, expected: T, actual: T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    if primitive_equal(&expected, &actual) {
        fail(t, message::equality(&expected));
    }
}

/// Asserts that the two values are structurally equal, following references
#[track_caller]
pub fn deep_equal<R, T>(t: &R, expected: T, actual: T)
where
    R: Reporter + ?Sized,
    T: Inspect + Debug,
{
    if !structural_equal(&expected.shape(), &actual.shape()) {
        fail(t, message::deep_inequality(&expected, &actual));
    }
}

/// Asserts that the two values are not structurally equal
#[track_caller]
pub fn not_deep_equal<R, T>(t: &R, expected: T, actual: T)
where
    R: Reporter + ?Sized,
    T: Inspect + Debug,
{
    if structural_equal(&expected.shape(), &actual.shape()) {
        fail(t, message::equality(&expected));
    }
}

/// Asserts structural equality of two values through their `Serialize` form.
///
/// A value that cannot be serialized is reported as a failure.
#[track_caller]
pub fn deep_equal_serialized<R, T>(t: &R, expected: &T, actual: &T)
where
    R: Reporter + ?Sized,
    T: Serialize + Debug + ?Sized,
{
    let shapes = inspect_serialized(expected)
        .and_then(|e| inspect_serialized(actual).map(|a| (e, a)));

    match shapes {
        Ok((e, a)) => {
            if !structural_equal(&e, &a) {
                fail(t, message::deep_inequality(expected, actual));
            }
        }
        Err(e) => fail(t, e.to_string()),
    }
}

/// Asserts that the value is nil
#[track_caller]
pub fn nil<R, T>(t: &R, actual: T)
where
    R: Reporter + ?Sized,
    T: Inspect + Debug,
{
    if !is_nil(&actual) {
        fail(t, message::inequality(&NIL, &actual));
    }
}

/// Asserts that the value is not nil
#[track_caller]
pub fn not_nil<R, T>(t: &R, actual: T)
where
    R: Reporter + ?Sized,
    T: Inspect,
{
    if is_nil(&actual) {
        fail(t, message::equality(&NIL));
    }
}

/// Asserts that the condition holds
#[track_caller]
pub fn is_true<R: Reporter + ?Sized>(t: &R, assertion: bool) {
    if !assertion {
        fail(t, message::inequality(&true, &false));
    }
}

/// Asserts that the condition does not hold
#[track_caller]
pub fn is_false<R: Reporter + ?Sized>(t: &R, assertion: bool) {
    if assertion {
        fail(t, message::inequality(&false, &true));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::Recorder;

    #[test]
    fn test_equal_message() {
        let t = Recorder::new();
        equal(&t, "expected value", "actual value");
        assert_eq!(
            t.messages(),
            vec!["Expected: \"expected value\". Actual: \"actual value\""]
        );
    }

    #[test]
    fn test_failure_points_at_caller() {
        let t = Recorder::new();
        let line = line!() + 1;
        equal(&t, 1, 2);

        let failures = t.failures();
        assert_eq!(failures[0].location.file(), file!());
        assert_eq!(failures[0].location.line(), line);
    }

    #[test]
    fn test_not_equal_message() {
        let t = Recorder::new();
        not_equal(&t, 5, 5);
        assert_eq!(t.messages(), vec!["Expected to not equal: 5"]);
    }

    #[test]
    fn test_nil_messages() {
        let t = Recorder::new();
        nil(&t, Some(3));
        not_nil(&t, None::<Box<i32>>);
        assert_eq!(
            t.messages(),
            vec!["Expected: nil. Actual: Some(3)", "Expected to not equal: nil"]
        );
    }

    #[test]
    fn test_boolean_messages() {
        let t = Recorder::new();
        is_true(&t, false);
        is_false(&t, true);
        assert_eq!(
            t.messages(),
            vec!["Expected: true. Actual: false", "Expected: false. Actual: true"]
        );
    }

    #[test]
    fn test_deep_equal_serialized() {
        #[derive(Debug, Serialize)]
        struct Payload {
            id: u32,
            tags: Vec<&'static str>,
        }

        let t = Recorder::new();
        deep_equal_serialized(
            &t,
            &Payload { id: 1, tags: vec!["a"] },
            &Payload { id: 1, tags: vec!["a"] },
        );
        assert!(!t.failed());

        deep_equal_serialized(
            &t,
            &Payload { id: 1, tags: vec!["a"] },
            &Payload { id: 2, tags: vec!["a"] },
        );
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_deep_equal_serialized_reports_serialization_error() {
        let t = Recorder::new();
        let bad = std::collections::HashMap::from([((1, 2), 3)]);
        deep_equal_serialized(&t, &bad, &bad);

        assert_eq!(t.len(), 1);
        assert!(t.messages()[0].starts_with("value could not be serialized"));
    }
}
