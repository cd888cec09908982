// Assertion module

pub mod collection;
pub mod comparator;
pub mod diff;
pub mod equality;
pub mod map;
pub mod message;
pub mod panic;
pub mod shape;
pub mod slice;

pub use collection::{MapLike, SliceLike};
pub use equality::{
    deep_equal, deep_equal_serialized, equal, is_false, is_true, nil, not_deep_equal, not_equal,
    not_nil,
};
pub use map::{
    empty_map, equal_map, map_contains, map_contains_key, map_length, map_not_contains,
    map_not_contains_key, not_empty_map, not_equal_map,
};
pub use panic::{
    catch, not_panics, not_panics_with_error, panic_message, panics, panics_with_error,
    panics_with_message,
};
pub use shape::{Inspect, Kind, Primitive, Shape};
pub use slice::{
    deep_similar_slice, empty_slice, equal_slice, not_deep_similar_slice, not_empty_slice,
    not_equal_slice, not_similar_slice, similar_slice, slice_contains, slice_length,
    slice_not_contains,
};

use crate::reporter::{Failure, Reporter};

#[track_caller]
pub(crate) fn fail<R: Reporter + ?Sized>(t: &R, message: String) {
    t.report(Failure::new(message));
}
