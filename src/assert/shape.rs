//! Structural view of values used by deep equality and nil checks.
//!
//! Every value that takes part in a deep comparison is lowered into a
//! [`Shape`] through the [`Inspect`] trait. Comparison then walks two shapes
//! in lockstep; references are followed to the data they point at, so two
//! `Box`es holding equal structs are equal even though they live at
//! different addresses.
//!
//! Values reached through `Rc`/`Arc` cycles cannot be inspected; the walk does
//! not track visited nodes.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};

use serde::Serialize;
use serde_json::Value;

use super::comparator::similar_by;
use crate::error::ShapeError;

/// Scalar leaf values
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Bool(bool),
    Int(i128),
    Uint(u128),
    Float(f64),
    Char(char),
    Str(String),
}

/// Closed set of value shapes understood by the comparator.
///
/// Nilable kinds carry an `Option`; `None` is their absent state.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Untyped absent value
    Nil,
    Primitive(Primitive),
    Reference(Option<Box<Shape>>),
    Sequence(Option<Vec<Shape>>),
    Set(Option<Vec<Shape>>),
    Mapping(Option<Vec<(Shape, Shape)>>),
    /// Function pointer, identified by address
    Callable(Option<usize>),
    /// Channel endpoint, identified by handle address
    Channel(Option<usize>),
    Composite {
        name: &'static str,
        fields: Vec<(&'static str, Shape)>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Primitive,
    Reference,
    Sequence,
    Set,
    Mapping,
    Callable,
    Channel,
    Composite,
}

impl Kind {
    pub fn is_nilable(self) -> bool {
        matches!(
            self,
            Kind::Nil
                | Kind::Reference
                | Kind::Sequence
                | Kind::Set
                | Kind::Mapping
                | Kind::Callable
                | Kind::Channel
        )
    }
}

impl Shape {
    pub fn kind(&self) -> Kind {
        match self {
            Shape::Nil => Kind::Nil,
            Shape::Primitive(_) => Kind::Primitive,
            Shape::Reference(_) => Kind::Reference,
            Shape::Sequence(_) => Kind::Sequence,
            Shape::Set(_) => Kind::Set,
            Shape::Mapping(_) => Kind::Mapping,
            Shape::Callable(_) => Kind::Callable,
            Shape::Channel(_) => Kind::Channel,
            Shape::Composite { .. } => Kind::Composite,
        }
    }

    /// True for the absent state of a nilable kind
    pub fn is_nil(&self) -> bool {
        match self {
            Shape::Nil => true,
            Shape::Reference(r) => r.is_none(),
            Shape::Sequence(s) | Shape::Set(s) => s.is_none(),
            Shape::Mapping(m) => m.is_none(),
            Shape::Callable(c) | Shape::Channel(c) => c.is_none(),
            Shape::Primitive(_) | Shape::Composite { .. } => false,
        }
    }

    pub fn reference(inner: Shape) -> Self {
        Shape::Reference(Some(Box::new(inner)))
    }

    pub fn sequence(items: impl IntoIterator<Item = Shape>) -> Self {
        Shape::Sequence(Some(items.into_iter().collect()))
    }

    pub fn composite(name: &'static str, fields: Vec<(&'static str, Shape)>) -> Self {
        Shape::Composite { name, fields }
    }
}

/// Recursive equality over shapes.
///
/// Sets are matched as multisets and mappings by key lookup, both using
/// structural equality on the elements. Function pointers are only equal when
/// both are absent; channels when they are the same handle.
pub fn structural_equal(expected: &Shape, actual: &Shape) -> bool {
    match (expected, actual) {
        (Shape::Nil, Shape::Nil) => true,
        (Shape::Primitive(e), Shape::Primitive(a)) => e == a,
        (Shape::Reference(e), Shape::Reference(a)) => {
            both_absent_or(e.as_deref(), a.as_deref(), structural_equal)
        }
        (Shape::Sequence(e), Shape::Sequence(a)) => both_absent_or(e.as_deref(), a.as_deref(), |e, a| {
            e.len() == a.len() && e.iter().zip(a).all(|(e, a)| structural_equal(e, a))
        }),
        (Shape::Set(e), Shape::Set(a)) => both_absent_or(e.as_deref(), a.as_deref(), |e, a| {
            similar_by(e, a, structural_equal)
        }),
        (Shape::Mapping(e), Shape::Mapping(a)) => {
            both_absent_or(e.as_deref(), a.as_deref(), mappings_equal)
        }
        (Shape::Callable(e), Shape::Callable(a)) => e.is_none() && a.is_none(),
        (Shape::Channel(e), Shape::Channel(a)) => e == a,
        (
            Shape::Composite {
                name: e_name,
                fields: e_fields,
            },
            Shape::Composite {
                name: a_name,
                fields: a_fields,
            },
        ) => {
            e_name == a_name
                && e_fields.len() == a_fields.len()
                && e_fields
                    .iter()
                    .zip(a_fields)
                    .all(|((ek, ev), (ak, av))| ek == ak && structural_equal(ev, av))
        }
        _ => false,
    }
}

fn both_absent_or<T: ?Sized>(
    expected: Option<&T>,
    actual: Option<&T>,
    present: impl FnOnce(&T, &T) -> bool,
) -> bool {
    match (expected, actual) {
        (None, None) => true,
        (Some(e), Some(a)) => present(e, a),
        _ => false,
    }
}

fn mappings_equal(expected: &[(Shape, Shape)], actual: &[(Shape, Shape)]) -> bool {
    if expected.len() != actual.len() {
        return false;
    }

    actual.iter().all(|(act_key, act_val)| {
        expected
            .iter()
            .find(|(exp_key, _)| structural_equal(exp_key, act_key))
            .is_some_and(|(_, exp_val)| structural_equal(exp_val, act_val))
    })
}

/// Lowering of a value into its [`Shape`]
pub trait Inspect {
    /// Structural view of `self`; an absent value maps to a nil shape
    fn shape(&self) -> Shape;

    /// Shape of an absent value of this type, as seen through `Option::None`
    fn absent() -> Shape
    where
        Self: Sized,
    {
        Shape::Reference(None)
    }
}

/// Inspect a value through its `Serialize` implementation.
///
/// Structs become mappings keyed by field name, so this works for any type
/// without a hand-written [`Inspect`] impl.
pub fn inspect_serialized<T: Serialize + ?Sized>(value: &T) -> Result<Shape, ShapeError> {
    let json = serde_json::to_value(value)?;
    Ok(json.shape())
}

/// Deep equality on any pair of inspectable values
pub fn deep_eq<T: Inspect + ?Sized>(expected: &T, actual: &T) -> bool {
    structural_equal(&expected.shape(), &actual.shape())
}

/// Nil check on any inspectable value
pub fn is_nil<T: Inspect + ?Sized>(value: &T) -> bool {
    value.shape().is_nil()
}

macro_rules! inspect_primitive {
    ($variant:ident as $repr:ty: $($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape {
                    Shape::Primitive(Primitive::$variant(<$repr>::from(*self)))
                }
            }
        )*
    };
}

inspect_primitive!(Int as i128: i8, i16, i32, i64, i128);
inspect_primitive!(Uint as u128: u8, u16, u32, u64, u128);
inspect_primitive!(Float as f64: f32, f64);
inspect_primitive!(Bool as bool: bool);
inspect_primitive!(Char as char: char);

impl Inspect for isize {
    fn shape(&self) -> Shape {
        Shape::Primitive(Primitive::Int(*self as i128))
    }
}

impl Inspect for usize {
    fn shape(&self) -> Shape {
        Shape::Primitive(Primitive::Uint(*self as u128))
    }
}

impl Inspect for str {
    fn shape(&self) -> Shape {
        Shape::Primitive(Primitive::Str(self.to_string()))
    }
}

impl Inspect for String {
    fn shape(&self) -> Shape {
        self.as_str().shape()
    }
}

impl Inspect for () {
    fn shape(&self) -> Shape {
        Shape::Nil
    }

    fn absent() -> Shape {
        Shape::Nil
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn shape(&self) -> Shape {
        match self {
            None => T::absent(),
            Some(value) => {
                let shape = value.shape();
                // A present wrapper around an absent value is itself present
                if shape.kind().is_nilable() && !shape.is_nil() {
                    shape
                } else {
                    Shape::reference(shape)
                }
            }
        }
    }
}

macro_rules! inspect_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $ptr<T> {
                fn shape(&self) -> Shape {
                    Shape::reference((**self).shape())
                }
            }
        )*
    };
}

inspect_pointer!(Box, Rc, Arc);

impl<T: Inspect + ?Sized> Inspect for &T {
    fn shape(&self) -> Shape {
        Shape::reference((**self).shape())
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn shape(&self) -> Shape {
        Shape::reference((**self).shape())
    }
}

impl<T: Inspect> Inspect for [T] {
    fn shape(&self) -> Shape {
        Shape::sequence(self.iter().map(Inspect::shape))
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape {
        self.as_slice().shape()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn shape(&self) -> Shape {
        self.as_slice().shape()
    }

    fn absent() -> Shape {
        Shape::Sequence(None)
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape {
        Shape::sequence(self.iter().map(Inspect::shape))
    }

    fn absent() -> Shape {
        Shape::Sequence(None)
    }
}

impl<K: Inspect, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape {
        Shape::Mapping(Some(
            self.iter().map(|(k, v)| (k.shape(), v.shape())).collect(),
        ))
    }

    fn absent() -> Shape {
        Shape::Mapping(None)
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape {
        Shape::Mapping(Some(
            self.iter().map(|(k, v)| (k.shape(), v.shape())).collect(),
        ))
    }

    fn absent() -> Shape {
        Shape::Mapping(None)
    }
}

impl<T: Inspect, S> Inspect for HashSet<T, S> {
    fn shape(&self) -> Shape {
        Shape::Set(Some(self.iter().map(Inspect::shape).collect()))
    }

    fn absent() -> Shape {
        Shape::Set(None)
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn shape(&self) -> Shape {
        Shape::Set(Some(self.iter().map(Inspect::shape).collect()))
    }

    fn absent() -> Shape {
        Shape::Set(None)
    }
}

macro_rules! inspect_callable {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Inspect for fn($($arg),*) -> R {
            fn shape(&self) -> Shape {
                Shape::Callable(Some(*self as usize))
            }

            fn absent() -> Shape {
                Shape::Callable(None)
            }
        }
    };
}

inspect_callable!();
inspect_callable!(A);
inspect_callable!(A, B);
inspect_callable!(A, B, C);

// Channel ends are identified by the address of the handle itself, not the
// underlying channel: clones of one `Sender` are distinct, and a handle
// moved to a new place gets a new identity. Compare a handle with itself.
macro_rules! inspect_channel {
    ($($endpoint:ident),*) => {
        $(
            impl<T> Inspect for $endpoint<T> {
                fn shape(&self) -> Shape {
                    Shape::Channel(Some(self as *const Self as usize))
                }

                fn absent() -> Shape {
                    Shape::Channel(None)
                }
            }
        )*
    };
}

inspect_channel!(Sender, SyncSender, Receiver);

macro_rules! inspect_tuple {
    ($($idx:tt $name:ident),+) => {
        impl<$($name: Inspect),+> Inspect for ($($name,)+) {
            fn shape(&self) -> Shape {
                Shape::composite("tuple", vec![$((stringify!($idx), self.$idx.shape())),+])
            }
        }
    };
}

inspect_tuple!(0 A);
inspect_tuple!(0 A, 1 B);
inspect_tuple!(0 A, 1 B, 2 C);
inspect_tuple!(0 A, 1 B, 2 C, 3 D);

impl Inspect for Value {
    fn shape(&self) -> Shape {
        match self {
            Value::Null => Shape::Nil,
            Value::Bool(b) => b.shape(),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i.shape()
                } else if let Some(u) = n.as_u64() {
                    u.shape()
                } else {
                    n.as_f64().unwrap_or(f64::NAN).shape()
                }
            }
            Value::String(s) => s.shape(),
            Value::Array(arr) => arr.shape(),
            Value::Object(map) => Shape::Mapping(Some(
                map.iter()
                    .map(|(k, v)| (k.shape(), v.shape()))
                    .collect(),
            )),
        }
    }

    fn absent() -> Shape {
        Shape::Nil
    }
}

/// Implement [`Inspect`] for a struct as a composite of the listed fields.
///
/// ```
/// use softassert::{Reporter, inspect_fields};
///
/// #[derive(Debug)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// inspect_fields!(Point { x, y });
///
/// let t = softassert::Recorder::new();
/// softassert::deep_equal(&t, Point { x: 1, y: 2 }, Point { x: 1, y: 2 });
/// softassert::not_deep_equal(&t, Point { x: 1, y: 2 }, Point { x: 2, y: 1 });
/// assert!(!t.failed());
/// ```
#[macro_export]
macro_rules! inspect_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Inspect for $ty {
            fn shape(&self) -> $crate::Shape {
                $crate::Shape::Composite {
                    name: stringify!($ty),
                    fields: vec![$((stringify!($field), $crate::Inspect::shape(&self.$field))),*],
                }
            }
        }
    };
}
