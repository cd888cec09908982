//! Soft assertions for unit tests.
//!
//! Every check takes a [`Reporter`] and records a non-fatal [`Failure`] on
//! mismatch instead of panicking, so a test keeps running and reports every
//! broken expectation at once.
//!
//! ```
//! use softassert::Recorder;
//!
//! let t = Recorder::new();
//! softassert::similar_slice(&t, &[3, 10, 5, 16], &[16, 10, 5, 3]);
//! softassert::equal(&t, 1, 2);
//! assert_eq!(t.messages(), vec!["Expected: 1. Actual: 2"]);
//! ```
//!
//! Inside `#[test]` functions use [`TestScope`], which fails the test when it
//! goes out of scope with failures recorded.

pub mod assert;
pub mod config;
pub mod error;
pub mod logging;
pub mod reporter;

pub use assert::*;
pub use error::{ConfigError, ShapeError};
pub use reporter::{Failure, Recorder, Reporter, TestScope};
