// Assertions over closures that may panic

use std::any::Any;
use std::cell::Cell;
use std::fmt::Debug;
use std::panic::{self as std_panic, AssertUnwindSafe, catch_unwind};
use std::sync::Once;

use super::{Reporter, fail};

/// Boxed payload of a caught panic
pub type Payload = Box<dyn Any + Send>;

thread_local! {
    static CATCHING: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

// Wraps the current hook once per process. Panics raised while this thread
// is inside `catch` are not printed; all others reach the previous hook.
fn install_quiet_hook() {
    if std::thread::panicking() {
        return;
    }
    QUIET_HOOK.call_once(|| {
        let previous = std_panic::take_hook();
        std_panic::set_hook(Box::new(move |info| {
            if !is_catching() {
                previous(info);
            }
        }));
    });
}

pub(crate) fn is_catching() -> bool {
    CATCHING.with(Cell::get)
}

/// Run `op`, converting a panic into its payload.
///
/// The unwind never propagates past this call, and the panic hook stays
/// silent for panics raised by `op` on this thread.
pub fn catch<F: FnOnce()>(op: F) -> Option<Payload> {
    install_quiet_hook();
    let outer = CATCHING.with(|c| c.replace(true));
    let result = catch_unwind(AssertUnwindSafe(op));
    CATCHING.with(|c| c.set(outer));

    match result {
        Ok(()) => None,
        Err(payload) => {
            tracing::trace!("caught panic: {}", describe(&*payload));
            Some(payload)
        }
    }
}

/// Message text of a `panic!` payload (`&'static str` or `String`)
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(&s) = payload.downcast_ref::<&'static str>() {
        Some(s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        Some(s.as_str())
    } else {
        None
    }
}

fn describe(payload: &(dyn Any + Send)) -> &str {
    panic_message(payload).unwrap_or("Box<dyn Any>")
}

/// Asserts that `op` panics
#[track_caller]
pub fn panics<R, F>(t: &R, op: F)
where
    R: Reporter + ?Sized,
    F: FnOnce(),
{
    if catch(op).is_none() {
        fail(t, "Expected panic but there was no panic".to_string());
    }
}

/// Asserts that `op` returns normally
#[track_caller]
pub fn not_panics<R, F>(t: &R, op: F)
where
    R: Reporter + ?Sized,
    F: FnOnce(),
{
    if let Some(payload) = catch(op) {
        fail(
            t,
            format!(
                "Expected no panic but there was panic: {}",
                describe(&*payload)
            ),
        );
    }
}

/// Asserts that `op` panics with a payload of type `E` equal to `expected`.
///
/// A payload of any other type counts as a different error.
#[track_caller]
pub fn panics_with_error<R, E, F>(t: &R, expected: E, op: F)
where
    R: Reporter + ?Sized,
    E: PartialEq + Debug + 'static,
    F: FnOnce(),
{
    let Some(payload) = catch(op) else {
        fail(t, "Expected panic but there was no panic".to_string());
        return;
    };

    if payload.downcast_ref::<E>() != Some(&expected) {
        fail(
            t,
            format!(
                "Expected panic with {:?} error but got {} error",
                expected,
                render_payload::<E>(&*payload)
            ),
        );
    }
}

/// Asserts that `op` does not panic with `expected`.
///
/// Passes when `op` returns normally or panics with anything else.
#[track_caller]
pub fn not_panics_with_error<R, E, F>(t: &R, expected: E, op: F)
where
    R: Reporter + ?Sized,
    E: PartialEq + Debug + 'static,
    F: FnOnce(),
{
    let Some(payload) = catch(op) else {
        return;
    };

    if payload.downcast_ref::<E>() == Some(&expected) {
        fail(
            t,
            format!(
                "Expected panic with different error than {:?} error",
                expected
            ),
        );
    }
}

/// Asserts that `op` panics with exactly this message, whether the payload
/// was a `&'static str` or a formatted `String`
#[track_caller]
pub fn panics_with_message<R, F>(t: &R, expected: &str, op: F)
where
    R: Reporter + ?Sized,
    F: FnOnce(),
{
    let Some(payload) = catch(op) else {
        fail(t, "Expected panic but there was no panic".to_string());
        return;
    };

    let actual = describe(&*payload);
    if panic_message(&*payload) != Some(expected) {
        fail(
            t,
            format!(
                "Expected panic with {:?} message but got {:?} message",
                expected, actual
            ),
        );
    }
}

fn render_payload<E: Debug + 'static>(payload: &(dyn Any + Send)) -> String {
    match payload.downcast_ref::<E>() {
        Some(value) => format!("{:?}", value),
        None => format!("{:?}", describe(payload)),
    }
}
