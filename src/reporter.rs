// Failure sinks for soft assertions

use std::fmt;
use std::panic::Location;
use std::sync::{Mutex, MutexGuard};

use crate::config::Config;

/// A single non-fatal assertion failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
    /// Name of the test that was running, taken from the harness thread name
    pub test: Option<String>,
    pub location: &'static Location<'static>,
}

impl Failure {
    /// Create a failure attributed to the caller of the assertion
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            test: std::thread::current().name().map(str::to_string),
            location: Location::caller(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.location.file(),
            self.location.line(),
            self.message
        )
    }
}

/// Receiver of assertion failures for the currently running test.
///
/// Implementations must not panic or abort from `report`; the caller keeps
/// running after a failure is recorded.
pub trait Reporter {
    /// Record a non-fatal failure
    fn report(&self, failure: Failure);

    /// Whether any failure has been recorded so far
    fn failed(&self) -> bool;

    #[track_caller]
    fn error(&self, message: &str) {
        self.report(Failure::new(message));
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.report(Failure::new(args.to_string()));
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, failure: Failure) {
        (**self).report(failure);
    }

    fn failed(&self) -> bool {
        (**self).failed()
    }
}

fn trace_failure(failure: &Failure) {
    if Config::global().logging.log_failures {
        tracing::debug!(
            test = failure.test.as_deref().unwrap_or("<unnamed>"),
            "assertion failed at {}:{}: {}",
            failure.location.file(),
            failure.location.line(),
            failure.message
        );
    }
}

// A poisoned lock only means another assertion panicked mid-push; the
// recorded failures are still valid.
fn lock(failures: &Mutex<Vec<Failure>>) -> MutexGuard<'_, Vec<Failure>> {
    failures
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory reporter that keeps every failure for later inspection
#[derive(Debug, Default)]
pub struct Recorder {
    failures: Mutex<Vec<Failure>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> Vec<Failure> {
        lock(&self.failures).clone()
    }

    pub fn messages(&self) -> Vec<String> {
        lock(&self.failures)
            .iter()
            .map(|f| f.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        lock(&self.failures).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Reporter for Recorder {
    fn report(&self, failure: Failure) {
        trace_failure(&failure);
        lock(&self.failures).push(failure);
    }

    fn failed(&self) -> bool {
        !lock(&self.failures).is_empty()
    }
}

/// Reporter for use inside `#[test]` functions.
///
/// Failures accumulate while the test keeps running. When the scope is
/// finished or dropped, a single panic lists all of them so the harness marks
/// the test as failed.
#[derive(Debug, Default)]
pub struct TestScope {
    recorder: Recorder,
}

impl TestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panic with every recorded failure, if there are any
    pub fn finish(self) {
        // Drop does the work
    }

    fn summary(failures: &[Failure]) -> String {
        let mut out = format!("{} soft assertion(s) failed:", failures.len());
        for failure in failures {
            out.push_str("\n  ");
            out.push_str(&failure.to_string());
        }
        out
    }
}

impl Reporter for TestScope {
    fn report(&self, failure: Failure) {
        self.recorder.report(failure);
    }

    fn failed(&self) -> bool {
        self.recorder.failed()
    }
}

impl Drop for TestScope {
    fn drop(&mut self) {
        let failures = std::mem::take(&mut *lock(&self.recorder.failures));
        if failures.is_empty() || std::thread::panicking() {
            return;
        }
        panic!("{}", Self::summary(&failures));
    }
}
