//! Helpers for observing the process-wide diagnostic sink in tests.
//!
//! The sink is process-global state, so every helper here acquires a global
//! re-entrant mutex and holds it until the returned guard is dropped. Dropping
//! a guard reinstalls whatever sink was active before it, so captures nest
//! and restore in LIFO order on one thread while captures on different
//! threads are serialised.
//!
//! # Examples
//!
//! ```
//! use noerror::Maybe;
//! use noerror_test_helpers::sink;
//!
//! let capture = sink::capture();
//! let mapped: Maybe<u8> = Maybe::present(1).map_present(|_| panic!("boom"));
//! assert_eq!(mapped, Maybe::Absent);
//! assert_eq!(capture.count(), 1);
//! ```

use std::fmt;
use std::sync::{Arc, LazyLock};

use noerror::Fault;
use noerror::sink::{DiagnosticSink, replace_sink};
use parking_lot::{Mutex, ReentrantMutex, ReentrantMutexGuard};

static SINK_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// One `(message, cause)` pair delivered to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Fixed message naming the combinator that reported.
    pub message: String,
    /// Fault handed to the sink.
    pub cause: Fault,
}

/// RAII guard that records every report and restores the prior sink on drop.
#[must_use = "dropping restores the prior sink"]
pub struct SinkCapture {
    reports: Arc<Mutex<Vec<Report>>>,
    previous: Option<DiagnosticSink>,
    _lock: ReentrantMutexGuard<'static, ()>,
}

impl SinkCapture {
    /// Number of reports received so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.reports.lock().len()
    }

    /// Snapshot of every report received so far, oldest first.
    #[must_use]
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }

    /// Messages received so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.reports
            .lock()
            .iter()
            .map(|report| report.message.clone())
            .collect()
    }

    /// Causes received so far, oldest first.
    #[must_use]
    pub fn causes(&self) -> Vec<Fault> {
        self.reports
            .lock()
            .iter()
            .map(|report| report.cause.clone())
            .collect()
    }

    /// Forgets every report received so far.
    pub fn clear(&self) {
        self.reports.lock().clear();
    }
}

impl Drop for SinkCapture {
    fn drop(&mut self) {
        // Restoration happens before `_lock` is released.
        let _recorder = replace_sink(self.previous.take());
    }
}

impl fmt::Debug for SinkCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkCapture")
            .field("reports", &self.count())
            .field("had_previous", &self.previous.is_some())
            .finish_non_exhaustive()
    }
}

/// RAII guard that serialises sink access and restores the prior sink on drop.
///
/// Use this when a test installs sinks itself through
/// [`noerror::configure_sink`] and friends.
///
/// # Examples
/// ```
/// use noerror_test_helpers::sink;
///
/// let _lock = sink::lock();
/// noerror::configure_sink(|_message, _cause| {});
/// assert!(noerror::sink::is_configured());
/// ```
#[must_use = "dropping releases the sink lock and restores the prior sink"]
pub struct SinkLock {
    previous: Option<DiagnosticSink>,
    _lock: ReentrantMutexGuard<'static, ()>,
}

impl SinkLock {
    /// Returns `true` when a sink was configured before this lock was taken.
    #[must_use]
    pub const fn had_previous(&self) -> bool {
        self.previous.is_some()
    }
}

impl Drop for SinkLock {
    fn drop(&mut self) {
        let _current = replace_sink(self.previous.take());
    }
}

impl fmt::Debug for SinkLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkLock")
            .field("had_previous", &self.previous.is_some())
            .finish_non_exhaustive()
    }
}

/// Installs a recording sink and returns a guard exposing what it received.
pub fn capture() -> SinkCapture {
    let lock = SINK_MUTEX.lock();
    let reports: Arc<Mutex<Vec<Report>>> = Arc::default();
    let writer = Arc::clone(&reports);
    let recorder: DiagnosticSink = Arc::new(move |message: &str, cause: &Fault| {
        writer.lock().push(Report {
            message: message.to_owned(),
            cause: cause.clone(),
        });
    });
    let previous = replace_sink(Some(recorder));
    SinkCapture {
        reports,
        previous,
        _lock: lock,
    }
}

/// Takes the sink lock and leaves the sink unconfigured until dropped.
pub fn lock() -> SinkLock {
    let guard = SINK_MUTEX.lock();
    let previous = replace_sink(None);
    SinkLock {
        previous,
        _lock: guard,
    }
}
