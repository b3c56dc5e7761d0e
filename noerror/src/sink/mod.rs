//! Process-wide diagnostic sink.
//!
//! Combinators never propagate a panic and never drop a failure silently.
//! Both events are surfaced through one optional callback of shape
//! `(message, cause)`. The sink starts unconfigured, in which case reports
//! only produce a `tracing` event at `debug` level. Once configured it stays
//! configured until the caller explicitly replaces it.
//!
//! The callback lives in a `parking_lot::RwLock` so concurrent readers never
//! observe a half-written sink. The lock is released before the sink runs,
//! which lets a sink reconfigure itself without deadlocking.
//!
//! # Examples
//!
//! ```
//! use noerror::{Maybe, sink};
//!
//! sink::configure_sink(|message, cause| eprintln!("{message}: {cause}"));
//! let length = Maybe::present("hello").map_present(|text| text.len());
//! assert_eq!(length, Maybe::Present(5));
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::Fault;
use crate::guard::describe;

/// Callback receiving every swallowed panic and discarded failure.
pub type DiagnosticSink = Arc<dyn Fn(&str, &Fault) + Send + Sync>;

static SINK: LazyLock<RwLock<Option<DiagnosticSink>>> = LazyLock::new(RwLock::default);

/// Installs `sink` as the process-wide diagnostic sink.
///
/// Any previously configured sink is replaced.
pub fn configure_sink<F>(sink: F)
where
    F: Fn(&str, &Fault) + Send + Sync + 'static,
{
    *SINK.write() = Some(Arc::new(sink));
}

/// Installs a shared sink, keeping the current one when `sink` is `None`.
///
/// ```
/// use std::sync::Arc;
/// use noerror::sink::{self, DiagnosticSink};
///
/// let shared: DiagnosticSink = Arc::new(|_message, _cause| {});
/// sink::configure_shared_sink(Some(shared));
/// sink::configure_shared_sink(None);
/// assert!(sink::is_configured());
/// ```
pub fn configure_shared_sink(sink: Option<DiagnosticSink>) {
    if let Some(installed) = sink {
        *SINK.write() = Some(installed);
    }
}

/// Swaps the sink unconditionally, returning the previous one.
///
/// Passing `None` returns the process to the unconfigured state. Test
/// harnesses use this to restore whatever sink was active before them.
#[must_use = "the previous sink is needed to restore it later"]
pub fn replace_sink(sink: Option<DiagnosticSink>) -> Option<DiagnosticSink> {
    std::mem::replace(&mut *SINK.write(), sink)
}

/// Returns `true` once a sink has been installed.
#[must_use]
pub fn is_configured() -> bool {
    SINK.read().is_some()
}

/// Returns a sink that forwards every report to `tracing` at `warn` level.
///
/// ```
/// use noerror::sink;
///
/// sink::configure_shared_sink(Some(sink::tracing_sink()));
/// ```
#[must_use]
pub fn tracing_sink() -> DiagnosticSink {
    Arc::new(|message: &str, cause: &Fault| {
        tracing::warn!(target: "noerror", %cause, "{message}");
    })
}

/// Routes one diagnostic to the configured sink.
///
/// A sink that panics is logged and otherwise ignored; reporting never
/// unwinds into the combinator that triggered it.
pub(crate) fn report(message: &str, cause: &Fault) {
    tracing::debug!(target: "noerror::sink", %cause, "{message}");
    let Some(sink) = SINK.read().clone() else {
        return;
    };
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| sink(message, cause))) {
        tracing::error!(
            target: "noerror::sink",
            payload = %describe(payload.as_ref()),
            "diagnostic sink panicked while reporting: {message}"
        );
    }
}
