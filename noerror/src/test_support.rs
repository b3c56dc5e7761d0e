//! In-crate sink recorder for unit tests.
//!
//! Unit tests cannot use `noerror_test_helpers`: that crate links a separate
//! build of `noerror`, so its sink would live in a different static. Tests
//! using [`capture`] must also be marked `#[serial(sink)]`.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::Fault;
use crate::sink::{DiagnosticSink, replace_sink};

/// Records reports for its lifetime and restores the previous sink on drop.
pub(crate) struct Capture {
    reports: Arc<Mutex<Vec<(String, Fault)>>>,
    previous: Option<DiagnosticSink>,
}

impl Capture {
    /// Number of reports received so far.
    pub(crate) fn count(&self) -> usize {
        self.reports.lock().len()
    }

    /// Snapshot of every `(message, cause)` pair received so far.
    pub(crate) fn reports(&self) -> Vec<(String, Fault)> {
        self.reports.lock().clone()
    }

    /// Causes received so far, in order.
    pub(crate) fn causes(&self) -> Vec<Fault> {
        self.reports.lock().iter().map(|(_, cause)| cause.clone()).collect()
    }
}

impl Drop for Capture {
    fn drop(&mut self) {
        let _recorder = replace_sink(self.previous.take());
    }
}

/// Installs a recording sink.
pub(crate) fn capture() -> Capture {
    let reports: Arc<Mutex<Vec<(String, Fault)>>> = Arc::default();
    let writer = Arc::clone(&reports);
    let sink: DiagnosticSink = Arc::new(move |message: &str, cause: &Fault| {
        writer.lock().push((message.to_owned(), cause.clone()));
    });
    let previous = replace_sink(Some(sink));
    Capture { reports, previous }
}
