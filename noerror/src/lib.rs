//! Panic-contained optional and outcome containers.
//!
//! This crate defines [`Maybe`] (a value, or nothing) and [`Outcome`] (a
//! value, or a [`Fault`]) together with combinators that never unwind. Every
//! caller-supplied callback runs inside a panic guard: a panic turns the
//! result into the empty or failure branch and is reported once through the
//! process-wide [`sink`]. A callback that merely produces nothing is not an
//! error and is not reported.
//!
//! Converting a failed [`Outcome`] into a [`Maybe`] drops its fault, so that
//! conversion reports the fault before discarding it.
//!
//! ```
//! use noerror::{Maybe, Outcome, sink};
//!
//! sink::configure_shared_sink(Some(sink::tracing_sink()));
//!
//! let length = Maybe::present("hello").map_present(str::len);
//! assert_eq!(length, Maybe::Present(5));
//!
//! let recovered = Outcome::<i32>::failure("boom")
//!     .map_success(|x| x + 1)
//!     .map_failure(|_| 42);
//! assert_eq!(recovered, Outcome::Success(42));
//! ```
//!
//! Guards rely on unwinding; built with `panic = "abort"`, a panicking
//! callback aborts the process.
//!
//! # Quiet containment
//!
//! A contained panic still passes through the process panic hook, which by
//! default prints `thread '..' panicked at` to stderr outside the sink.
//! Callers wanting the sink to be the only channel install a quiet hook:
//!
//! ```
//! use std::panic;
//! use noerror::Maybe;
//!
//! let previous = panic::take_hook();
//! panic::set_hook(Box::new(|_info| {}));
//! let quiet: Maybe<u8> = Maybe::present(1).map_present(|_| panic!("silent"));
//! panic::set_hook(previous);
//! assert_eq!(quiet, Maybe::Absent);
//! ```

mod fault;
mod guard;
mod interop;
mod maybe;
mod outcome;
pub mod sink;

#[cfg(test)]
mod test_support;

pub use fault::{Chain, Fault, SharedCause};
pub use interop::{IntoMaybe, IntoOutcome};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use sink::{DiagnosticSink, configure_shared_sink, configure_sink};
