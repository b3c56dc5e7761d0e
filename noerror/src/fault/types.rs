//! Primary fault enum shared by both container families.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// Shared, type-erased cause attached to a caller-supplied fault.
pub type SharedCause = Arc<dyn StdError + Send + Sync>;

/// Reasons an [`Outcome`](crate::Outcome) can hold a failure.
///
/// Faults are cheap to clone: the only heap-owned cause is shared behind an
/// [`Arc`]. Equality compares variants field by field; caller-supplied causes
/// compare by presence and rendered text since trait objects carry no
/// equality of their own.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum Fault {
    /// An optional container was converted while it held no value.
    #[error("Maybe is empty")]
    Empty,

    /// A value was required but `None` was supplied.
    #[error("{context} is null")]
    Null {
        /// Where the missing value was expected.
        context: &'static str,
    },

    /// A guarded callback panicked.
    #[error("callback panicked: {payload}")]
    Panicked {
        /// Rendered panic payload.
        payload: String,
    },

    /// A domain failure supplied by the caller.
    #[error("{message}")]
    Message {
        /// Human-readable description of the failure.
        message: String,
        /// Underlying error, if any.
        #[source]
        source: Option<SharedCause>,
    },
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Null { context: lhs }, Self::Null { context: rhs }) => lhs == rhs,
            (Self::Panicked { payload: lhs }, Self::Panicked { payload: rhs }) => lhs == rhs,
            (
                Self::Message {
                    message: lhs_message,
                    source: lhs_source,
                },
                Self::Message {
                    message: rhs_message,
                    source: rhs_source,
                },
            ) => lhs_message == rhs_message && same_cause(lhs_source.as_ref(), rhs_source.as_ref()),
            _ => false,
        }
    }
}

impl Eq for Fault {}

fn same_cause(lhs: Option<&SharedCause>, rhs: Option<&SharedCause>) -> bool {
    match (lhs, rhs) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a.to_string() == b.to_string(),
        _ => false,
    }
}
