//! Guarded invocation of caller-supplied callbacks.
//!
//! Every combinator funnels its callback through [`guarded`], so a panic
//! never unwinds past a container method. The caught panic becomes a
//! [`Fault`] which is reported once through the diagnostic sink and handed
//! back to the combinator to pick its empty or failure branch.
//!
//! A callback raising a typed payload with [`std::panic::panic_any`] keeps
//! its cause: a [`Fault`] payload is carried as is and a boxed error is
//! wrapped with [`Fault::from`]. Any other payload becomes
//! [`Fault::Panicked`] with its rendered text.

use std::any::Any;
use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};

use crate::{Fault, sink};

const OPAQUE_PAYLOAD: &str = "non-string panic payload";

/// Runs `callback`, turning an unwinding panic into a reported fault.
///
/// `context` is the fixed message handed to the sink alongside the fault.
pub(crate) fn guarded<R, F>(context: &'static str, callback: F) -> Result<R, Fault>
where
    F: FnOnce() -> R,
{
    panic::catch_unwind(AssertUnwindSafe(callback)).map_err(|payload| {
        let fault = into_fault(payload);
        sink::report(context, &fault);
        fault
    })
}

/// Recovers the cause carried by a panic payload.
fn into_fault(payload: Box<dyn Any + Send>) -> Fault {
    let payload = match payload.downcast::<Fault>() {
        Ok(fault) => return *fault,
        Err(other) => other,
    };
    match payload.downcast::<Box<dyn StdError + Send + Sync>>() {
        Ok(error) => Fault::from(*error),
        Err(other) => Fault::panicked(describe(other.as_ref())),
    }
}

/// Runs a side-effecting hook, discarding its panic after reporting it.
pub(crate) fn observe<F>(context: &'static str, hook: F)
where
    F: FnOnce(),
{
    // The fault has already reached the sink; hooks have no result to carry it.
    let _reported = guarded(context, hook);
}

/// Renders a panic payload the way the standard panic hook does.
pub(crate) fn describe(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|text| (*text).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| OPAQUE_PAYLOAD.to_owned())
}
