//! Outcome container: a value, or a failure.
//!
//! [`Outcome`] follows railway-oriented composition. Success-side
//! combinators run only on [`Outcome::Success`] and forward a
//! [`Outcome::Failure`] with its [`Fault`] untouched; failure-side
//! combinators are the way back onto the success track. Every callback runs
//! inside a panic guard, so a panic becomes a failure instead of unwinding.

use std::fmt;

use crate::guard::guarded;
use crate::{Fault, Maybe, sink};

mod combinators;

const OF: &str = "panic in supplier of Outcome::of";
const OF_NULLABLE: &str = "panic in supplier of Outcome::of_nullable";
const DISCARDED: &str = "failure discarded by Outcome::to_maybe";

/// A value of type `T`, or the [`Fault`] explaining why there is none.
///
/// # Examples
///
/// ```
/// use noerror::{Fault, Outcome};
///
/// let failed: Outcome<i32> = Outcome::failure("boom");
/// assert_eq!(failed.clone().map_success(|x| x + 1), failed);
/// assert_eq!(failed.map_failure(|_| 42), Outcome::Success(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "combinators return a new container"]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(Fault),
}

impl<T> Outcome<T> {
    /// Runs `supplier` under a panic guard.
    ///
    /// A panic is reported and becomes a failure carrying
    /// [`Fault::Panicked`].
    ///
    /// ```
    /// use noerror::Outcome;
    ///
    /// assert_eq!(Outcome::of(|| 2 + 2), Outcome::Success(4));
    /// assert!(Outcome::<i32>::of(|| panic!("no")).is_failure());
    /// ```
    pub fn of<F>(supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        guarded(OF, supplier).map_or_else(Self::Failure, Self::Success)
    }

    /// Runs a supplier that may produce nothing.
    ///
    /// `None` becomes a failure carrying [`Fault::Null`] and is not reported.
    pub fn of_nullable<F>(supplier: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        match guarded(OF_NULLABLE, supplier) {
            Ok(candidate) => Self::from_nullable_in(candidate, "supplier of Outcome::of_nullable"),
            Err(fault) => Self::Failure(fault),
        }
    }

    /// Wraps a candidate value, mapping `None` to a [`Fault::Null`] failure.
    pub fn from_nullable(candidate: Option<T>) -> Self {
        Self::from_nullable_in(candidate, "value")
    }

    pub(crate) fn from_nullable_in(candidate: Option<T>, context: &'static str) -> Self {
        candidate.map_or(Self::Failure(Fault::Null { context }), Self::Success)
    }

    /// Wraps a value.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a failure.
    pub fn failure(fault: impl Into<Fault>) -> Self {
        Self::Failure(fault.into())
    }

    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.is_success()
    }

    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Outcome::Failure`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the value of a success.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the fault of a failure.
    #[must_use]
    pub const fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Success(_) => None,
            Self::Failure(fault) => Some(fault),
        }
    }

    /// Converts `&Outcome<T>` into `Outcome<&T>`, cloning the fault.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(fault) => Outcome::Failure(fault.clone()),
        }
    }

    /// Unwraps into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the carried [`Fault`] for a failure.
    pub fn into_result(self) -> Result<T, Fault> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(fault) => Err(fault),
        }
    }

    /// Returns the value or `default`.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value or computes one from the fault.
    ///
    /// The fallback is not guarded, matching [`Maybe::unwrap_or_else`].
    #[must_use]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => fallback(fault),
        }
    }

    /// Converts into a [`Maybe`].
    ///
    /// This conversion is lossy: a failure's fault is reported through the
    /// diagnostic sink before being dropped.
    ///
    /// ```
    /// use noerror::{Maybe, Outcome};
    ///
    /// assert_eq!(Outcome::success(1).to_maybe(), Maybe::Present(1));
    /// assert_eq!(Outcome::<i32>::failure("gone").to_maybe(), Maybe::Absent);
    /// ```
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Present(value),
            Self::Failure(fault) => {
                sink::report(DISCARDED, &fault);
                Maybe::Absent
            }
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Fault>,
{
    fn from(result: Result<T, E>) -> Self {
        result.map_or_else(|error| Self::Failure(error.into()), Self::Success)
    }
}

impl<T> From<Outcome<T>> for Result<T, Fault> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Failure(fault) => write!(f, "Failure({fault})"),
        }
    }
}
