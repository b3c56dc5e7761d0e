//! Guarded combinators over [`Outcome`].

use super::Outcome;
use crate::Fault;
use crate::guard::{guarded, observe};

const MAP: &str = "panic in mapper of Outcome::map";
const MAP_SUCCESS: &str = "panic in mapper of Outcome::map_success";
const FILTER_MAP_SUCCESS: &str = "panic in mapper of Outcome::filter_map_success";
const FLAT_MAP_SUCCESS: &str = "panic in mapper of Outcome::flat_map_success";
const TRY_MAP_SUCCESS: &str = "panic in mapper of Outcome::try_map_success";
const MAP_FAILURE: &str = "panic in mapper of Outcome::map_failure";
const FILTER_MAP_FAILURE: &str = "panic in mapper of Outcome::filter_map_failure";
const FLAT_MAP_FAILURE: &str = "panic in mapper of Outcome::flat_map_failure";
const DO_ON_SUCCESS: &str = "panic in consumer of Outcome::do_on_success";
const DO_ON_FAILURE: &str = "panic in consumer of Outcome::do_on_failure";

impl<T> Outcome<T> {
    /// Transforms the whole container.
    ///
    /// `mapper` receives `self` and may move between tracks freely. A
    /// panicking mapper yields a [`Fault::Panicked`] failure.
    pub fn map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(Self) -> Outcome<U>,
    {
        guarded(MAP, || mapper(self)).unwrap_or_else(Outcome::Failure)
    }

    /// Maps the value of a success.
    ///
    /// A failure is forwarded with the same fault, retyped to `U`.
    pub fn map_success<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => {
                guarded(MAP_SUCCESS, || mapper(value)).map_or_else(Outcome::Failure, Outcome::Success)
            }
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Maps the value with a mapper that may produce nothing.
    ///
    /// `None` becomes a [`Fault::Null`] failure without a sink report.
    ///
    /// ```
    /// use noerror::Outcome;
    ///
    /// let first = Outcome::success(vec![3, 4]).filter_map_success(|v| v.first().copied());
    /// assert_eq!(first, Outcome::Success(3));
    /// let none = Outcome::success(Vec::<i32>::new()).filter_map_success(|v| v.first().copied());
    /// assert!(none.is_failure());
    /// ```
    pub fn filter_map_success<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Success(value) => match guarded(FILTER_MAP_SUCCESS, || mapper(value)) {
                Ok(candidate) => {
                    Outcome::from_nullable_in(candidate, "mapper of Outcome::filter_map_success")
                }
                Err(fault) => Outcome::Failure(fault),
            },
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Chains a container-producing mapper onto a success.
    ///
    /// The container returned by `mapper` is passed through as is.
    pub fn flat_map_success<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => {
                guarded(FLAT_MAP_SUCCESS, || mapper(value)).unwrap_or_else(Outcome::Failure)
            }
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Chains a fallible mapper returning a standard [`Result`].
    ///
    /// `Err` becomes a failure through `Into<Fault>`; it is a domain failure,
    /// not a diagnostic, so it is not reported.
    ///
    /// ```
    /// use noerror::{Fault, Outcome};
    ///
    /// let port = Outcome::success("8080").try_map_success(|s| s.parse::<u16>().map_err(Fault::from_error));
    /// assert_eq!(port, Outcome::Success(8080));
    /// ```
    pub fn try_map_success<U, E, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<Fault>,
    {
        match self {
            Self::Success(value) => match guarded(TRY_MAP_SUCCESS, || mapper(value)) {
                Ok(result) => result.into(),
                Err(fault) => Outcome::Failure(fault),
            },
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Recovers from a failure by producing a value from its fault.
    ///
    /// A success is returned unchanged and `mapper` never runs.
    pub fn map_failure<F>(self, mapper: F) -> Self
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(fault) => {
                guarded(MAP_FAILURE, || mapper(fault)).map_or_else(Self::Failure, Self::Success)
            }
        }
    }

    /// Recovers from a failure with a mapper that may produce nothing.
    ///
    /// `None` becomes a [`Fault::Null`] failure naming this combinator, and
    /// is not reported.
    ///
    /// ```
    /// use noerror::{Fault, Outcome};
    ///
    /// let fallback: Option<u16> = None;
    /// let unrecovered = Outcome::<u16>::failure("offline").filter_map_failure(|_| fallback);
    /// assert!(unrecovered.fault().is_some_and(Fault::is_null));
    /// ```
    pub fn filter_map_failure<F>(self, mapper: F) -> Self
    where
        F: FnOnce(Fault) -> Option<T>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(fault) => match guarded(FILTER_MAP_FAILURE, || mapper(fault)) {
                Ok(candidate) => {
                    Self::from_nullable_in(candidate, "mapper of Outcome::filter_map_failure")
                }
                Err(panicked) => Self::Failure(panicked),
            },
        }
    }

    /// Recovers from a failure with a container produced from its fault.
    ///
    /// ```
    /// use noerror::{Fault, Outcome};
    ///
    /// let retried = Outcome::<u8>::failure("timeout").flat_map_failure(|fault| match fault {
    ///     Fault::Message { .. } => Outcome::success(1),
    ///     other => Outcome::Failure(other),
    /// });
    /// assert_eq!(retried, Outcome::Success(1));
    /// ```
    pub fn flat_map_failure<F>(self, mapper: F) -> Self
    where
        F: FnOnce(Fault) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(fault) => {
                guarded(FLAT_MAP_FAILURE, || mapper(fault)).unwrap_or_else(Self::Failure)
            }
        }
    }

    /// Observes the value of a success.
    ///
    /// The receiver is returned unchanged whether or not `consumer` panics.
    pub fn do_on_success<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            observe(DO_ON_SUCCESS, || consumer(value));
        }
        self
    }

    /// Observes the fault of a failure.
    ///
    /// The receiver is returned unchanged whether or not `consumer` panics.
    pub fn do_on_failure<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&Fault),
    {
        if let Self::Failure(fault) = &self {
            observe(DO_ON_FAILURE, || consumer(fault));
        }
        self
    }
}
