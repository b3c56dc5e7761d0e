//! Optional container: a value, or nothing.
//!
//! [`Maybe`] mirrors [`Option`] but every combinator that runs caller code
//! does so inside a panic guard. A callback that panics turns the result
//! into [`Maybe::Absent`] and the panic is reported through
//! [`crate::sink`]. A callback that simply produces nothing (`None`, or an
//! `Absent` container) also yields `Absent`, silently.

use std::fmt;

use crate::{Fault, Outcome};

mod combinators;

/// A value of type `T`, or nothing.
///
/// `Absent` is a zero-sized variant, so every empty container is the same
/// value no matter where it was produced.
///
/// # Examples
///
/// ```
/// use noerror::Maybe;
///
/// let name = Maybe::of(Some("hello"));
/// assert_eq!(name.map_present(str::len), Maybe::Present(5));
///
/// let missing: Maybe<&str> = Maybe::of(None);
/// assert_eq!(missing.map_present(str::len), Maybe::Absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[must_use = "combinators return a new container"]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value.
    #[default]
    Absent,
}

impl<T> Maybe<T> {
    /// Wraps `candidate`, mapping `None` to [`Maybe::Absent`].
    pub fn of(candidate: Option<T>) -> Self {
        candidate.map_or(Self::Absent, Self::Present)
    }

    /// Wraps a value that is known to exist.
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// The empty container.
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Returns `true` for [`Maybe::Present`].
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` for [`Maybe::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the wrapped value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Unwraps into a standard [`Option`].
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns the wrapped value or `default`.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the wrapped value or computes a fallback.
    ///
    /// The fallback is not guarded: it is the caller's exit from the
    /// container, so a panic here behaves like any other panic.
    #[must_use]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Converts into an [`Outcome`].
    ///
    /// `Present(v)` becomes `Success(v)`; `Absent` becomes a failure
    /// carrying [`Fault::Empty`].
    ///
    /// ```
    /// use noerror::{Fault, Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::present(3).to_outcome(), Outcome::Success(3));
    /// assert_eq!(Maybe::<i32>::Absent.to_outcome(), Outcome::Failure(Fault::Empty));
    /// ```
    pub fn to_outcome(self) -> Outcome<T> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(Fault::Empty),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(candidate: Option<T>) -> Self {
        Self::of(candidate)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(f, "Present({value})"),
            Self::Absent => f.write_str("Absent"),
        }
    }
}
