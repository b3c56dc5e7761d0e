//! Extensions for lifting standard `Option` and `Result` values concisely.
//!
//! These helpers shorten `Maybe::of(x)` and `Outcome::from(r)` at the end of
//! method chains that start in ordinary std code.
//!
//! - Use [`IntoMaybe::into_maybe`] for any `Option<T>`.
//! - Use [`IntoMaybe::into_outcome_or`] when an empty option should become a
//!   specific failure rather than [`Fault::Null`].
//! - Use [`IntoOutcome::into_outcome`] for any `Result<T, E>` with
//!   `E: Into<Fault>`.
//!
//! # Examples
//!
//! ```
//! use noerror::{IntoMaybe, IntoOutcome, Maybe, Outcome};
//!
//! let first = [3, 4].first().copied().into_maybe();
//! assert_eq!(first, Maybe::Present(3));
//!
//! let parsed: Outcome<u16> = "8080".parse::<u16>().map_err(|e| e.to_string()).into_outcome();
//! assert_eq!(parsed, Outcome::Success(8080));
//! ```

use crate::{Fault, Maybe, Outcome};

/// Lifts an `Option<T>` into the crate's containers.
pub trait IntoMaybe<T> {
    /// Convert into a [`Maybe`], mapping `None` to `Absent`.
    fn into_maybe(self) -> Maybe<T>;

    /// Convert into an [`Outcome`], using `fault` when there is no value.
    fn into_outcome_or(self, fault: impl Into<Fault>) -> Outcome<T>;
}

impl<T> IntoMaybe<T> for Option<T> {
    fn into_maybe(self) -> Maybe<T> {
        Maybe::of(self)
    }

    fn into_outcome_or(self, fault: impl Into<Fault>) -> Outcome<T> {
        self.map_or_else(|| Outcome::Failure(fault.into()), Outcome::Success)
    }
}

/// Lifts a `Result<T, E>` into an [`Outcome`].
pub trait IntoOutcome<T> {
    /// Convert into an [`Outcome`], turning `Err` into a failure via
    /// `Into<Fault>`.
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: Into<Fault>,
{
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from(self)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{IntoMaybe, IntoOutcome};
    use crate::{Fault, Maybe, Outcome};

    #[rstest]
    #[case(Some(2), Maybe::Present(2))]
    #[case(None, Maybe::Absent)]
    fn options_lift_into_maybe(#[case] input: Option<u8>, #[case] expected: Maybe<u8>) {
        assert_eq!(input.into_maybe(), expected);
    }

    #[test]
    fn empty_option_uses_supplied_fault() {
        let outcome = None::<u8>.into_outcome_or("missing port");
        assert_eq!(outcome, Outcome::failure("missing port"));
        assert_eq!(Some(1).into_outcome_or(Fault::Empty), Outcome::Success(1));
    }

    #[test]
    fn results_lift_into_outcome() {
        let failed = Err::<u8, String>("bad".to_owned()).into_outcome();
        assert_eq!(failed, Outcome::failure("bad"));
        assert_eq!(Ok::<u8, Fault>(3).into_outcome(), Outcome::Success(3));
    }
}
