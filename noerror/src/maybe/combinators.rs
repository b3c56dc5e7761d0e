//! Guarded combinators over [`Maybe`].

use super::Maybe;
use crate::guard::{guarded, observe};

const MAP: &str = "panic in mapper of Maybe::map";
const MAP_PRESENT: &str = "panic in mapper of Maybe::map_present";
const FILTER_MAP_PRESENT: &str = "panic in mapper of Maybe::filter_map_present";
const FLAT_MAP_PRESENT: &str = "panic in mapper of Maybe::flat_map_present";
const MAP_ABSENT: &str = "panic in supplier of Maybe::map_absent";
const FILTER_MAP_ABSENT: &str = "panic in supplier of Maybe::filter_map_absent";
const FLAT_MAP_ABSENT: &str = "panic in supplier of Maybe::flat_map_absent";
const DO_ON_PRESENT: &str = "panic in consumer of Maybe::do_on_present";
const DO_ON_ABSENT: &str = "panic in hook of Maybe::do_on_absent";

impl<T> Maybe<T> {
    /// Transforms the whole container.
    ///
    /// Unlike [`Option::map`], `mapper` receives `self`, not the payload, so
    /// it can inspect either shape. A panicking mapper yields `Absent`.
    ///
    /// ```
    /// use noerror::Maybe;
    ///
    /// let described = Maybe::<u8>::Absent.map(|m| Maybe::present(m.is_present()));
    /// assert_eq!(described, Maybe::Present(false));
    /// ```
    pub fn map<U, F>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(Self) -> Maybe<U>,
    {
        guarded(MAP, || mapper(self)).unwrap_or(Maybe::Absent)
    }

    /// Maps the payload of a `Present` container.
    ///
    /// `Absent` stays `Absent` without invoking `mapper`. A panicking mapper
    /// is reported and yields `Absent`.
    pub fn map_present<U, F>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => {
                guarded(MAP_PRESENT, || mapper(value)).map_or(Maybe::Absent, Maybe::Present)
            }
            Self::Absent => Maybe::Absent,
        }
    }

    /// Maps the payload with a mapper that may produce nothing.
    ///
    /// `None` from `mapper` yields `Absent` and is not reported; a panic is.
    ///
    /// ```
    /// use noerror::Maybe;
    ///
    /// let parsed = Maybe::present("12").filter_map_present(|s| s.parse::<u8>().ok());
    /// assert_eq!(parsed, Maybe::Present(12));
    /// let rejected = Maybe::present("x").filter_map_present(|s| s.parse::<u8>().ok());
    /// assert_eq!(rejected, Maybe::Absent);
    /// ```
    pub fn filter_map_present<U, F>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Present(value) => guarded(FILTER_MAP_PRESENT, || mapper(value))
                .ok()
                .flatten()
                .into(),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Chains a container-producing mapper onto a `Present` payload.
    ///
    /// The container returned by `mapper` is passed through as is.
    pub fn flat_map_present<U, F>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => {
                guarded(FLAT_MAP_PRESENT, || mapper(value)).unwrap_or(Maybe::Absent)
            }
            Self::Absent => Maybe::Absent,
        }
    }

    /// Supplies a value when the container is `Absent`.
    ///
    /// A `Present` receiver is returned unchanged and `supplier` never runs.
    pub fn map_absent<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => guarded(MAP_ABSENT, supplier).map_or(Self::Absent, Self::Present),
        }
    }

    /// Supplies a value that may not exist when the container is `Absent`.
    ///
    /// `None` from `supplier` keeps the container `Absent` without a report.
    ///
    /// ```
    /// use noerror::Maybe;
    ///
    /// let cached: Option<u8> = None;
    /// assert_eq!(Maybe::Absent.filter_map_absent(|| cached), Maybe::Absent);
    /// assert_eq!(Maybe::Absent.filter_map_absent(|| Some(7)), Maybe::Present(7));
    /// ```
    pub fn filter_map_absent<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => guarded(FILTER_MAP_ABSENT, supplier).ok().flatten().into(),
        }
    }

    /// Supplies a whole container when the receiver is `Absent`.
    ///
    /// A supplier returning `Absent` means "nothing to offer" and is not
    /// reported.
    ///
    /// ```
    /// use noerror::Maybe;
    ///
    /// let fallback = Maybe::<&str>::Absent.flat_map_absent(|| Maybe::present("default"));
    /// assert_eq!(fallback, Maybe::Present("default"));
    /// ```
    pub fn flat_map_absent<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => guarded(FLAT_MAP_ABSENT, supplier).unwrap_or(Self::Absent),
        }
    }

    /// Observes the payload of a `Present` container.
    ///
    /// The receiver is returned unchanged whether or not `consumer` panics.
    pub fn do_on_present<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            observe(DO_ON_PRESENT, || consumer(value));
        }
        self
    }

    /// Runs `hook` when the container is `Absent`.
    ///
    /// The receiver is returned unchanged whether or not `hook` panics.
    pub fn do_on_absent<F>(self, hook: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            observe(DO_ON_ABSENT, hook);
        }
        self
    }
}
