//! Constructors and inspection helpers for [`Fault`].

use std::error::Error as StdError;
use std::sync::Arc;

use super::types::Fault;

impl Fault {
    /// Construct a caller-supplied fault from a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use noerror::Fault;
    /// let fault = Fault::new("boom");
    /// assert_eq!(fault.to_string(), "boom");
    /// ```
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
            source: None,
        }
    }

    /// Construct a caller-supplied fault with an underlying cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::error::Error;
    /// use noerror::Fault;
    ///
    /// let io = std::io::Error::other("disk full");
    /// let fault = Fault::with_source("flush failed", io);
    /// assert_eq!(fault.source().map(ToString::to_string).as_deref(), Some("disk full"));
    /// ```
    #[must_use]
    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Message {
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    /// Wrap an arbitrary error, reusing its rendered text as the message.
    #[must_use]
    pub fn from_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let message = error.to_string();
        Self::Message {
            message,
            source: Some(Arc::new(error)),
        }
    }

    /// Construct the fault recorded when a guarded callback panics.
    #[must_use]
    pub fn panicked(payload: impl Into<String>) -> Self {
        Self::Panicked {
            payload: payload.into(),
        }
    }

    /// Returns `true` when the fault came from a caught panic.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }

    /// Returns `true` when the fault records an empty optional container.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` when the fault records a missing value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null { .. })
    }

    /// Iterate over this fault followed by every error in its cause chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use noerror::Fault;
    ///
    /// let fault = Fault::with_source("outer", Fault::new("inner"));
    /// let rendered: Vec<String> = fault.chain().map(ToString::to_string).collect();
    /// assert_eq!(rendered, ["outer", "inner"]);
    /// ```
    #[must_use = "iterators should be consumed to inspect the cause chain"]
    pub fn chain(&self) -> Chain<'_> {
        let head: &(dyn StdError + 'static) = self;
        Chain { next: Some(head) }
    }
}

/// Iterator over a [`Fault`] and its causes, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Fault {
    fn from(error: Box<dyn StdError + Send + Sync>) -> Self {
        Self::Message {
            message: error.to_string(),
            source: Some(Arc::from(error)),
        }
    }
}
