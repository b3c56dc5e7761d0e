//! Failure payload carried by [`crate::Outcome::Failure`].

mod constructors;
mod types;

pub use constructors::Chain;
pub use types::{Fault, SharedCause};

#[cfg(test)]
mod tests;
