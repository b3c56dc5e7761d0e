//! Test helpers shared across crates.
//!
//! This crate currently provides diagnostic sink guards.

pub mod sink;
