//! Unit tests for fault rendering, equality and cause chains.

use rstest::rstest;
use std::error::Error as StdError;

use super::Fault;

#[rstest]
#[case::empty(Fault::Empty, "Maybe is empty")]
#[case::null(Fault::Null { context: "value" }, "value is null")]
#[case::panicked(Fault::panicked("boom"), "callback panicked: boom")]
#[case::message(Fault::new("disk full"), "disk full")]
fn renders_each_variant(#[case] fault: Fault, #[case] expected: &str) {
    assert_eq!(fault.to_string(), expected);
}

#[rstest]
#[case(Fault::new("boom"), Fault::new("boom"))]
#[case(Fault::panicked("x"), Fault::panicked("x"))]
#[case(Fault::Null { context: "value" }, Fault::Null { context: "value" })]
#[case(
    Fault::with_source("outer", Fault::new("inner")),
    Fault::with_source("outer", Fault::new("inner"))
)]
fn equal_faults(#[case] lhs: Fault, #[case] rhs: Fault) {
    assert_eq!(lhs, rhs);
}

#[rstest]
#[case(Fault::new("boom"), Fault::new("bang"))]
#[case(Fault::new("boom"), Fault::panicked("boom"))]
#[case(Fault::Empty, Fault::Null { context: "value" })]
#[case(Fault::new("outer"), Fault::with_source("outer", Fault::new("inner")))]
fn unequal_faults(#[case] lhs: Fault, #[case] rhs: Fault) {
    assert_ne!(lhs, rhs);
}

#[test]
fn clone_shares_the_cause() {
    let fault = Fault::with_source("outer", std::io::Error::other("inner"));
    let copy = fault.clone();
    assert_eq!(fault, copy);
    let rendered = copy.source().map(ToString::to_string);
    assert_eq!(rendered.as_deref(), Some("inner"));
}

#[test]
fn chain_walks_every_cause() {
    let fault = Fault::with_source(
        "load failed",
        Fault::with_source("read failed", std::io::Error::other("eof")),
    );
    let rendered: Vec<String> = fault.chain().map(ToString::to_string).collect();
    assert_eq!(rendered, ["load failed", "read failed", "eof"]);
}

#[test]
fn from_error_keeps_message_and_cause() {
    let fault = Fault::from_error(std::io::Error::other("denied"));
    assert_eq!(fault.to_string(), "denied");
    assert!(fault.source().is_some());
}

#[test]
fn boxed_errors_convert() {
    let boxed: Box<dyn StdError + Send + Sync> = "bad input".into();
    let fault = Fault::from(boxed);
    assert_eq!(fault.to_string(), "bad input");
}

#[test]
fn predicates_match_variants() {
    assert!(Fault::Empty.is_empty());
    assert!(Fault::Null { context: "value" }.is_null());
    assert!(Fault::panicked("boom").is_panic());
    assert!(!Fault::new("boom").is_panic());
}
