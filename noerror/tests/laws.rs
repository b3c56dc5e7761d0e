//! Behavioural laws shared by both container families.
//!
//! Covers construction, identity on the non-matching branch, panic
//! containment with exactly one sink report, silent handling of callbacks
//! that produce nothing, and the lossy conversion between families.

use std::cell::Cell;
use std::panic;

use noerror::{Fault, Maybe, Outcome};
use rstest::rstest;
use test_helpers::sink;

fn counting<T, U>(calls: &Cell<usize>, f: impl FnOnce(T) -> U) -> impl FnOnce(T) -> U {
    move |value| {
        calls.set(calls.get() + 1);
        f(value)
    }
}

#[rstest]
#[case::present(Some("v"), true)]
#[case::absent(None, false)]
fn construction_follows_the_candidate(#[case] candidate: Option<&str>, #[case] present: bool) {
    assert_eq!(Maybe::of(candidate).is_present(), present);
    assert_eq!(Outcome::from_nullable(candidate).is_present(), present);
}

#[test]
fn null_candidate_becomes_diagnostic_failure() {
    let outcome = Outcome::<u8>::from_nullable(None);
    assert!(outcome.fault().is_some_and(Fault::is_null));
}

#[rstest]
#[case(1, 2)]
#[case(41, 42)]
#[case(-1, 0)]
fn mapping_a_total_function_is_plain_mapping(#[case] input: i64, #[case] expected: i64) {
    let _capture = sink::capture();
    assert_eq!(Maybe::present(input).map_present(|x| x + 1), Maybe::Present(expected));
    assert_eq!(Outcome::success(input).map_success(|x| x + 1), Outcome::Success(expected));
}

#[test]
fn empty_branches_never_invoke_mappers() {
    let calls = Cell::new(0);
    let absent = Maybe::<i32>::Absent
        .map_present(counting(&calls, |x: i32| x + 1))
        .filter_map_present(counting(&calls, Some::<i32>))
        .flat_map_present(counting(&calls, Maybe::<i32>::present));
    assert_eq!(absent, Maybe::Absent);

    let failed = Outcome::<i32>::failure("boom")
        .map_success(counting(&calls, |x: i32| x + 1))
        .flat_map_success(counting(&calls, Outcome::<i32>::success));
    assert_eq!(failed, Outcome::failure("boom"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn recovery_branches_are_identity_on_values() {
    let calls = Cell::new(0);
    let present = Maybe::present("x")
        .map_absent(|| {
            calls.set(calls.get() + 1);
            "y"
        })
        .flat_map_absent(|| {
            calls.set(calls.get() + 1);
            Maybe::present("z")
        });
    assert_eq!(present, Maybe::Present("x"));

    let success = Outcome::success("x")
        .map_failure(counting(&calls, |_: Fault| "y"))
        .flat_map_failure(counting(&calls, |_: Fault| Outcome::success("z")));
    assert_eq!(success, Outcome::Success("x"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn panicking_mappers_are_contained_and_reported_once() {
    let capture = sink::capture();
    let maybe: Maybe<usize> = Maybe::present("hello").map_present(|_| panic!("maybe boom"));
    assert_eq!(maybe, Maybe::Absent);
    assert_eq!(capture.causes(), [Fault::panicked("maybe boom")]);

    capture.clear();
    let outcome: Outcome<usize> = Outcome::success("hello").map_success(|_| panic!("outcome boom"));
    assert_eq!(outcome, Outcome::Failure(Fault::panicked("outcome boom")));
    assert_eq!(capture.causes(), [Fault::panicked("outcome boom")]);
}

#[test]
fn typed_panic_payloads_reach_the_sink_as_their_cause() {
    let capture = sink::capture();
    let domain = Fault::new("domain cause");
    let raised = domain.clone();
    let maybe: Maybe<u8> = Maybe::present(1).map_present(move |_| panic::panic_any(raised));
    assert_eq!(maybe, Maybe::Absent);
    assert_eq!(capture.causes(), [domain.clone()]);

    capture.clear();
    let raised = domain.clone();
    let outcome: Outcome<u8> = Outcome::of(move || panic::panic_any(raised));
    assert_eq!(outcome, Outcome::Failure(domain.clone()));
    assert_eq!(capture.causes(), [domain]);
}

#[test]
fn producing_nothing_is_silent() {
    let capture = sink::capture();
    assert_eq!(Maybe::present(1).filter_map_present(|_| None::<u8>), Maybe::Absent);
    assert_eq!(Maybe::<u8>::Absent.flat_map_absent(|| Maybe::Absent), Maybe::Absent);
    assert_eq!(Maybe::present(1).flat_map_present(|_| Maybe::<u8>::Absent), Maybe::Absent);
    assert!(Outcome::success(1).filter_map_success(|_| None::<u8>).is_failure());
    assert!(Outcome::<u8>::of_nullable(|| None).is_failure());
    assert_eq!(capture.count(), 0);
}

#[test]
fn converting_between_families_round_trips_values() {
    let capture = sink::capture();
    assert_eq!(Outcome::success("v").to_maybe(), Maybe::Present("v"));
    assert_eq!(Maybe::present("v").to_outcome(), Outcome::Success("v"));
    assert_eq!(capture.count(), 0);

    let failure = Fault::with_source("lost", std::io::Error::other("cause"));
    assert_eq!(Outcome::<&str>::Failure(failure.clone()).to_maybe(), Maybe::Absent);
    assert_eq!(capture.causes(), [failure]);

    let empty = Maybe::<&str>::Absent.to_outcome();
    assert_eq!(empty, Outcome::Failure(Fault::Empty));
    assert!(empty.fault().is_some_and(|fault| fault.to_string().contains("empty")));
}

#[test]
fn scenario_present_string_length() {
    assert_eq!(Maybe::of(Some("hello")).map_present(str::len), Maybe::Present(5));
}

#[test]
fn scenario_absent_string_length() {
    assert_eq!(Maybe::<&str>::of(None).map_present(str::len), Maybe::Absent);
}

#[test]
fn scenario_failure_skips_success_mapper() {
    let failed = Outcome::<i32>::failure("boom");
    assert_eq!(failed.clone().map_success(|x| x + 1), failed);
}

#[test]
fn scenario_failure_recovers_to_success() {
    assert_eq!(Outcome::<i32>::failure("boom").map_failure(|_| 42), Outcome::Success(42));
}
