//! Integration tests for the combinator algebra
//!
//! Exercises the short-circuit laws end to end through the public surface.

use outcome_value::{Err, Ok, Outcome, OutcomeError, OutcomeKind};
use pretty_assertions::assert_eq;

type Sample = Outcome<i32, String>;

fn boom() -> Sample {
    Err("boom".to_string())
}

#[test]
fn free_constructors_build_the_variants() {
    let good: Sample = Ok(3);
    let bad = boom();

    assert!(good.is_ok());
    assert!(!good.is_err());
    assert!(bad.is_err());
    assert_eq!(good.kind(), OutcomeKind::Ok);
    assert_eq!(bad.kind(), OutcomeKind::Err);
}

#[test]
fn failures_short_circuit_through_the_and_family() {
    let double = |v: i32| -> Sample { Ok(v * 2) };

    // A failure rides through and/and_then/map untouched.
    assert_eq!(boom().and::<i32>(Ok(1)), Err("boom".to_string()));
    assert_eq!(boom().and_then(double), boom());
    assert_eq!(boom().map(|v| v + 1), boom());

    // A success feeds the chain.
    let good: Sample = Ok(4);
    assert_eq!(good.and(Ok::<_, String>(9)), Ok(9));
    assert_eq!(Ok::<_, String>(4).and_then(double), Ok(8));
    assert_eq!(Ok::<_, String>(4).map(|v| v + 1), Ok(5));
}

#[test]
fn successes_short_circuit_through_the_or_family() {
    let recover = |e: String| -> Sample { Ok(e.len() as i32) };

    let good: Sample = Ok(1);
    assert_eq!(good.clone().or(boom()), good);
    assert_eq!(good.clone().or_else(recover), good);
    assert_eq!(good.map_err(|e| format!("{e}!")), Ok(1));

    assert_eq!(boom().or(Ok(5)), Ok::<i32, String>(5));
    assert_eq!(boom().or_else(recover), Ok(4));
    assert_eq!(boom().map_err(|e| format!("{e}!")), Err("boom!".to_string()));
}

#[test]
fn ok_dominates_in_or() {
    assert_eq!(boom().or(Ok::<i32, String>(5)).unwrap(), 5);
    assert_eq!(Ok::<i32, String>(1).or(boom()).unwrap(), 1);
}

#[test]
fn map_composes_with_unwrap() {
    let f = |v: i32| v * 10;
    assert_eq!(Ok::<i32, String>(3).map(f).unwrap(), f(3));
    assert_eq!(boom().map(f).unwrap_err(), "boom");
}

#[test]
fn defaulting_family_picks_the_right_branch() {
    assert_eq!(Ok::<i32, String>(2).unwrap_or(9), 2);
    assert_eq!(boom().unwrap_or(9), 9);

    assert_eq!(Ok::<i32, String>(2).unwrap_or_else(|e| e.len() as i32), 2);
    assert_eq!(boom().unwrap_or_else(|e| e.len() as i32), 4);

    // map_or never consults the error payload; map_or_else does.
    assert_eq!(boom().map_or(-1, |v| v), -1);
    assert_eq!(boom().map_or_else(|e| e.len() as i32, |v| v), 4);
}

#[test]
fn equality_is_variant_plus_payload() {
    let a: Outcome<i32, i32> = Outcome::Ok(1);
    assert_eq!(a, Outcome::Ok(1));
    assert_ne!(a, Outcome::Ok(2));
    assert_ne!(a, Outcome::Err(1));
}

#[test]
fn contains_uses_payload_equality() {
    assert!(Ok::<i32, String>(7).contains(&7));
    assert!(!Ok::<i32, String>(7).contains(&8));
    assert!(boom().contains_err(&"boom".to_string()));
    assert!(!boom().contains(&7));
}

#[test]
fn predicates_with_tests() {
    assert!(Ok::<i32, String>(10).is_ok_and(|v| v > 5));
    assert!(!Ok::<i32, String>(1).is_ok_and(|v| v > 5));
    assert!(boom().is_err_and(|e| e == "boom"));
    assert!(!Ok::<i32, String>(1).is_err_and(|_| true));
}

#[test]
fn tagged_construction_guards_the_boundary() {
    assert_eq!(Outcome::tagged("ok", 1).unwrap(), Outcome::<i32, i32>::Ok(1));
    assert_eq!(
        Outcome::tagged("Err", 2).unwrap(),
        Outcome::<i32, i32>::Err(2)
    );

    let rejected = Outcome::<i32, i32>::tagged("maybe", 1);
    assert_eq!(
        rejected.unwrap_err(),
        OutcomeError::invalid_kind("maybe")
    );
}

#[test]
fn std_result_bridge_is_lossless() {
    let parsed: Outcome<i32, std::num::ParseIntError> = "21".parse::<i32>().into();
    assert_eq!(parsed.map(|v| v * 2).unwrap(), 42);

    let back: Result<i32, String> = Ok::<i32, String>(3).into_result();
    assert_eq!(back, Result::Ok(3));
}

#[test]
fn display_renders_both_variants() {
    assert_eq!(Ok::<i32, String>(1).to_string(), "Ok(1)");
    assert_eq!(boom().to_string(), "Err(\"boom\")");
}
