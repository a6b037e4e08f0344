//! Basic usage of the outcome algebra
//!
//! Run with: cargo run --example basic_usage

use outcome_value::prelude::*;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    // Creating outcomes
    creating_outcomes();

    // Chaining combinators
    chaining();

    // Capturing panics
    capturing_panics();

    // The untrusted tag boundary
    tag_boundary();
}

fn creating_outcomes() {
    println!("1. Creating Outcomes:");

    let good: Outcome<i32, String> = Ok(42);
    let bad: Outcome<i32, String> = Err("disk on fire".to_string());

    println!("  good: {good}");
    println!("  bad: {bad}");
    println!("  good.is_ok(): {}", good.is_ok());
    println!("  bad.kind(): {}\n", bad.kind());

    // Diagnostic channel rendering
    good.print();
    bad.print();
}

fn chaining() {
    println!("2. Chaining:");

    let parsed: Outcome<i32, String> = Ok(21);
    let answer = parsed
        .map(|v| v * 2)
        .and_then(|v| {
            if v == 42 {
                Ok(v)
            } else {
                Err("not the answer".to_string())
            }
        })
        .unwrap_or(0);
    println!("  chained result: {answer}");

    let recovered: Outcome<i32, String> = Err("transient".to_string());
    let fallback = recovered.or_else(|e| Ok::<i32, String>(e.len() as i32));
    println!("  recovered: {fallback}\n");
}

fn capturing_panics() {
    println!("3. Capturing panics:");

    let safe = catch(|| "no panic here".len());
    println!("  safe: {safe}");

    let caught = catch(|| -> i32 { panic!("boom") });
    match caught {
        Ok(v) => println!("  unexpected success: {v}"),
        Err(p) => println!("  captured panic message: {:?}", p.message()),
    }
    println!();
}

fn tag_boundary() {
    println!("4. Untrusted tags:");

    match Outcome::tagged("ok", 7) {
        Result::Ok(o) => println!("  tagged 'ok' -> {o}"),
        Result::Err(e) => println!("  rejected: {e}"),
    }

    match Outcome::<i32, i32>::tagged("maybe", 7) {
        Result::Ok(o) => println!("  tagged 'maybe' -> {o}"),
        Result::Err(e) => println!("  rejected: {e} (code {})", e.code()),
    }
}
