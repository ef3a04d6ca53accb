//! Shared test helpers for `rolo_core` integration tests.

#![allow(unreachable_pub)]

use rolo_core::error::ParseError;
use rolo_core::fields::{Address, Email, InterviewDate, Name, Phone, Tag};
use rolo_core::syntax::tokenizer::ArgValue;
use std::collections::BTreeSet;

// ─── Expected-value constructors ─────────────────────────────────────────────
// Validators are exercised directly in fields.rs; here they just build
// known-good expected values.

#[allow(dead_code)]
pub fn name(raw: &str) -> Name {
    Name::parse(raw).expect("valid name fixture")
}

#[allow(dead_code)]
pub fn phone(raw: &str) -> Phone {
    Phone::parse(raw).expect("valid phone fixture")
}

#[allow(dead_code)]
pub fn email(raw: &str) -> Email {
    Email::parse(raw).expect("valid email fixture")
}

#[allow(dead_code)]
pub fn address(raw: &str) -> Address {
    Address::parse(raw).expect("valid address fixture")
}

#[allow(dead_code)]
pub fn date(raw: &str) -> InterviewDate {
    InterviewDate::parse(raw).expect("valid date fixture")
}

#[allow(dead_code)]
pub fn tag_set(raws: &[&str]) -> BTreeSet<Tag> {
    raws.iter()
        .map(|raw| Tag::parse(raw).expect("valid tag fixture"))
        .collect()
}

// ─── Assertion helpers ───────────────────────────────────────────────────────

/// Assert a parse failed with the given diagnostic code.
#[allow(dead_code)]
pub fn assert_code<T: std::fmt::Debug>(result: Result<T, ParseError>, code: &str) -> ParseError {
    match result {
        Ok(value) => panic!("expected failure with code {code}, got success: {value:?}"),
        Err(err) => {
            assert_eq!(err.code(), code, "unexpected code, message: {}", err.message());
            err
        }
    }
}

/// Collect the captured texts of a value slice.
#[allow(dead_code)]
pub fn texts(values: &[ArgValue]) -> Vec<&str> {
    values.iter().map(|v| v.text.as_str()).collect()
}

/// Assert that a value's span slices exactly its text out of the raw input.
#[allow(dead_code)]
pub fn assert_span_matches(input: &str, value: &ArgValue) {
    assert_eq!(
        &input[value.span.start..value.span.end],
        value.text,
        "span does not slice the captured text out of {input:?}"
    );
}
