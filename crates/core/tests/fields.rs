//! Tests for the field validators.
//!
//! Each validator is a pure function from raw text to a validated value or a
//! coded failure; these tests pin the constraint rules, the failure codes,
//! and validation idempotence.

mod common;

use common::assert_code;
use rolo_core::fields::{
    Address, Email, Index, InterviewDate, Name, Phone, Tag, parse_tags,
};
use rolo_diagnostics::codes;

// ─── Index ───────────────────────────────────────────────────────────────────

#[test]
fn index_accepts_positive_integers() {
    assert_eq!(Index::parse("1").unwrap().one_based(), 1);
    assert_eq!(Index::parse("42").unwrap().one_based(), 42);
    assert_eq!(Index::parse("  7  ").unwrap().one_based(), 7);
    assert_eq!(Index::parse("3").unwrap().zero_based(), 2);
}

#[test]
fn index_rejects_non_numbers() {
    for raw in ["", "   ", "abc", "-5", "+3", "1.5", "1 trailing words", "1n"] {
        let err = assert_code(Index::parse(raw), codes::INVALID_INDEX);
        assert_eq!(err.message(), Index::MESSAGE);
    }
}

#[test]
fn index_rejects_zero() {
    assert_code(Index::parse("0"), codes::INVALID_INDEX);
}

#[test]
fn index_overflow_is_a_distinct_failure() {
    let err = assert_code(
        Index::parse("100000000000000000000000000000"),
        codes::INDEX_OUT_OF_RANGE,
    );
    assert_eq!(err.message(), Index::MESSAGE_OUT_OF_RANGE);
}

// ─── Name ────────────────────────────────────────────────────────────────────

#[test]
fn name_accepts_alphanumerics_and_spaces() {
    for raw in ["Amy Bee", "Capital Tan", "david roger jackson ray jr 2nd", "X"] {
        assert_eq!(Name::parse(raw).unwrap().as_str(), raw);
    }
}

#[test]
fn name_rejects_symbols_and_blanks() {
    for raw in ["", " ", "James&", "^", " leading space", "peter*"] {
        let err = assert_code(Name::parse(raw), codes::INVALID_NAME);
        assert_eq!(err.message(), Name::MESSAGE);
    }
}

// ─── Phone ───────────────────────────────────────────────────────────────────

#[test]
fn phone_accepts_digit_runs() {
    for raw in ["911", "91234567", "1234567890123456"] {
        assert_eq!(Phone::parse(raw).unwrap().as_str(), raw);
    }
}

#[test]
fn phone_rejects_bad_shapes() {
    for raw in ["", "91", "phone", "9011p041", "9312 1534", "12345678901234567"] {
        assert_code(Phone::parse(raw), codes::INVALID_PHONE);
    }
}

// ─── Email ───────────────────────────────────────────────────────────────────

#[test]
fn email_accepts_local_at_domain() {
    for raw in [
        "amy@example.com",
        "PeterJack_1190@example.com",
        "a.b+c-d@sub.example.co",
        "test@localhost12",
    ] {
        assert_eq!(Email::parse(raw).unwrap().as_str(), raw);
    }
}

#[test]
fn email_rejects_bad_shapes() {
    for raw in [
        "",
        "bob!yahoo",
        "@example.com",
        "peterjack@",
        "peterjack@x",
        "peter jack@example.com",
        "peterjack@exam ple.com",
    ] {
        assert_code(Email::parse(raw), codes::INVALID_EMAIL);
    }
}

// ─── Address ─────────────────────────────────────────────────────────────────

#[test]
fn address_accepts_any_non_blank_text() {
    for raw in ["Blk 456, Den Road, #01-355", "-", "a"] {
        assert_eq!(Address::parse(raw).unwrap().as_str(), raw);
    }
}

#[test]
fn address_rejects_blanks() {
    for raw in ["", "   "] {
        assert_code(Address::parse(raw), codes::INVALID_ADDRESS);
    }
}

// ─── Tag ─────────────────────────────────────────────────────────────────────

#[test]
fn tag_accepts_alphanumeric_tokens() {
    for raw in ["friend", "applicant2", "B"] {
        assert_eq!(Tag::parse(raw).unwrap().as_str(), raw);
    }
}

#[test]
fn tag_rejects_non_tokens() {
    for raw in ["", "hubby*", "two words", "t/"] {
        assert_code(Tag::parse(raw), codes::INVALID_TAG);
    }
}

#[test]
fn parse_tags_collapses_duplicates() {
    let tags = parse_tags(["friend", "colleague", "friend"]).unwrap();
    assert_eq!(tags.len(), 2);
}

#[test]
fn parse_tags_fails_on_first_invalid_member() {
    let err = assert_code(parse_tags(["friend", "bad tag", "also bad!"]), codes::INVALID_TAG);
    assert_eq!(err.context_get("value"), Some("bad tag"));
}

#[test]
fn parse_tags_of_nothing_is_the_empty_set() {
    assert!(parse_tags([]).unwrap().is_empty());
}

// ─── InterviewDate ───────────────────────────────────────────────────────────

#[test]
fn date_accepts_real_calendar_dates() {
    let d = InterviewDate::parse("2026-02-28").unwrap();
    assert_eq!(d.to_string(), "2026-02-28");
    // leap day
    assert!(InterviewDate::parse("2024-02-29").is_ok());
}

#[test]
fn date_rejects_impossible_and_misshapen_dates() {
    for raw in ["", "2026-02-30", "2025-13-01", "28/02/2026", "tomorrow"] {
        let err = assert_code(InterviewDate::parse(raw), codes::INVALID_DATE);
        assert_eq!(err.message(), InterviewDate::MESSAGE);
    }
}

// ─── Shared properties ───────────────────────────────────────────────────────

#[test]
fn validation_is_idempotent() {
    let name = Name::parse("Amy Bee").unwrap();
    assert_eq!(Name::parse(name.as_str()).unwrap(), name);
    let phone = Phone::parse("91234567").unwrap();
    assert_eq!(Phone::parse(phone.as_str()).unwrap(), phone);
    let email = Email::parse("amy@example.com").unwrap();
    assert_eq!(Email::parse(email.as_str()).unwrap(), email);
    let date = InterviewDate::parse("2026-01-15").unwrap();
    assert_eq!(InterviewDate::parse(&date.to_string()).unwrap(), date);
}

#[test]
fn constraint_errors_carry_the_offending_value() {
    let err = assert_code(Phone::parse("12ab"), codes::INVALID_PHONE);
    assert_eq!(err.context_get("value"), Some("12ab"));
}

#[test]
fn error_display_is_the_user_facing_message() {
    let err = Phone::parse("12ab").unwrap_err();
    assert_eq!(err.to_string(), Phone::MESSAGE);
}
