//! Parser for the add command: every mandatory field present, no positional
//! preamble.

use super::{invalid_format, parse_tag_values, verify_no_duplicates};
use crate::descriptor::Person;
use crate::error::{ParseError, ctx};
use crate::fields::{Address, Email, InterviewDate, Name, Phone};
use crate::syntax::prefix::{self, Prefix};
use crate::syntax::tokenizer::{ArgValue, ArgumentMultimap, tokenize};
use rolo_diagnostics::codes;
use serde::Serialize;

/// Canonical usage line for the add command.
pub const USAGE: &str = "add n/NAME p/PHONE e/EMAIL a/ADDRESS [d/DATE] [t/TAG]...";

const RECOGNIZED: &[Prefix] = &[
    prefix::NAME,
    prefix::PHONE,
    prefix::EMAIL,
    prefix::ADDRESS,
    prefix::DATE,
    prefix::TAG,
];

const SINGLETON: &[Prefix] = &[
    prefix::NAME,
    prefix::PHONE,
    prefix::EMAIL,
    prefix::ADDRESS,
    prefix::DATE,
];

const MANDATORY: &[Prefix] = &[prefix::NAME, prefix::PHONE, prefix::EMAIL, prefix::ADDRESS];

/// A parsed add command: the fully-specified new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddRequest {
    /// The validated new contact record.
    pub person: Person,
}

/// Build the missing-mandatory-field failure, listing every missing prefix.
fn missing_fields_error(missing: &[Prefix]) -> ParseError {
    let listed = missing
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    ParseError::new(
        codes::MISSING_FIELD,
        format!("missing mandatory field(s) {listed}, expected: {USAGE}"),
    )
    .with_context(ctx!("prefixes" => listed))
}

/// Fetch a mandatory prefix's value. Presence was already batch-checked, so
/// this only exists to avoid unwrapping.
fn require(map: &ArgumentMultimap, p: Prefix) -> Result<&ArgValue, ParseError> {
    map.value_of(p).ok_or_else(|| missing_fields_error(&[p]))
}

/// Parse the raw argument tail of an add command.
///
/// There are no optional-absence semantics for the mandatory fields: all
/// missing mandatory prefixes are reported together, before any value is
/// validated. Tags are repeatable with no clear-all sentinel — an empty tag
/// value fails the tag constraint like any other invalid tag.
pub fn parse(input: &str) -> Result<AddRequest, ParseError> {
    let map = tokenize(input, RECOGNIZED);
    verify_no_duplicates(&map, SINGLETON)?;

    let missing: Vec<Prefix> = MANDATORY
        .iter()
        .copied()
        .filter(|&p| map.all_values(p).is_empty())
        .collect();
    if !missing.is_empty() {
        return Err(missing_fields_error(&missing));
    }
    if !map.preamble().is_empty() {
        return Err(invalid_format(USAGE, map.preamble().span));
    }

    let v = require(&map, prefix::NAME)?;
    let name = Name::parse(&v.text).map_err(|e| e.with_span(v.span))?;
    let v = require(&map, prefix::PHONE)?;
    let phone = Phone::parse(&v.text).map_err(|e| e.with_span(v.span))?;
    let v = require(&map, prefix::EMAIL)?;
    let email = Email::parse(&v.text).map_err(|e| e.with_span(v.span))?;
    let v = require(&map, prefix::ADDRESS)?;
    let address = Address::parse(&v.text).map_err(|e| e.with_span(v.span))?;

    let interview_date = match map.value_of(prefix::DATE) {
        Some(v) => Some(InterviewDate::parse(&v.text).map_err(|e| e.with_span(v.span))?),
        None => None,
    };
    let tags = parse_tag_values(&map)?;

    Ok(AddRequest {
        person: Person::new(name, phone, email, address, tags, interview_date),
    })
}
