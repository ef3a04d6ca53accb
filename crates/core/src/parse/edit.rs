//! Parser for the edit command: a target index followed by any combination of
//! prefixed field updates.

use super::{parse_index_preamble, parse_tags_for_edit, verify_no_duplicates};
use crate::descriptor::EditPersonDescriptor;
use crate::error::ParseError;
use crate::fields::{Address, Email, Index, InterviewDate, Name, Phone};
use crate::syntax::prefix::{self, Prefix};
use crate::syntax::tokenizer::tokenize;
use rolo_diagnostics::codes;
use serde::Serialize;

/// Canonical usage line for the edit command.
pub const USAGE: &str = "edit INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [d/DATE] [t/TAG]...";

/// Message for a well-formed edit that changes nothing.
pub const MESSAGE_NOT_EDITED: &str = "at least one field to edit must be provided";

const RECOGNIZED: &[Prefix] = &[
    prefix::NAME,
    prefix::PHONE,
    prefix::EMAIL,
    prefix::ADDRESS,
    prefix::DATE,
    prefix::TAG,
];

/// Free-text fields may occur at most once; tags are repeatable.
const SINGLETON: &[Prefix] = &[
    prefix::NAME,
    prefix::PHONE,
    prefix::EMAIL,
    prefix::ADDRESS,
    prefix::DATE,
];

/// A parsed edit command: which record to change and the validated edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditRequest {
    /// The 1-based target record index.
    pub index: Index,
    /// The fields to change, frozen at parse time.
    pub edits: EditPersonDescriptor,
}

/// Parse the raw argument tail of an edit command.
pub fn parse(input: &str) -> Result<EditRequest, ParseError> {
    let map = tokenize(input, RECOGNIZED);
    verify_no_duplicates(&map, SINGLETON)?;
    let index = parse_index_preamble(&map, USAGE)?;

    let mut edits = EditPersonDescriptor::default();
    if let Some(v) = map.value_of(prefix::NAME) {
        edits = edits.with_name(Name::parse(&v.text).map_err(|e| e.with_span(v.span))?);
    }
    if let Some(v) = map.value_of(prefix::PHONE) {
        edits = edits.with_phone(Phone::parse(&v.text).map_err(|e| e.with_span(v.span))?);
    }
    if let Some(v) = map.value_of(prefix::EMAIL) {
        edits = edits.with_email(Email::parse(&v.text).map_err(|e| e.with_span(v.span))?);
    }
    if let Some(v) = map.value_of(prefix::ADDRESS) {
        edits = edits.with_address(Address::parse(&v.text).map_err(|e| e.with_span(v.span))?);
    }
    if let Some(v) = map.value_of(prefix::DATE) {
        edits =
            edits.with_interview_date(InterviewDate::parse(&v.text).map_err(|e| e.with_span(v.span))?);
    }
    if let Some(tags) = parse_tags_for_edit(&map)? {
        edits = edits.with_tags(tags);
    }

    if !edits.edits_anything() {
        return Err(ParseError::new(codes::NOTHING_EDITED, MESSAGE_NOT_EDITED));
    }
    Ok(EditRequest { index, edits })
}
