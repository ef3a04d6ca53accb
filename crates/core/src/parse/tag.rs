//! Parser for the tag-only edit command.
//!
//! Recognizes nothing but the tag prefix and otherwise reuses the general
//! edit semantics: the same descriptor, the same clear-all sentinel, the same
//! nothing-to-edit rule.

use super::edit::{self, EditRequest};
use super::{parse_index_preamble, parse_tags_for_edit};
use crate::descriptor::EditPersonDescriptor;
use crate::error::ParseError;
use crate::syntax::prefix::{self, Prefix};
use crate::syntax::tokenizer::tokenize;
use rolo_diagnostics::codes;

/// Canonical usage line for the tag command.
pub const USAGE: &str = "tag INDEX t/TAG...  (a single bare t/ clears all tags)";

const RECOGNIZED: &[Prefix] = &[prefix::TAG];

/// Parse the raw argument tail of a tag command.
pub fn parse(input: &str) -> Result<EditRequest, ParseError> {
    let map = tokenize(input, RECOGNIZED);
    let index = parse_index_preamble(&map, USAGE)?;

    let mut edits = EditPersonDescriptor::default();
    if let Some(tags) = parse_tags_for_edit(&map)? {
        edits = edits.with_tags(tags);
    }

    if !edits.edits_anything() {
        return Err(ParseError::new(
            codes::NOTHING_EDITED,
            edit::MESSAGE_NOT_EDITED,
        ));
    }
    Ok(EditRequest { index, edits })
}
