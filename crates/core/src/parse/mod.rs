//! Per-command parsers and the parsing steps they share.
//!
//! Each command module declares which prefixes it recognizes, which of those
//! must be singletons, and exports a single `parse` entry point plus its
//! canonical usage line. Error precedence within one parse call: duplicate
//! singleton prefixes, then preamble/index validation, then per-field
//! validation in declared prefix order, then the nothing-to-edit check.
//! Parsing short-circuits on the first failure.

/// Parser for the add command.
pub mod add;
/// Parser for the delete command.
pub mod delete;
/// Parser for the edit command.
pub mod edit;
/// Parser for the tag-only edit command.
pub mod tag;

use crate::error::{ParseError, ctx};
use crate::fields::{Index, Tag, parse_tags};
use crate::syntax::prefix::{self, Prefix};
use crate::syntax::tokenizer::ArgumentMultimap;
use rolo_diagnostics::{Span, codes};
use std::collections::BTreeSet;

/// Fail if any of the given single-valued prefixes occurs more than once,
/// naming every offender together in one report.
///
/// Runs before field validation, so a duplicate is reported even when each
/// individual value would validate.
pub(crate) fn verify_no_duplicates(
    map: &ArgumentMultimap,
    singletons: &[Prefix],
) -> Result<(), ParseError> {
    let duplicated: Vec<Prefix> = singletons
        .iter()
        .copied()
        .filter(|&p| map.occurrences(p) > 1)
        .collect();
    if duplicated.is_empty() {
        Ok(())
    } else {
        Err(duplicate_prefix_error(map, &duplicated))
    }
}

/// Build the duplicate-prefix failure for the given offenders, which are
/// listed in declaration order both in the message and in the context. The
/// span points at the second occurrence of the first offender.
pub(crate) fn duplicate_prefix_error(
    map: &ArgumentMultimap,
    duplicated: &[Prefix],
) -> ParseError {
    let listed = duplicated
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let err = ParseError::new(
        codes::DUPLICATE_PREFIX,
        format!("multiple values supplied for single-valued field(s): {listed}"),
    )
    .with_context(ctx!("prefixes" => listed));
    match map.all_values(duplicated[0]).get(1) {
        Some(second) => err.with_span(second.span),
        None => err,
    }
}

/// Format error carrying the command's usage line.
pub(crate) fn invalid_format(usage: &str, span: Span) -> ParseError {
    ParseError::new(
        codes::INVALID_FORMAT,
        format!("invalid command format, expected: {usage}"),
    )
    .with_span(span)
}

/// Validate the preamble as the target record index.
///
/// An empty preamble means the command shape itself is wrong and reports the
/// usage; a non-empty preamble that fails index validation reports the
/// specific index diagnostic, never masked by the usage text.
pub(crate) fn parse_index_preamble(
    map: &ArgumentMultimap,
    usage: &str,
) -> Result<Index, ParseError> {
    let preamble = map.preamble();
    if preamble.is_empty() {
        return Err(invalid_format(usage, preamble.span));
    }
    Index::parse(&preamble.text).map_err(|e| e.with_span(preamble.span))
}

/// Resolve the tag slot of an edit-style command from the tag prefix's
/// occurrences.
///
/// - prefix absent → `None` (leave existing tags untouched);
/// - one occurrence with an empty value → `Some(empty set)` (clear all tags);
/// - an empty occurrence alongside any other occurrence → duplicate-prefix
///   failure naming `t/`, regardless of the other occurrences' emptiness;
/// - otherwise → the validated set, duplicates collapsed.
pub(crate) fn parse_tags_for_edit(
    map: &ArgumentMultimap,
) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    let values = map.all_values(prefix::TAG);
    if values.is_empty() {
        return Ok(None);
    }
    if values.iter().any(|v| v.is_empty()) {
        if values.len() == 1 {
            return Ok(Some(BTreeSet::new()));
        }
        return Err(duplicate_prefix_error(map, &[prefix::TAG]));
    }
    parse_tag_values(map).map(Some)
}

/// Batch-validate every tag occurrence, re-attaching the offending value's
/// span when validation fails.
pub(crate) fn parse_tag_values(map: &ArgumentMultimap) -> Result<BTreeSet<Tag>, ParseError> {
    let values = map.all_values(prefix::TAG);
    parse_tags(values.iter().map(|v| v.text.as_str())).map_err(|e| {
        let offending = values
            .iter()
            .find(|v| e.context_get("value") == Some(v.text.as_str()))
            .map(|v| v.span);
        match offending {
            Some(span) => e.with_span(span),
            None => e,
        }
    })
}
