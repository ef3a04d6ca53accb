//! Diagnostics for the rolo contact editor.
//!
//! Provides [`Diagnostic`], [`Severity`], and [`Span`] used to report parse
//! failures from the command parsers. Diagnostic codes are defined in the
//! [`codes`] module; [`explain`] maps a code to its long-form description.

#![warn(missing_docs)]

/// Diagnostic ID constants.
pub mod codes;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Hard error — the input is invalid.
    Error,
    /// Warning — the input may produce unexpected results.
    Warn,
    /// Informational note.
    Info,
}

/// Byte span in the raw command-line input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first character (0-based).
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl Span {
    /// Create a span covering `[start, end)`.
    ///
    /// Panics if `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(end >= start, "Span end ({end}) < start ({start})");
        Self { start, end }
    }

    /// Create a zero-width span at the given position.
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

/// A diagnostic produced by a command parser.
///
/// The `message` is the user-facing text, surfaced verbatim; `context` holds
/// machine-readable key-value details (offending prefix, raw value, limits)
/// for tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique diagnostic code (e.g., `"RLO1004"`).
    pub id: Cow<'static, str>,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable diagnostic message.
    pub message: String,
    /// Optional byte span in the raw input that this diagnostic relates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Machine-readable context for tooling. Keys and values are free-form
    /// strings. Uses `BTreeMap` for deterministic key ordering in serialized
    /// output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

impl Diagnostic {
    /// Create a diagnostic with the given fields.
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        severity: Severity,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            message: message.into(),
            span,
            context: None,
        }
    }

    /// Shorthand for an `Error` diagnostic.
    pub fn error(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Error, message, span)
    }

    /// Attach machine-readable context metadata (builder pattern).
    pub fn with_context(mut self, ctx: BTreeMap<String, String>) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Returns the long-form description for this diagnostic's code, if known.
    pub fn explain(&self) -> Option<&'static str> {
        explain(&self.id)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warn => write!(f, "warn"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.id, self.message)
    }
}

/// Returns the long-form description for a diagnostic code, if known.
pub fn explain(id: &str) -> Option<&'static str> {
    match id {
        codes::INVALID_FORMAT => Some(
            "The command's arguments do not match its expected shape, e.g. a \
             required positional index is missing entirely or an add-style \
             command carries stray positional text. The message includes the \
             command's usage line.",
        ),
        codes::INVALID_INDEX => Some(
            "The positional record index must be a single positive integer \
             (1-based). Zero, negative numbers, and non-numeric text are all \
             rejected.",
        ),
        codes::INDEX_OUT_OF_RANGE => Some(
            "The positional record index is a well-formed number but exceeds \
             the representable range, so no record can have it.",
        ),
        codes::DUPLICATE_PREFIX => Some(
            "A single-valued prefix (or the clear-all tag sentinel combined \
             with another tag occurrence) appeared more than once. All \
             duplicated prefixes are listed in one report.",
        ),
        codes::NOTHING_EDITED => Some(
            "The edit is well-formed but supplies no field to change; at \
             least one prefixed field must be present.",
        ),
        codes::MISSING_FIELD => Some(
            "An add-style command requires every mandatory prefix; all \
             missing prefixes are listed in one report.",
        ),
        codes::INVALID_NAME => Some(
            "Names contain only alphanumeric characters and spaces, start \
             with an alphanumeric character, and are not blank.",
        ),
        codes::INVALID_PHONE => Some("Phone numbers contain only digits, 3 to 16 of them."),
        codes::INVALID_EMAIL => Some(
            "Emails have the shape local@domain: the local part uses \
             alphanumerics and +_.-, the domain is dot-separated alphanumeric \
             labels with a final label of at least 2 characters.",
        ),
        codes::INVALID_ADDRESS => Some("Addresses can take any value but must not be blank."),
        codes::INVALID_TAG => Some("Tags are single alphanumeric tokens."),
        codes::INVALID_DATE => Some(
            "Interview dates use the YYYY-MM-DD format and must name a real \
             calendar date.",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Span ────────────────────────────────────────────────────────────

    #[test]
    fn span_new_valid() {
        let s = Span::new(5, 10);
        assert_eq!(s.start, 5);
        assert_eq!(s.end, 10);
    }

    #[test]
    fn span_empty() {
        let s = Span::empty(7);
        assert_eq!(s.start, 7);
        assert_eq!(s.end, 7);
    }

    #[test]
    #[should_panic(expected = "Span end (3) < start (5)")]
    fn span_new_inverted_panics() {
        Span::new(5, 3);
    }

    // ── Diagnostic constructors / Display ───────────────────────────────

    #[test]
    fn diagnostic_error_constructor() {
        let d = Diagnostic::error(codes::DUPLICATE_PREFIX, "duplicate prefix: p/", None);
        assert_eq!(d.id, "RLO1004");
        assert_eq!(d.severity, Severity::Error);
        assert!(d.span.is_none());
    }

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic::error(codes::NOTHING_EDITED, "at least one field to edit", None);
        assert_eq!(
            format!("{}", d),
            "error[RLO1005]: at least one field to edit"
        );
    }

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Warn), "warn");
        assert_eq!(format!("{}", Severity::Info), "info");
    }

    // ── explain ─────────────────────────────────────────────────────────

    #[test]
    fn all_codes_have_explanations() {
        for code in codes::ALL {
            assert!(
                explain(code).is_some(),
                "diagnostic code {code} has no explain() entry"
            );
        }
    }

    #[test]
    fn explain_unknown_code() {
        assert!(explain("RLO9999").is_none());
        let d = Diagnostic::error("RLO9999", "test", None);
        assert!(d.explain().is_none());
    }

    #[test]
    fn codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for code in codes::ALL {
            assert!(seen.insert(code), "diagnostic code {code} listed twice");
        }
    }

    // ── Context ─────────────────────────────────────────────────────────

    #[test]
    fn diagnostic_with_context() {
        let d = Diagnostic::error(codes::DUPLICATE_PREFIX, "duplicate", None).with_context(
            BTreeMap::from([("prefixes".into(), "p/ e/".into())]),
        );
        assert_eq!(d.context.as_ref().unwrap().get("prefixes").unwrap(), "p/ e/");
    }

    // ── Serde round-trip ────────────────────────────────────────────────

    #[test]
    fn diagnostic_serde_roundtrip() {
        let d = Diagnostic::error(codes::INVALID_PHONE, "bad phone", Some(Span::new(2, 7)))
            .with_context(BTreeMap::from([("value".into(), "12ab".into())]));
        let json = serde_json::to_string(&d).unwrap();
        let d2: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(d, d2);
    }

    #[test]
    fn diagnostic_serde_omits_none_fields() {
        let d = Diagnostic::error(codes::INVALID_INDEX, "test", None);
        let json = serde_json::to_string(&d).unwrap();
        assert!(!json.contains("span"), "None span should be omitted: {json}");
        assert!(
            !json.contains("context"),
            "None context should be omitted: {json}"
        );
    }
}
