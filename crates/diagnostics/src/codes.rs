//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete. Codes are stable: tooling may match on them.
//!
//! Numbering: `RLO1xxx` for command-shape failures detected by the parsers,
//! `RLO2xxx` for per-field constraint violations.

/// Command arguments do not match the command's expected shape; the message
/// carries the command's usage string.
pub const INVALID_FORMAT: &str = "RLO1001";

/// The positional preamble is not a positive integer index.
pub const INVALID_INDEX: &str = "RLO1002";

/// The positional index is numerically valid but too large to represent.
pub const INDEX_OUT_OF_RANGE: &str = "RLO1003";

/// A single-valued prefix was supplied more than once.
pub const DUPLICATE_PREFIX: &str = "RLO1004";

/// An edit-style command supplied no fields to change.
pub const NOTHING_EDITED: &str = "RLO1005";

/// An add-style command is missing one or more mandatory prefixes.
pub const MISSING_FIELD: &str = "RLO1006";

/// Name value violates the name constraint.
pub const INVALID_NAME: &str = "RLO2001";

/// Phone value violates the phone constraint.
pub const INVALID_PHONE: &str = "RLO2002";

/// Email value violates the email constraint.
pub const INVALID_EMAIL: &str = "RLO2003";

/// Address value violates the address constraint.
pub const INVALID_ADDRESS: &str = "RLO2004";

/// Tag value violates the tag constraint.
pub const INVALID_TAG: &str = "RLO2005";

/// Interview date value is not a valid calendar date.
pub const INVALID_DATE: &str = "RLO2006";

/// Every code the parsers can emit, in numbering order.
///
/// Kept in sync with the constants above; the `all_codes_have_explanations`
/// test walks this list.
pub const ALL: &[&str] = &[
    INVALID_FORMAT,
    INVALID_INDEX,
    INDEX_OUT_OF_RANGE,
    DUPLICATE_PREFIX,
    NOTHING_EDITED,
    MISSING_FIELD,
    INVALID_NAME,
    INVALID_PHONE,
    INVALID_EMAIL,
    INVALID_ADDRESS,
    INVALID_TAG,
    INVALID_DATE,
];
