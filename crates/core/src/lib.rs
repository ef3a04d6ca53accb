//! rolo core library.
//!
//! The argument-parsing layer of the rolo contact editor: prefix-aware
//! tokenization of raw command tails, per-field syntactic validation, and
//! assembly of immutable edit descriptors. One entry point per command —
//! [`parse::edit::parse`], [`parse::tag::parse`], [`parse::add::parse`], and
//! [`parse::delete::parse`] — each consuming the raw text after the command
//! word and returning either a command-ready request value or a
//! [`ParseError`] carrying a structured diagnostic.

#![warn(missing_docs)]

/// Edit descriptors and the fully-specified new-record type.
pub mod descriptor;
/// Parse failures carrying structured diagnostics.
pub mod error;
/// Validated field value types and their constraint rules.
pub mod fields;
/// Per-command parsers and shared parsing steps.
pub mod parse;
/// Prefix registry, tokenizer, and the argument multimap.
pub mod syntax;

// ── Convenience re-exports ──────────────────────────────────────────────────

pub use descriptor::{EditPersonDescriptor, Person};
pub use error::ParseError;
pub use fields::{Address, Email, Index, InterviewDate, Name, Phone, Tag};
pub use parse::add::AddRequest;
pub use parse::delete::DeleteRequest;
pub use parse::edit::EditRequest;
pub use syntax::prefix::Prefix;
pub use syntax::tokenizer::{ArgValue, ArgumentMultimap, tokenize};
