//! Validated field value types.
//!
//! Each type wraps a raw string (or date) that has passed its field-specific
//! syntactic constraint; invalid raw text never produces an instance, only a
//! [`ParseError`]. Validators are pure and referentially transparent —
//! revalidating the raw form of a validated value yields an equal value.

/// Interview date validation.
pub mod date;
/// Name, phone, email, address, and tag validation.
pub mod person;

pub use date::InterviewDate;
pub use person::{Address, Email, Name, Phone, Tag, parse_tags};

use crate::error::{ParseError, ctx};
use rolo_diagnostics::codes;
use serde::Serialize;
use std::fmt;

/// A validated 1-based record index.
///
/// Always ≥ 1 and representable; constructed only through [`Index::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Index {
    value: usize,
}

impl Index {
    /// Constraint message for a preamble that is not a positive integer.
    pub const MESSAGE: &'static str = "index must be a single positive integer";
    /// Constraint message for an index beyond the representable range.
    pub const MESSAGE_OUT_OF_RANGE: &'static str = "index exceeds the supported range";

    /// Validate raw text as a 1-based index.
    ///
    /// "Not a positive integer" and "out of representable range" are distinct
    /// failures: pure-digit text that overflows reports the range cause, any
    /// other shape (signs, spaces, zero, non-digits) reports the format cause.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let digits = raw.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::new(codes::INVALID_INDEX, Self::MESSAGE)
                .with_context(ctx!("value" => digits)));
        }
        match digits.parse::<usize>() {
            Ok(0) => Err(ParseError::new(codes::INVALID_INDEX, Self::MESSAGE)
                .with_context(ctx!("value" => digits))),
            Ok(value) => Ok(Self { value }),
            // all-digit text can only fail to parse by overflowing
            Err(_) => Err(
                ParseError::new(codes::INDEX_OUT_OF_RANGE, Self::MESSAGE_OUT_OF_RANGE)
                    .with_context(ctx!("value" => digits)),
            ),
        }
    }

    /// The index as the user typed it (1-based).
    pub fn one_based(self) -> usize {
        self.value
    }

    /// The index shifted for container access (0-based).
    pub fn zero_based(self) -> usize {
        self.value - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
