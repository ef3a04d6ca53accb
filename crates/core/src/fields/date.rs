use crate::error::{ParseError, ctx};
use chrono::NaiveDate;
use rolo_diagnostics::codes;
use serde::Serialize;
use std::fmt;

/// An interview date that has passed calendar validation.
///
/// Backed by a real [`NaiveDate`], so impossible dates (`2024-02-30`) are
/// rejected at construction, not just shape-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct InterviewDate(NaiveDate);

impl InterviewDate {
    /// The accepted input format.
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Constraint message for invalid dates.
    pub const MESSAGE: &'static str =
        "interview dates should be real calendar dates in YYYY-MM-DD format";

    /// Validate raw text as an interview date.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        NaiveDate::parse_from_str(raw, Self::FORMAT)
            .map(Self)
            .map_err(|_| {
                ParseError::new(codes::INVALID_DATE, Self::MESSAGE)
                    .with_context(ctx!("value" => raw))
            })
    }

    /// The validated calendar date.
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for InterviewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}
