//! Parser for the delete command: the entire input is the target index.

use super::parse_index_preamble;
use crate::error::ParseError;
use crate::fields::Index;
use crate::syntax::tokenizer::tokenize;
use serde::Serialize;

/// Canonical usage line for the delete command.
pub const USAGE: &str = "delete INDEX";

/// A parsed delete command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteRequest {
    /// The 1-based target record index.
    pub index: Index,
}

/// Parse the raw argument tail of a delete command.
///
/// No prefixes are recognized, so everything lands in the preamble; trailing
/// junk after the index therefore fails index validation rather than being
/// silently ignored.
pub fn parse(input: &str) -> Result<DeleteRequest, ParseError> {
    let map = tokenize(input, &[]);
    let index = parse_index_preamble(&map, USAGE)?;
    Ok(DeleteRequest { index })
}
