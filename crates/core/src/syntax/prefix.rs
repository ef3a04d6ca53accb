use std::fmt;

/// An opaque marker identifying a field kind in raw input (e.g. `n/`).
///
/// Prefixes are compared by exact string equality. The set of recognized
/// prefixes is fixed; each command parser declares the subset it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    /// Create a prefix from its marker string.
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    /// The marker string, exactly as it appears in input.
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Contact name.
pub const NAME: Prefix = Prefix::new("n/");
/// Phone number.
pub const PHONE: Prefix = Prefix::new("p/");
/// Email address.
pub const EMAIL: Prefix = Prefix::new("e/");
/// Postal address.
pub const ADDRESS: Prefix = Prefix::new("a/");
/// Tag (repeatable in edit-style commands).
pub const TAG: Prefix = Prefix::new("t/");
/// Interview date.
pub const DATE: Prefix = Prefix::new("d/");
