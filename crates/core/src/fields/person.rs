use crate::error::{ParseError, ctx};
use regex::Regex;
use rolo_diagnostics::codes;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,16}$").expect("valid phone pattern"));

// local@domain, dot-separated alphanumeric-and-hyphen labels, final label of
// at least 2 characters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@([A-Za-z0-9-]+\.)*[A-Za-z0-9-]{2,}$")
        .expect("valid email pattern")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag pattern"));

/// A contact name that has passed the name constraint.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Constraint message for invalid names.
    pub const MESSAGE: &'static str =
        "names should only contain alphanumeric characters and spaces, and should not be blank";

    /// Validate raw text as a name.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if NAME_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ParseError::new(codes::INVALID_NAME, Self::MESSAGE)
                .with_context(ctx!("value" => raw)))
        }
    }

    /// The validated text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A phone number that has passed the phone constraint.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Constraint message for invalid phone numbers.
    pub const MESSAGE: &'static str = "phone numbers should only contain digits, 3 to 16 of them";

    /// Validate raw text as a phone number.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if PHONE_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ParseError::new(codes::INVALID_PHONE, Self::MESSAGE)
                .with_context(ctx!("value" => raw)))
        }
    }

    /// The validated text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An email address that has passed the email constraint.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Constraint message for invalid emails.
    pub const MESSAGE: &'static str = "emails should have the shape local@domain, where the local \
         part uses alphanumerics and +_.- and the domain is dot-separated alphanumeric labels \
         ending in a label of at least 2 characters";

    /// Validate raw text as an email address.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if EMAIL_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ParseError::new(codes::INVALID_EMAIL, Self::MESSAGE)
                .with_context(ctx!("value" => raw)))
        }
    }

    /// The validated text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A postal address that has passed the address constraint.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Constraint message for invalid addresses.
    pub const MESSAGE: &'static str = "addresses can take any value, but should not be blank";

    /// Validate raw text as an address. Any non-blank text is accepted.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.trim().is_empty() {
            Err(ParseError::new(codes::INVALID_ADDRESS, Self::MESSAGE)
                .with_context(ctx!("value" => raw)))
        } else {
            Ok(Self(raw.to_string()))
        }
    }

    /// The validated text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A tag that has passed the tag constraint.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Constraint message for invalid tags.
    pub const MESSAGE: &'static str = "tags should be single alphanumeric tokens";

    /// Validate raw text as a tag.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if TAG_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ParseError::new(codes::INVALID_TAG, Self::MESSAGE)
                .with_context(ctx!("value" => raw)))
        }
    }

    /// The validated text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Batch-validate raw tag strings into a set.
///
/// Fails on the first invalid member in iteration order; duplicates collapse
/// via set semantics. The empty iterator yields the empty set.
pub fn parse_tags<'a, I>(raws: I) -> Result<BTreeSet<Tag>, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tags = BTreeSet::new();
    for raw in raws {
        tags.insert(Tag::parse(raw)?);
    }
    Ok(tags)
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
