use crate::fields::{Address, Email, InterviewDate, Name, Phone, Tag};
use serde::Serialize;
use std::collections::BTreeSet;

/// The fields of a pending edit, each slot independently present or absent.
///
/// Populated incrementally by a parser during one parse call, then handed to
/// the command layer and never mutated again — the builder methods consume
/// `self`, so there is no path to mutate a descriptor in place.
///
/// The tag slot carries three states: `None` leaves the record's tags
/// untouched, `Some(empty set)` clears them all, `Some(non-empty)` replaces
/// them. The other slots are plain present/absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditPersonDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeSet<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interview_date: Option<InterviewDate>,
}

impl EditPersonDescriptor {
    /// Populate the name slot.
    pub fn with_name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    /// Populate the phone slot.
    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Populate the email slot.
    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    /// Populate the address slot.
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Populate the tag slot. An empty set means "clear all tags".
    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Populate the interview date slot.
    pub fn with_interview_date(mut self, date: InterviewDate) -> Self {
        self.interview_date = Some(date);
        self
    }

    /// The name slot.
    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    /// The phone slot.
    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    /// The email slot.
    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// The address slot.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// The tag slot. `Some(empty set)` means "clear all tags".
    pub fn tags(&self) -> Option<&BTreeSet<Tag>> {
        self.tags.as_ref()
    }

    /// The interview date slot.
    pub fn interview_date(&self) -> Option<InterviewDate> {
        self.interview_date
    }

    /// True when at least one slot is populated.
    pub fn edits_anything(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
            || self.interview_date.is_some()
    }
}

/// A fully-specified new contact record, as produced by the add command.
///
/// Unlike [`EditPersonDescriptor`] there are no optional-absence semantics
/// for the mandatory fields; only the interview date may be unset, and the
/// tag set may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interview_date: Option<InterviewDate>,
}

impl Person {
    /// Assemble a record from validated fields.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
        interview_date: Option<InterviewDate>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            interview_date,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone number.
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// The contact's email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// The contact's postal address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// The contact's tags (possibly empty).
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// The contact's interview date, if scheduled.
    pub fn interview_date(&self) -> Option<InterviewDate> {
        self.interview_date
    }
}
