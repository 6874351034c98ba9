use std::sync::LazyLock;

use email_address::EmailAddress;
use nutype::nutype;
use regex::Regex;

// Loose international grammar: optional leading `+`, 7-15 digits,
// no country-specific rules.
pub static PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").unwrap());

pub const NAME_REQUIRED_ERROR: &str = "Full Name is required";
pub const EMAIL_INVALID_ERROR: &str = "Invalid email address";
pub const PHONE_INVALID_ERROR: &str = "Invalid phone number";
pub const MESSAGE_REQUIRED_ERROR: &str = "Message is required";

/// A validated contact message, eligible for dispatch to the email relay.
///
/// Only obtainable via [`ContactDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub message: ContactMessageContent,
}

#[nutype(
    validate(len_char_min = 1),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    validate(regex = PHONE_NUMBER_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct PhoneNumber(String);

#[nutype(
    validate(len_char_min = 1),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Message];

    /// The fixed label under which a presentation layer renders this field.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Message => "Message",
        }
    }
}

/// The in-memory, not-yet-submitted contact message. Field values are
/// unconstrained until they pass through [`ContactDraft::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Runs the full draft through the validation schema.
    ///
    /// Either all four fields satisfy their predicate and a
    /// [`ContactMessage`] is produced, or every violation is reported at
    /// once via [`FieldErrors`]. Pure, no side effects.
    pub fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let name = ContactName::try_new(self.name.clone());
        let email = self.email.parse::<EmailAddress>();
        let phone = PhoneNumber::try_new(self.phone.clone());
        let message = ContactMessageContent::try_new(self.message.clone());

        match (name, email, phone, message) {
            (Ok(name), Ok(email), Ok(phone), Ok(message)) => Ok(ContactMessage {
                name,
                email,
                phone,
                message,
            }),
            (name, email, phone, message) => Err(FieldErrors {
                name: name.is_err().then_some(NAME_REQUIRED_ERROR),
                email: email.is_err().then_some(EMAIL_INVALID_ERROR),
                phone: phone.is_err().then_some(PHONE_INVALID_ERROR),
                message: message.is_err().then_some(MESSAGE_REQUIRED_ERROR),
            }),
        }
    }
}

/// Per-field validation errors. A field mapped to `Some(...)` is invalid;
/// `None` means the field satisfies its predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Phone => self.phone,
            ContactField::Message => self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|&field| self.get(field).is_none())
    }
}
