//! Personal-info field validation

use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use super::phone;
use super::types::PersonalInfo;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address";
pub const INCOMPLETE_PHONE_MESSAGE: &str = "Enter a full phone number, e.g. +1 234 567 890";
pub const TOO_LONG_PHONE_MESSAGE: &str = "Phone number has too many digits, e.g. +1 234 567 890";

/// `local@domain.tld` with no whitespace and exactly one `@`
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must be a valid regex")
});

/// Fields on the personal-info step
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    PhoneNumber,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Email, Field::PhoneNumber]
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email Address",
            Field::PhoneNumber => "Phone Number",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "e.g. Stephen King",
            Field::Email => "e.g. stephenking@lorem.com",
            Field::PhoneNumber => "e.g. +1 234 567 890",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Email => write!(f, "email"),
            Field::PhoneNumber => write!(f, "phoneNumber"),
        }
    }
}

/// A single field failure
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS, JsonSchema)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every field failure from one submission, in field order
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("invalid personal info: {}", join_errors(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Message for `field`, if it failed
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.message_for(field).is_some()
    }

    /// Comma-separated failing field names, for log lines
    pub fn field_names(&self) -> String {
        self.0
            .iter()
            .map(|e| e.field.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new(Field::Name, REQUIRED_MESSAGE));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::new(Field::Email, REQUIRED_MESSAGE));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::new(Field::Email, INVALID_EMAIL_MESSAGE));
    }
    Ok(())
}

pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    if phone::is_complete(phone_number) {
        return Ok(());
    }
    let message = match phone::strip_non_digits(phone_number).len() {
        0 => REQUIRED_MESSAGE,
        n if n > phone::PHONE_DIGITS => TOO_LONG_PHONE_MESSAGE,
        _ => INCOMPLETE_PHONE_MESSAGE,
    };
    Err(ValidationError::new(Field::PhoneNumber, message))
}

/// Check every field and collect all failures
pub fn validate_personal_info(info: &PersonalInfo) -> Result<(), ValidationErrors> {
    let errors: Vec<ValidationError> = [
        validate_name(&info.name),
        validate_email(&info.email),
        validate_phone_number(&info.phone_number),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
