//! Contact form input and validation.
//!
//! [`ContactInput`] is whatever the visitor sent. The only way to obtain a
//! [`ValidatedContact`] is [`ContactInput::validate`], so the mailer cannot
//! be handed unchecked input.

use email_address::{EmailAddress, Options};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minimum name length, in characters.
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum message length, in characters.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Address rules: a bare `local@domain.tld`, no display name, no IP literal.
fn email_options() -> Options {
    Options::default()
        .without_display_text()
        .with_required_tld()
        .without_domain_literal()
}

/// Raw contact form submission. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check the fields in order name, email, message.
    ///
    /// # Errors
    ///
    /// Returns the first rule that fails.
    pub fn validate(self) -> Result<ValidatedContact, ValidationError> {
        if self.name.chars().count() < NAME_MIN_CHARS {
            return Err(ValidationError::NameTooShort);
        }
        if !is_plain_address(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.chars().count() < MESSAGE_MIN_CHARS {
            return Err(ValidationError::MessageTooShort);
        }
        Ok(ValidatedContact {
            name: self.name,
            email: self.email,
            message: self.message,
        })
    }
}

/// Quoted local parts and whitespace are refused on top of [`email_options`],
/// matching the check the page runs before submitting.
fn is_plain_address(email: &str) -> bool {
    !email.starts_with('"')
        && !email.contains(char::is_whitespace)
        && EmailAddress::parse_with_options(email, email_options()).is_ok()
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedContact {
    name: String,
    email: String,
    message: String,
}

impl ValidatedContact {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_passes() {
        let contact = ContactInput::new(
            "Jane Doe",
            "jane@example.com",
            "Hello, I would like more info please.",
        )
        .validate()
        .unwrap();
        assert_eq!(contact.name(), "Jane Doe");
        assert_eq!(contact.email(), "jane@example.com");
    }

    #[test]
    fn email_fails_before_message() {
        let err = ContactInput::new("Al", "bad", "short").validate().unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(err.field(), "email");
        assert_eq!(err.to_string(), "Invalid email address");
    }

    #[test]
    fn name_fails_first() {
        let err = ContactInput::new("A", "bad", "short").validate().unwrap_err();
        assert_eq!(err, ValidationError::NameTooShort);
        assert_eq!(err.to_string(), "Name must be at least 2 characters");
    }

    #[test]
    fn short_message_fails_last() {
        let err = ContactInput::new("Al", "al@example.com", "too short")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::MessageTooShort);
        assert_eq!(err.to_string(), "Message must be at least 10 characters");
    }

    #[test]
    fn boundary_lengths_pass() {
        assert!(
            ContactInput::new("Al", "al@example.com", "0123456789")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // Two bytes each, one character each.
        let err = ContactInput::new("é", "e@example.com", "ééééééééé")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::NameTooShort);
        let err = ContactInput::new("éé", "e@example.com", "ééééééééé")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::MessageTooShort);
    }

    #[test]
    fn astral_characters_count_once() {
        // One scalar value, two UTF-16 units.
        let err = ContactInput::new("😀", "e@example.com", "long enough message")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::NameTooShort);
        assert!(
            ContactInput::new("😀😀", "e@example.com", "long enough message")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn empty_form_fails_on_name() {
        let err = ContactInput::default().validate().unwrap_err();
        assert_eq!(err, ValidationError::NameTooShort);
    }

    #[test]
    fn ordinary_addresses_are_accepted() {
        for email in ["jane@example.com", "jane.doe+swt@mail.example.co.uk"] {
            assert!(
                ContactInput::new("Jane", email, "long enough message")
                    .validate()
                    .is_ok(),
                "{email:?}"
            );
        }
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        for email in [
            "",
            "jane",
            "jane@",
            "@example.com",
            "jane doe@example.com",
            "jane@localhost",
            "a@b",
            "\"j d\"@example.com",
            "jane@[127.0.0.1]",
            "Jane <jane@example.com>",
        ] {
            let err = ContactInput::new("Jane", email, "long enough message")
                .validate()
                .unwrap_err();
            assert_eq!(err, ValidationError::InvalidEmail, "{email:?}");
        }
    }
}
