//! Error types for `swt-site-core`.
//!
//! Validation errors carry the exact text shown next to the form field.
//! Provider errors keep the provider's own description for the logs; it is
//! never forwarded to the visitor.

/// Errors from building a pattern table.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// A matching rule failed to compile.
    #[error("invalid rule for {kind}: {source}")]
    InvalidRule {
        kind: &'static str,
        #[source]
        source: regex::Error,
    },

    /// The rule has no capture group with the requested index.
    #[error("rule for {kind} has no capture group {group}")]
    MissingGroup { kind: &'static str, group: usize },
}

/// A contact form field that failed validation.
///
/// Variants are checked in declaration order; only the first failure is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl ValidationError {
    /// Name of the offending form field.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::NameTooShort => "name",
            Self::InvalidEmail => "email",
            Self::MessageTooShort => "message",
        }
    }
}

/// Errors from an email provider.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// The provider answered and refused the message.
    #[error("provider rejected email (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a provider answer (DNS, TLS, connection reset).
    #[error("email transport failed: {reason}")]
    Transport { reason: String },
}

/// Errors from a contact submission.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// The submitted form did not pass validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The email provider refused the message or could not be reached.
    #[error("provider error: {0}")]
    Provider(#[from] EmailError),

    /// Anything outside the provider, such as a malformed request.
    #[error("unexpected error: {reason}")]
    Unexpected { reason: String },
}
