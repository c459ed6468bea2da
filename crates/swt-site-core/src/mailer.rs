//! Contact submission pipeline.
//!
//! [`ContactService`] validates a submission, formats it as a plain-text
//! email to the fixed recipient, and hands it to an [`EmailProvider`]. With
//! no provider configured it runs in mock mode: the payload is logged, a
//! fixed delay simulates the network round trip, and the visitor is told the
//! message was received.
//!
//! Every outcome is reduced to a [`ContactResult`]. Provider and transport
//! failures are logged once here and surface to the visitor only as a
//! generic message.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::contact::{ContactInput, ValidatedContact};
use crate::error::{ContactError, EmailError};

/// Every contact message goes to this address.
pub const CONTACT_RECIPIENT: &str = "securewebtoken@gmail.com";

/// Sender shown on contact messages.
pub const CONTACT_SENDER: &str = "SWT Contact Form <onboarding@resend.dev>";

/// Default simulated round trip in mock mode.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_secs(1);

pub const SENT_MESSAGE: &str = "Thank you! Your message has been sent.";
pub const MOCK_MESSAGE: &str = "Message received! (Mock mode)";
pub const PROVIDER_FAILURE_MESSAGE: &str = "Failed to send email. Please try again later.";
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// A message ready for an email provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
}

impl OutgoingEmail {
    /// Format a validated submission for the site inbox.
    #[must_use]
    pub fn contact(contact: &ValidatedContact) -> Self {
        Self {
            from: CONTACT_SENDER.to_owned(),
            to: vec![CONTACT_RECIPIENT.to_owned()],
            subject: format!("New Contact Message from {}", contact.name()),
            text: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}",
                contact.name(),
                contact.email(),
                contact.message()
            ),
        }
    }
}

/// Transactional email delivery.
///
/// Implementations must be cheap to share; one instance is built at startup
/// and reused for every request.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Deliver one message.
    ///
    /// # Errors
    ///
    /// [`EmailError::Rejected`] when the provider answers with an error,
    /// [`EmailError::Transport`] when no answer was obtained.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError>;
}

/// Outcome of one submission, as returned to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Form field a validation error belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ContactResult {
    pub fn sent(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
            field: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
            field: None,
        }
    }
}

impl From<&ContactError> for ContactResult {
    fn from(err: &ContactError) -> Self {
        match err {
            ContactError::Validation(v) => Self {
                field: Some(v.field().to_owned()),
                ..Self::failed(v.to_string())
            },
            ContactError::Provider(_) => Self::failed(PROVIDER_FAILURE_MESSAGE),
            ContactError::Unexpected { .. } => Self::failed(UNEXPECTED_FAILURE_MESSAGE),
        }
    }
}

/// The contact submission handler.
#[derive(Clone)]
pub struct ContactService {
    provider: Option<Arc<dyn EmailProvider>>,
    mock_delay: Duration,
}

impl ContactService {
    /// Build a service. `None` selects mock mode.
    #[must_use]
    pub fn new(provider: Option<Arc<dyn EmailProvider>>) -> Self {
        Self {
            provider,
            mock_delay: DEFAULT_MOCK_DELAY,
        }
    }

    /// Override the simulated delay used in mock mode.
    #[must_use]
    pub fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = delay;
        self
    }

    #[must_use]
    pub fn is_mock(&self) -> bool {
        self.provider.is_none()
    }

    /// Validate and submit, reducing every outcome to a [`ContactResult`].
    pub async fn handle(&self, input: ContactInput) -> ContactResult {
        let outcome = match input.validate() {
            Ok(contact) => self.submit(contact).await,
            Err(e) => Err(ContactError::from(e)),
        };
        match outcome {
            Ok(message) => ContactResult::sent(message),
            Err(err) => Self::report(&err),
        }
    }

    /// Send a validated submission and return the confirmation text.
    ///
    /// # Errors
    ///
    /// [`ContactError::Provider`] if the provider refused the message or
    /// could not be reached.
    pub async fn submit(&self, contact: ValidatedContact) -> Result<String, ContactError> {
        let Some(provider) = &self.provider else {
            info!(
                name = contact.name(),
                email = contact.email(),
                message = contact.message(),
                "mock contact email (no provider configured)"
            );
            tokio::time::sleep(self.mock_delay).await;
            return Ok(MOCK_MESSAGE.to_owned());
        };

        let email = OutgoingEmail::contact(&contact);
        provider.send(&email).await?;
        info!(from_name = contact.name(), "contact email sent");
        Ok(SENT_MESSAGE.to_owned())
    }

    /// Log a failed submission and map it to the visitor-facing result.
    pub fn report(err: &ContactError) -> ContactResult {
        match err {
            ContactError::Validation(v) => {
                debug!(field = v.field(), error = %v, "contact submission rejected");
            }
            ContactError::Provider(e) => {
                error!(error = %e, "contact email delivery failed");
            }
            ContactError::Unexpected { reason } => {
                error!(error = %reason, "contact submission failed unexpectedly");
            }
        }
        ContactResult::from(err)
    }
}

impl std::fmt::Debug for ContactService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactService")
            .field("mock", &self.is_mock())
            .field("mock_delay", &self.mock_delay)
            .finish()
    }
}
