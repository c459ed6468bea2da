//! [Resend](https://resend.com) email provider.
//!
//! Posts the message as JSON to `{api_url}/emails` with the API key as a
//! bearer token. Any non-2xx answer is a rejection; Resend describes it in a
//! JSON body with a `message` field, which is kept for the logs.

use async_trait::async_trait;
use serde::Deserialize;

use swt_site_core::error::EmailError;
use swt_site_core::mailer::{EmailProvider, OutgoingEmail};

/// Resend client. Build once and share.
pub struct ResendProvider {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

/// Error body returned by Resend.
#[derive(Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
    name: Option<String>,
}

impl ResendProvider {
    /// Create a provider talking to `api_url` (e.g. `https://api.resend.com`).
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: format!("{}/emails", api_url.trim_end_matches('/')),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| EmailError::Transport {
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ResendErrorBody>(&body) {
            Ok(ResendErrorBody {
                message: Some(message),
                name,
            }) => match name {
                Some(name) => format!("{name}: {message}"),
                None => message,
            },
            _ if body.is_empty() => status.to_string(),
            _ => body,
        };

        Err(EmailError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

impl std::fmt::Debug for ResendProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendProvider")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
