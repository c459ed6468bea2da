//! Shared application state for the SWT site.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. Nothing in it changes after construction.

use std::sync::Arc;

use swt_site_core::error::PatternError;
use swt_site_core::mailer::{ContactService, EmailProvider};
use swt_site_core::pattern::PatternTable;

use crate::config::SiteConfig;
use crate::resend::ResendProvider;

/// Shared application state passed to all HTTP handlers.
#[derive(Debug)]
pub struct AppState {
    /// Highlighting rules for the quick-start snippets.
    pub patterns: PatternTable,
    /// Contact form pipeline (live or mock).
    pub contact: ContactService,
    /// Public URL of the site, without a trailing slash.
    pub site_url: String,
    /// Repository link.
    pub github_url: String,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// The Resend provider is created only when an API key is configured;
    /// otherwise the contact service runs in mock mode.
    ///
    /// # Errors
    ///
    /// Fails if the built-in pattern table does not compile.
    pub fn from_config(config: &SiteConfig) -> Result<Self, PatternError> {
        let provider = config.resend_api_key.as_ref().map(|key| {
            Arc::new(ResendProvider::new(key.clone(), &config.resend_api_url))
                as Arc<dyn EmailProvider>
        });
        let contact = ContactService::new(provider).with_mock_delay(config.mock_delay);
        Self::new(contact, config)
    }

    /// Build state around an already constructed contact service.
    ///
    /// # Errors
    ///
    /// Fails if the built-in pattern table does not compile.
    pub fn new(contact: ContactService, config: &SiteConfig) -> Result<Self, PatternError> {
        Ok(Self {
            patterns: PatternTable::javascript()?,
            contact,
            site_url: config.site_url.clone(),
            github_url: config.github_url.clone(),
        })
    }
}
