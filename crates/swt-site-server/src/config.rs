//! Server configuration for the SWT site.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Unparsable values fall back to the default rather than aborting startup.

use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration.
#[derive(Clone)]
pub struct SiteConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Resend API key. `None` runs the contact form in mock mode.
    pub resend_api_key: Option<String>,
    /// Base URL of the Resend API.
    pub resend_api_url: String,
    /// Simulated round trip for mock-mode submissions.
    pub mock_delay: Duration,
    /// Public URL of the site, used for canonical links and the sitemap.
    pub site_url: String,
    /// Repository link shown in the navbar and footer.
    pub github_url: String,
    /// Directory served for paths no route claims (favicon, OG image).
    pub public_dir: String,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT`: port to bind on (binds to `0.0.0.0`)
    /// - `SWT_BIND_ADDR`: full bind address (overrides `PORT`, default: `127.0.0.1:3000`)
    /// - `SWT_LOG_LEVEL`: log filter (default: `info`)
    /// - `RESEND_API_KEY`: enables live email delivery (empty means unset)
    /// - `SWT_RESEND_API_URL`: Resend API base (default: `https://api.resend.com`)
    /// - `SWT_CONTACT_MOCK_DELAY_MS`: mock-mode delay in ms (default: `1000`)
    /// - `SWT_SITE_URL`: public site URL (default: `https://secure-web-token.vercel.app`)
    /// - `SWT_GITHUB_URL`: repository link (default: `https://github.com`)
    /// - `SWT_PUBLIC_DIR`: static asset directory (default: `./public`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Priority: SWT_BIND_ADDR > PORT > default 127.0.0.1:3000
        let bind_addr = if let Some(addr) = lookup("SWT_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 3000)))
        } else if let Some(port_str) = lookup("PORT") {
            let port: u16 = port_str.parse().unwrap_or(3000);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 3000))
        };

        let log_level = lookup("SWT_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let resend_api_key = lookup("RESEND_API_KEY").filter(|k| !k.trim().is_empty());

        let resend_api_url = lookup("SWT_RESEND_API_URL")
            .map(|u| u.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| "https://api.resend.com".to_owned());

        let mock_delay = Duration::from_millis(
            lookup("SWT_CONTACT_MOCK_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        );

        let site_url = lookup("SWT_SITE_URL")
            .map(|u| u.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| "https://secure-web-token.vercel.app".to_owned());

        let github_url =
            lookup("SWT_GITHUB_URL").unwrap_or_else(|| "https://github.com".to_owned());

        let public_dir = lookup("SWT_PUBLIC_DIR").unwrap_or_else(|| "./public".to_owned());

        Self {
            bind_addr,
            log_level,
            resend_api_key,
            resend_api_url,
            mock_delay,
            site_url,
            github_url,
            public_dir,
        }
    }
}

impl std::fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "resend_api_key",
                &self.resend_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("resend_api_url", &self.resend_api_url)
            .field("mock_delay", &self.mock_delay)
            .field("site_url", &self.site_url)
            .field("github_url", &self.github_url)
            .field("public_dir", &self.public_dir)
            .finish()
    }
}
