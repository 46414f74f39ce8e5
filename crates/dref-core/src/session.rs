//! Identity session provider interface.
//!
//! Authenticated control-plane fetches go through a session supplied by an
//! external identity service. Only the narrow surface the resolver needs is
//! modeled here; how sessions are created, cached, or refreshed is the
//! provider's business. A bearer-token provider is included so the CLI can
//! talk to token-authenticated services out of the box.

use std::borrow::Cow;
use std::time::Duration;

use anyhow::Context;

use crate::config::DrefConfig;
use crate::fetch::{self, GetOptions};

/// Response from an authenticated GET.
#[derive(Debug, Clone)]
pub struct ServiceResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl ServiceResponse {
    /// Body decoded as text for error reporting (lossy on invalid UTF-8).
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// An authenticated session capable of issuing GET requests.
pub trait Session {
    fn get(&self, url: &str) -> anyhow::Result<ServiceResponse>;
}

/// Supplies authenticated sessions on demand.
pub trait SessionProvider: Send + Sync {
    fn get_session(&self) -> anyhow::Result<Box<dyn Session + '_>>;
}

/// Session provider that attaches a fixed bearer token to every request.
///
/// The token comes from the `DREF_TOKEN` environment variable or the
/// `service_token` config key. Providers for richer identity backends can
/// implement [`SessionProvider`] themselves.
pub struct BearerTokenProvider {
    token: Option<String>,
    timeout: Duration,
    connect_timeout: Duration,
}

impl BearerTokenProvider {
    pub fn new(token: impl Into<String>, timeout: Duration, connect_timeout: Duration) -> Self {
        BearerTokenProvider {
            token: Some(token.into()),
            timeout,
            connect_timeout,
        }
    }

    /// Builds a provider from config, preferring `DREF_TOKEN` from the
    /// environment over the config file's `service_token`.
    pub fn from_config(cfg: &DrefConfig) -> Self {
        let token = std::env::var("DREF_TOKEN")
            .ok()
            .or_else(|| cfg.service_token.clone());
        BearerTokenProvider {
            token,
            timeout: Duration::from_secs(cfg.service_timeout_secs),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
        }
    }
}

impl SessionProvider for BearerTokenProvider {
    fn get_session(&self) -> anyhow::Result<Box<dyn Session + '_>> {
        let token = self.token.as_deref().ok_or_else(|| {
            anyhow::anyhow!("no service token configured (set DREF_TOKEN or config service_token)")
        })?;
        Ok(Box::new(BearerSession {
            token,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
        }))
    }
}

struct BearerSession<'a> {
    token: &'a str,
    timeout: Duration,
    connect_timeout: Duration,
}

impl Session for BearerSession<'_> {
    fn get(&self, url: &str) -> anyhow::Result<ServiceResponse> {
        let opts = GetOptions {
            headers: vec![format!("Authorization: Bearer {}", self.token)],
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            ..GetOptions::default()
        };
        fetch::http_get(url, &opts).with_context(|| format!("GET {url}"))
    }
}
