//! Porkbun JSON API v3 client

mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::types::Credentials;

/// Provider identifier used in logs and errors.
pub(crate) const PROVIDER_NAME: &str = "porkbun";

/// Production endpoint of the JSON API v3.
pub const PORKBUN_API_BASE: &str = "https://api.porkbun.com/api/json/v3";

/// Porkbun DNS Provider
///
/// Owns the credentials and one `reqwest::Client`, reused for every call.
pub struct PorkbunClient {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    pub(crate) base_url: String,
}

impl PorkbunClient {
    /// Client for the production API.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(credentials, PORKBUN_API_BASE)
    }

    /// Client for an alternative base URL (a mock server, a proxy).
    ///
    /// A trailing `/` on `base_url` is ignored.
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("steamer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::NetworkError {
                provider: PROVIDER_NAME.to_string(),
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
