//! Generic HTTP client tools
//!
//! Sending a request, logging it, reading the body and turning failures into
//! [`ProviderError`]s. The registrar client builds its own `RequestBuilder` and
//! hands it to these helpers.
//!
//! # Design principles
//! - **No retries** - every error reaches the caller exactly once
//! - **Status is reported, not judged** - `execute_request` returns the status code
//!   next to the body and leaves the OK / non-OK decision to the caller
//! - **Raw bodies survive** - decode failures keep the undecodable text

use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// The status/message pair present in every registrar response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope status value for a successful operation.
pub(crate) const STATUS_SUCCESS: &str = "SUCCESS";

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - provider name, for logs and errors
    /// * `method_name` - request method name, for logs
    /// * `endpoint` - endpoint path, for logs
    ///
    /// # Errors
    /// * `ProviderError::Timeout` - the client's timeout elapsed
    /// * `ProviderError::NetworkError` - the request could not be sent or the body not read
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        endpoint: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {endpoint}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(&e, provider_name))?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response into `T`.
    ///
    /// # Errors
    /// `ProviderError::ParseError` carrying the decoder message and the raw body.
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
                raw_body: response_text.to_string(),
            }
        })
    }

    /// Build the error for a non-OK HTTP status.
    ///
    /// If the body is an envelope with a non-empty `message`, that message is the
    /// error. Otherwise the raw body is reported together with the status code.
    pub fn envelope_error(
        status_code: u16,
        response_text: &str,
        provider_name: &str,
    ) -> ProviderError {
        let parsed = serde_json::from_str::<Envelope>(response_text)
            .ok()
            .and_then(|envelope| envelope.message)
            .filter(|message| !message.is_empty());

        match parsed {
            Some(message) => {
                log::warn!("[{provider_name}] HTTP {status_code}: {message}");
                ProviderError::ApiError {
                    provider: provider_name.to_string(),
                    message,
                    status: None,
                }
            }
            None => {
                log::warn!(
                    "[{provider_name}] HTTP {status_code} with unrecognised body: {}",
                    truncate_for_log(response_text)
                );
                ProviderError::ApiError {
                    provider: provider_name.to_string(),
                    message: response_text.to_string(),
                    status: Some(status_code),
                }
            }
        }
    }
}

/// Classify a `reqwest` send failure.
fn transport_error(error: &reqwest::Error, provider_name: &str) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout {
            provider: provider_name.to_string(),
            detail: error.to_string(),
        }
    } else {
        ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: error.to_string(),
        }
    }
}
