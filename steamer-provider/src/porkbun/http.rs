//! Porkbun HTTP transport

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::utils::log_sanitizer::mask_secret;

use super::types::Authenticated;
use super::{PROVIDER_NAME, PorkbunClient};

impl PorkbunClient {
    /// Send a POST request.
    ///
    /// Credentials are injected into the JSON body next to `payload`. A non-OK
    /// HTTP status is turned into an error here; an OK status is decoded into `T`
    /// without looking at the envelope's `status` (callers check it).
    pub(crate) async fn post<T, P>(&self, endpoint: &str, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let url = format!("{}/{endpoint}", self.base_url);
        let body = Authenticated {
            credentials: &self.credentials,
            payload,
        };
        let body_json =
            serde_json::to_string(&body).map_err(|e| ProviderError::SerializationError {
                provider: PROVIDER_NAME.to_string(),
                detail: e.to_string(),
            })?;
        log::trace!(
            "[{PROVIDER_NAME}] POST {url} as {}",
            mask_secret(self.credentials.api_key())
        );

        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body_json);

        let (status, response_text) =
            HttpUtils::execute_request(request, PROVIDER_NAME, "POST", endpoint).await?;

        if status != 200 {
            return Err(HttpUtils::envelope_error(
                status,
                &response_text,
                PROVIDER_NAME,
            ));
        }

        HttpUtils::parse_json(&response_text, PROVIDER_NAME)
    }
}
