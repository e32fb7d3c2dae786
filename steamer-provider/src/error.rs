use serde::{Deserialize, Serialize};

/// Unified error type for every registrar operation.
///
/// Each variant carries a `provider` field identifying the registrar that produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// None of these errors is retried by this crate. They propagate unmodified to the
/// caller, which decides how to present them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, TLS failure,
    /// connection refused, truncated body, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The request did not complete within the HTTP client's default timeout.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The request body could not be serialized to JSON.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The response body could not be decoded into the expected shape.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Decoder error details.
        detail: String,
        /// The undecodable body, kept for diagnostics.
        raw_body: String,
    },

    /// The registrar rejected the operation.
    ///
    /// Raised for a non-OK HTTP status, and for an OK status whose envelope
    /// reports anything other than `SUCCESS`.
    ApiError {
        /// Provider that produced the error.
        provider: String,
        /// The registrar's message verbatim, or the raw response body when the
        /// body carried no usable message.
        message: String,
        /// HTTP status code. Only set when `message` is the raw response body.
        status: Option<u16>,
    },

    /// The API key or secret is empty. Raised before any request is sent.
    MissingCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Which credential was missing.
        detail: String,
    },
}

impl ProviderError {
    /// Returns `true` if the error is a registrar-side or user-side condition
    /// rather than a transport or programming failure.
    ///
    /// Used to decide the log level when reporting errors.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ApiError { .. } | Self::MissingCredentials { .. }
        )
    }

    /// The registrar's message, if this is an [`ApiError`](Self::ApiError).
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::ApiError { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::ParseError {
                provider, detail, ..
            } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::ApiError {
                provider,
                message,
                status,
            } => {
                if let Some(code) = status {
                    write!(f, "[{provider}] API error: {message} (status {code})")
                } else {
                    write!(f, "[{provider}] API error: {message}")
                }
            }
            Self::MissingCredentials { provider, detail } => {
                write!(f, "[{provider}] Missing credentials: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProviderError>;
