//! # steamer-provider
//!
//! A typed client for the [Porkbun](https://porkbun.com/) JSON API v3, covering
//! domain listing and DNS record management.
//!
//! Every request is an HTTPS `POST` of a JSON object that carries the account's
//! `apikey`/`secretapikey` pair next to the operation's own fields. Every response
//! carries a `{status, message}` envelope. This crate checks both layers: a non-OK
//! HTTP status is an error, and so is an HTTP 200 whose envelope status is not
//! `SUCCESS`.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use steamer_provider::{Credentials, DnsProvider, PorkbunClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new("pk1_...", "sk1_...")?;
//!     let client = PorkbunClient::new(credentials)?;
//!
//!     for domain in client.list_domains().await? {
//!         println!("{} (expires {})", domain.name, domain.expire_date);
//!     }
//!
//!     for record in client.list_records("example.com").await? {
//!         println!("{} {} {}", record.record_type, record.name, record.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`](Result), an alias for
//! `std::result::Result<T, ProviderError>`. Nothing is retried.
//!
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`]: transport failures
//! - [`ProviderError::SerializationError`]: the request body could not be encoded
//! - [`ProviderError::ParseError`]: the response could not be decoded (raw body kept)
//! - [`ProviderError::ApiError`]: the registrar refused the operation
//! - [`ProviderError::MissingCredentials`]: empty key or secret, caught before any request

mod error;
mod http_client;
mod porkbun;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};
pub use porkbun::{PORKBUN_API_BASE, PorkbunClient};
pub use traits::DnsProvider;
pub use types::{CreateRecordRequest, Credentials, DnsRecord, Domain, Flag, Label, PingInfo};
