use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CreateRecordRequest, DnsRecord, Domain, PingInfo};

/// Registrar operations the CLI and the browser are written against.
///
/// Every operation checks the response envelope as well as the HTTP status: the
/// registrar may answer HTTP 200 with `status = "ERROR"`, which is reported as
/// [`ProviderError::ApiError`](crate::ProviderError::ApiError).
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Check connectivity and credentials. Returns the caller's public IP.
    async fn ping(&self) -> Result<PingInfo>;

    /// List every domain in the account, labels included.
    ///
    /// Only the first page the registrar returns is fetched; the `start` offset
    /// is never sent.
    async fn list_domains(&self) -> Result<Vec<Domain>>;

    /// List the DNS records of `domain`.
    async fn list_records(&self, domain: &str) -> Result<Vec<DnsRecord>>;

    /// Create a record under `domain`. Returns the new record's ID.
    async fn create_record(&self, domain: &str, req: &CreateRecordRequest) -> Result<String>;

    /// Delete the record `record_id` from `domain`.
    async fn delete_record(&self, domain: &str, record_id: &str) -> Result<()>;
}
