//! `DnsProvider` implementation for Porkbun

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::http_client::Envelope;
use crate::traits::DnsProvider;
use crate::types::{CreateRecordRequest, DnsRecord, Domain, PingInfo};

use super::types::{
    CreateRecordResponse, ListDomainsPayload, ListDomainsResponse, NoPayload, PingResponse,
    RetrieveRecordsResponse,
};
use super::{PROVIDER_NAME, PorkbunClient};

impl PorkbunClient {
    /// Turn a non-`SUCCESS` envelope into an error.
    ///
    /// The registrar can answer HTTP 200 while refusing the operation, so this runs
    /// after every successful transport round-trip.
    pub(crate) fn ensure_success(envelope: &Envelope, operation: &str) -> Result<()> {
        if envelope.is_success() {
            return Ok(());
        }

        let message = envelope
            .message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("{operation} failed with status {:?}", envelope.status));
        log::warn!("[{PROVIDER_NAME}] {operation} rejected: {message}");

        Err(ProviderError::ApiError {
            provider: PROVIDER_NAME.to_string(),
            message,
            status: None,
        })
    }
}

#[async_trait]
impl DnsProvider for PorkbunClient {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn ping(&self) -> Result<PingInfo> {
        let res: PingResponse = self.post("ping", &NoPayload {}).await?;
        Self::ensure_success(&res.envelope, "ping")?;

        Ok(PingInfo {
            your_ip: res.your_ip,
        })
    }

    async fn list_domains(&self) -> Result<Vec<Domain>> {
        let payload = ListDomainsPayload {
            start: None,
            include_labels: Some("yes".to_string()),
        };
        let res: ListDomainsResponse = self.post("domain/listAll", &payload).await?;
        Self::ensure_success(&res.envelope, "list domains")?;

        log::debug!("[{PROVIDER_NAME}] listed {} domains", res.domains.len());
        Ok(res.domains)
    }

    async fn list_records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        let res: RetrieveRecordsResponse = self
            .post(&format!("dns/retrieve/{domain}"), &NoPayload {})
            .await?;
        Self::ensure_success(&res.envelope, "retrieve records")?;

        log::debug!(
            "[{PROVIDER_NAME}] {domain}: retrieved {} records",
            res.records.len()
        );
        Ok(res.records)
    }

    async fn create_record(&self, domain: &str, req: &CreateRecordRequest) -> Result<String> {
        let res: CreateRecordResponse = self.post(&format!("dns/create/{domain}"), req).await?;
        Self::ensure_success(&res.envelope, "create record")?;

        log::info!(
            "[{PROVIDER_NAME}] created {} record '{}' under {domain} (id {})",
            req.record_type,
            req.name,
            res.id
        );
        Ok(res.id)
    }

    async fn delete_record(&self, domain: &str, record_id: &str) -> Result<()> {
        let res: Envelope = self
            .post(&format!("dns/delete/{domain}/{record_id}"), &NoPayload {})
            .await?;
        Self::ensure_success(&res, "delete record")?;

        log::info!("[{PROVIDER_NAME}] deleted record {record_id} from {domain}");
        Ok(())
    }
}
