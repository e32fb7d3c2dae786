//! Porkbun API request and response types

use serde::{Deserialize, Serialize};

use crate::http_client::Envelope;
use crate::types::{Credentials, DnsRecord, Domain};
use crate::utils::lenient;

/// Request body: credentials flattened next to the operation payload.
#[derive(Serialize)]
pub struct Authenticated<'a, P: Serialize> {
    #[serde(flatten)]
    pub credentials: &'a Credentials,
    #[serde(flatten)]
    pub payload: &'a P,
}

/// Payload for endpoints that take nothing but credentials.
#[derive(Debug, Serialize)]
pub struct NoPayload {}

/// `domain/listAll` payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDomainsPayload {
    /// Pagination offset. Never set by this client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_labels: Option<String>,
}

/// `ping` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub your_ip: String,
}

/// `domain/listAll` response.
#[derive(Debug, Deserialize)]
pub struct ListDomainsResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub domains: Vec<Domain>,
}

/// `dns/retrieve/{domain}` response.
#[derive(Debug, Deserialize)]
pub struct RetrieveRecordsResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub records: Vec<DnsRecord>,
}

/// `dns/create/{domain}` response.
#[derive(Debug, Deserialize)]
pub struct CreateRecordResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
}
