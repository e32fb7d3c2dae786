use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::utils::lenient;
use crate::utils::log_sanitizer::mask_secret;

// ============ Credentials ============

/// API key pair injected into every request body.
///
/// The only way to build one is [`Credentials::new`], which rejects empty values,
/// so a `Credentials` in hand is always non-empty. Immutable once constructed.
#[derive(Clone, Serialize)]
pub struct Credentials {
    #[serde(rename = "apikey")]
    api_key: String,
    #[serde(rename = "secretapikey")]
    secret_key: String,
}

impl Credentials {
    /// Build a credential pair. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// [`ProviderError::MissingCredentials`] if either value is empty.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into().trim().to_string();
        let secret_key = secret_key.into().trim().to_string();

        let missing = match (api_key.is_empty(), secret_key.is_empty()) {
            (true, true) => Some("API key and secret key are empty"),
            (true, false) => Some("API key is empty"),
            (false, true) => Some("secret key is empty"),
            (false, false) => None,
        };
        if let Some(detail) = missing {
            return Err(ProviderError::MissingCredentials {
                provider: crate::porkbun::PROVIDER_NAME.to_string(),
                detail: detail.to_string(),
            });
        }

        Ok(Self {
            api_key,
            secret_key,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &mask_secret(&self.api_key))
            .field("secret_key", &mask_secret(&self.secret_key))
            .finish()
    }
}

// ============ Domain Types ============

/// A field the registrar encodes inconsistently (`"yes"`, `"1"`, `true`, `1`, ...).
///
/// Kept as observed instead of forcing one concrete type, so decoding never fails
/// on it. Use [`Flag::as_bool`] for a best-effort interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    /// A JSON boolean.
    Bool(bool),
    /// A JSON string.
    Text(String),
    /// Anything else (numbers, objects), kept verbatim.
    Other(serde_json::Value),
}

impl Flag {
    /// Best-effort boolean reading. `None` if the value is not recognisable.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "1" | "yes" | "true" | "on" => Some(true),
                "0" | "no" | "false" | "off" | "" => Some(false),
                _ => None,
            },
            Self::Other(serde_json::Value::Number(n)) => n.as_f64().map(|v| v != 0.0),
            Self::Other(_) => None,
        }
    }
}

/// A user-defined tag attached to a domain. Read-only in this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub color: String,
}

/// A domain registered in the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Fully qualified domain name, e.g. `example.com`.
    #[serde(rename = "domain")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub tld: String,
    /// `YYYY-MM-DD HH:MM:SS`, as sent by the registrar.
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub create_date: String,
    /// `YYYY-MM-DD HH:MM:SS`, as sent by the registrar.
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub expire_date: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub security_lock: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub whois_privacy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<Flag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_local: Option<Flag>,
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub labels: Vec<Label>,
}

// ============ DNS Record Types ============

/// A DNS record as the registrar stores it.
///
/// Every field is string-typed, numeric-looking ones included, because the
/// registrar does not encode them consistently. Optional fields that are absent
/// on input stay absent on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    /// Fully qualified record name, e.g. `www.example.com`.
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::null_default")]
    pub record_type: String,
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub content: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub ttl: Option<String>,
    #[serde(
        rename = "prio",
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Input for [`DnsProvider::create_record`](crate::DnsProvider::create_record).
///
/// Serialized directly as the operation payload. `ttl` and `priority` are omitted
/// from the request when `None`, leaving the registrar's defaults in effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRecordRequest {
    /// Subdomain part only (`www`), or empty for the apex.
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(rename = "prio", skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl CreateRecordRequest {
    /// An `A` record pointing `name` at `address`.
    pub fn a_record(name: impl Into<String>, address: std::net::Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            record_type: "A".to_string(),
            content: address.to_string(),
            ttl: None,
            priority: None,
        }
    }

    /// Set the TTL in seconds.
    #[must_use]
    pub fn with_ttl(mut self, ttl: impl Into<String>) -> Self {
        self.ttl = Some(ttl.into());
        self
    }
}

/// Result of [`DnsProvider::ping`](crate::DnsProvider::ping).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingInfo {
    /// The caller's public IP as seen by the registrar.
    pub your_ip: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn credentials_reject_empty_values() {
        let err = Credentials::new("", "secret").unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredentials { .. }));
        assert!(err.to_string().contains("API key is empty"));

        let err = Credentials::new("key", "   ").unwrap_err();
        assert!(err.to_string().contains("secret key is empty"));

        let err = Credentials::new("", "").unwrap_err();
        assert!(err.to_string().contains("API key and secret key are empty"));
    }

    #[test]
    fn credentials_serialize_with_wire_names() {
        let creds = Credentials::new(" pk1_key ", "sk1_secret").unwrap();
        assert_eq!(creds.api_key(), "pk1_key");
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json, json!({"apikey": "pk1_key", "secretapikey": "sk1_secret"}));
    }

    #[test]
    fn credentials_debug_is_masked() {
        let creds = Credentials::new("pk1_0123456789", "sk1_abcdefghij").unwrap();
        let debug = format!("{creds:?}");
        assert!(!debug.contains("0123456789"));
        assert!(!debug.contains("abcdefghij"));
        assert!(debug.contains("pk1_***"));
    }

    #[test]
    fn flag_as_bool() {
        assert_eq!(Flag::Bool(true).as_bool(), Some(true));
        assert_eq!(Flag::Text("1".into()).as_bool(), Some(true));
        assert_eq!(Flag::Text("Yes".into()).as_bool(), Some(true));
        assert_eq!(Flag::Text("0".into()).as_bool(), Some(false));
        assert_eq!(Flag::Text(String::new()).as_bool(), Some(false));
        assert_eq!(Flag::Text("sometimes".into()).as_bool(), None);
        assert_eq!(Flag::Other(json!(2)).as_bool(), Some(true));
        assert_eq!(Flag::Other(json!(0)).as_bool(), Some(false));
        assert_eq!(Flag::Other(json!({"x": 1})).as_bool(), None);
    }

    #[test]
    fn domain_accepts_inconsistent_flag_types() {
        let raw = json!([
            {
                "domain": "example.com",
                "status": "ACTIVE",
                "tld": "com",
                "createDate": "2020-01-01 00:00:00",
                "expireDate": "2027-01-01 00:00:00",
                "securityLock": "1",
                "whoisPrivacy": "1",
                "autoRenew": 0,
                "notLocal": 0,
                "labels": [{"id": "27240", "title": "work", "color": "#ff0000"}]
            },
            {
                "domain": "example.net",
                "status": "ACTIVE",
                "tld": "net",
                "createDate": "2021-06-01 12:00:00",
                "expireDate": "2026-06-01 12:00:00",
                "securityLock": 1,
                "whoisPrivacy": "0",
                "autoRenew": "yes",
                "notLocal": false
            }
        ]);

        let domains: Vec<Domain> = serde_json::from_value(raw).unwrap();
        assert_eq!(domains.len(), 2);
        assert_eq!(domains[0].name, "example.com");
        assert_eq!(domains[0].auto_renew, Some(Flag::Other(json!(0))));
        assert_eq!(domains[0].labels[0].title, "work");
        assert_eq!(domains[1].security_lock, "1");
        assert_eq!(domains[1].auto_renew, Some(Flag::Text("yes".into())));
        assert_eq!(domains[1].not_local, Some(Flag::Bool(false)));
        assert!(domains[1].labels.is_empty());
    }

    #[test]
    fn dns_record_wire_shape_is_preserved() {
        let full = json!({
            "id": "106926652",
            "name": "www.example.com",
            "type": "A",
            "content": "192.0.2.1",
            "ttl": "600",
            "prio": "0",
            "notes": "web"
        });
        let record: DnsRecord = serde_json::from_value(full.clone()).unwrap();
        assert_eq!(record.priority.as_deref(), Some("0"));
        assert_eq!(serde_json::to_value(&record).unwrap(), full);

        let sparse = json!({
            "id": "106926653",
            "name": "example.com",
            "type": "TXT",
            "content": "v=spf1 -all"
        });
        let record: DnsRecord = serde_json::from_value(sparse.clone()).unwrap();
        assert_eq!(record.ttl, None);
        assert_eq!(record.priority, None);
        assert_eq!(serde_json::to_value(&record).unwrap(), sparse);
    }

    #[test]
    fn dns_record_null_optionals_are_dropped() {
        let record: DnsRecord = serde_json::from_value(json!({
            "id": 7,
            "name": "example.com",
            "type": "MX",
            "content": "mail.example.com",
            "ttl": 3600,
            "prio": null,
            "notes": null
        }))
        .unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.ttl.as_deref(), Some("3600"));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "id": "7",
                "name": "example.com",
                "type": "MX",
                "content": "mail.example.com",
                "ttl": "3600"
            })
        );
    }

    #[test]
    fn explicit_nulls_decode_as_empty() {
        let domain: Domain = serde_json::from_value(json!({
            "domain": "example.com",
            "status": null,
            "tld": "com",
            "createDate": null,
            "expireDate": "2027-01-01 00:00:00",
            "labels": null
        }))
        .unwrap();
        assert_eq!(domain.status, "");
        assert_eq!(domain.create_date, "");
        assert!(domain.labels.is_empty());

        let label: Label =
            serde_json::from_value(json!({"id": 1, "title": "prod", "color": null})).unwrap();
        assert_eq!(label.title, "prod");
        assert_eq!(label.color, "");

        let record: DnsRecord = serde_json::from_value(json!({
            "id": "106926652",
            "name": "www.example.com",
            "type": null,
            "content": null
        }))
        .unwrap();
        assert_eq!(record.record_type, "");
        assert_eq!(record.content, "");
    }

    #[test]
    fn create_request_omits_unset_fields() {
        let req = CreateRecordRequest::a_record("www", "192.0.2.10".parse().unwrap());
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"name": "www", "type": "A", "content": "192.0.2.10"})
        );

        let req = req.with_ttl("300");
        assert_eq!(serde_json::to_value(&req).unwrap()["ttl"], "300");
    }
}
