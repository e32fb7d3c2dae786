//! 测试用的假数据与假 Provider

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use steamer_provider::{
    CreateRecordRequest, DnsProvider, DnsRecord, Domain, Label, PingInfo, ProviderError, Result,
};

pub fn domain(name: &str) -> Domain {
    Domain {
        name: name.to_string(),
        status: "ACTIVE".to_string(),
        tld: name.rsplit('.').next().unwrap_or_default().to_string(),
        create_date: "2020-01-01 00:00:00".to_string(),
        expire_date: "2027-01-01 00:00:00".to_string(),
        security_lock: "1".to_string(),
        whois_privacy: "1".to_string(),
        auto_renew: None,
        not_local: None,
        labels: Vec::new(),
    }
}

pub fn labelled(name: &str, label: &str) -> Domain {
    Domain {
        labels: vec![Label {
            id: "1".to_string(),
            title: label.to_string(),
            color: "#ff0000".to_string(),
        }],
        ..domain(name)
    }
}

pub fn record(id: &str, name: &str, record_type: &str, content: &str) -> DnsRecord {
    DnsRecord {
        id: id.to_string(),
        name: name.to_string(),
        record_type: record_type.to_string(),
        content: content.to_string(),
        ttl: Some("600".to_string()),
        priority: None,
        notes: None,
    }
}

pub fn api_error(message: &str) -> ProviderError {
    ProviderError::ApiError {
        provider: "porkbun".to_string(),
        message: message.to_string(),
        status: None,
    }
}

/// 内存中的 Provider
#[derive(Default)]
pub struct FakeProvider {
    pub domains: Vec<Domain>,
    pub records: HashMap<String, Vec<DnsRecord>>,
    /// 设置后所有操作都返回该错误
    pub failure: Option<ProviderError>,
    pub created: Mutex<Vec<(String, CreateRecordRequest)>>,
    pub deleted: Mutex<Vec<(String, String)>>,
}

impl FakeProvider {
    pub fn with_records(name: &str, records: Vec<DnsRecord>) -> Self {
        let mut provider = Self::default();
        provider.domains.push(domain(name));
        provider.records.insert(name.to_string(), records);
        provider
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DnsProvider for FakeProvider {
    fn id(&self) -> &'static str {
        "fake"
    }

    async fn ping(&self) -> Result<PingInfo> {
        self.check()?;
        Ok(PingInfo {
            your_ip: "203.0.113.1".to_string(),
        })
    }

    async fn list_domains(&self) -> Result<Vec<Domain>> {
        self.check()?;
        Ok(self.domains.clone())
    }

    async fn list_records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        self.check()?;
        self.records
            .get(domain)
            .cloned()
            .ok_or_else(|| api_error("Invalid domain."))
    }

    async fn create_record(&self, domain: &str, req: &CreateRecordRequest) -> Result<String> {
        self.check()?;
        let mut created = self.created.lock().unwrap();
        created.push((domain.to_string(), req.clone()));
        Ok(format!("{}", 1000 + created.len()))
    }

    async fn delete_record(&self, domain: &str, record_id: &str) -> Result<()> {
        self.check()?;
        self.deleted
            .lock()
            .unwrap()
            .push((domain.to_string(), record_id.to_string()));
        Ok(())
    }
}
