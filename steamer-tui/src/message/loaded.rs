//! 后台请求结果

use steamer_provider::{DnsRecord, Domain, ProviderError};

#[derive(Debug, Clone)]
pub enum LoadedMessage {
    Domains(Result<Vec<Domain>, ProviderError>),
    /// 带上请求时的目标域名，用于丢弃过期结果
    Records {
        domain: String,
        result: Result<Vec<DnsRecord>, ProviderError>,
    },
}
