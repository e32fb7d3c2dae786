//! 后台请求

/// Update 交给 Backend 执行的请求。每个请求恰好产生一条 `LoadedMessage`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Domains,
    Records(String),
}
