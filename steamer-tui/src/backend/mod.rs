//! Backend 层：执行 Update 发出的请求
//!
//! 每个 FetchRequest 在 tokio 运行时上起一个任务，任务结束时恰好往
//! 主循环的通道里发送一条 `AppMessage::Loaded`。主循环本身从不等待网络。

use std::sync::Arc;

use steamer_provider::DnsProvider;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, FetchRequest, LoadedMessage};

/// 请求执行器
pub struct Backend {
    provider: Arc<dyn DnsProvider>,
    runtime: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl Backend {
    pub fn new(
        provider: Arc<dyn DnsProvider>,
        runtime: Handle,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            provider,
            runtime,
            tx,
        }
    }

    /// 在后台执行请求
    pub fn dispatch(&self, request: FetchRequest) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        tracing::debug!(?request, "dispatching");
        self.runtime.spawn(async move {
            let msg = fetch(provider.as_ref(), request).await;
            if tx.send(AppMessage::Loaded(msg)).is_err() {
                tracing::debug!("event loop gone, dropping result");
            }
        });
    }
}

/// 执行一次请求
pub async fn fetch(provider: &dyn DnsProvider, request: FetchRequest) -> LoadedMessage {
    match request {
        FetchRequest::Domains => LoadedMessage::Domains(provider.list_domains().await),
        FetchRequest::Records(domain) => {
            let result = provider.list_records(&domain).await;
            LoadedMessage::Records { domain, result }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::sync::mpsc;

    use crate::test_support::{api_error, record, FakeProvider};

    #[tokio::test]
    async fn fetch_domains() {
        let provider = FakeProvider::with_records("example.com", Vec::new());
        match fetch(&provider, FetchRequest::Domains).await {
            LoadedMessage::Domains(Ok(domains)) => {
                assert_eq!(domains.len(), 1);
                assert_eq!(domains[0].name, "example.com");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_records_is_tagged_with_domain() {
        let provider = FakeProvider::with_records(
            "example.com",
            vec![record("1", "www.example.com", "A", "192.0.2.1")],
        );
        match fetch(&provider, FetchRequest::Records("example.com".to_string())).await {
            LoadedMessage::Records { domain, result } => {
                assert_eq!(domain, "example.com");
                assert_eq!(result.unwrap().len(), 1);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_errors_are_delivered() {
        let provider = FakeProvider::failing(api_error("Invalid API key."));
        match fetch(&provider, FetchRequest::Records("example.com".to_string())).await {
            LoadedMessage::Records { domain, result } => {
                assert_eq!(domain, "example.com");
                assert_eq!(result.unwrap_err().api_message(), Some("Invalid API key."));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn dispatch_sends_exactly_one_message() {
        let provider: Arc<dyn DnsProvider> = Arc::new(FakeProvider::with_records("a.com", Vec::new()));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let backend = Backend::new(provider, Handle::current(), tx);

        backend.dispatch(FetchRequest::Domains);
        drop(backend);

        let msg = rx.recv().await.unwrap();
        assert!(matches!(msg, AppMessage::Loaded(LoadedMessage::Domains(Ok(_)))));
        assert!(rx.recv().await.is_none());
    }
}
