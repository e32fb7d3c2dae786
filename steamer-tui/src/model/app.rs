//! 应用主状态
//!
//! App {
//!     should_quit,        // 主循环在下一次绘制后退出
//!     page,               // Domains | Records
//!     domains, records,   // 最近一次成功拉取的列表；records 只在 Records 页非空
//!     cursor,             // 当前列表中的选中行
//!     active_domain,      // 正在查看或正在请求的域名
//!     loading, error,     // 请求状态
//!     pending,            // 正在等待的请求；结果与之不符时丢弃
//!     domains_loaded,     // 是否成功拉取过域名列表
//!     today,              // 渲染到期天数用的日期，创建时取一次
//! }

use chrono::NaiveDate;
use steamer_provider::{DnsRecord, Domain, ProviderError};

use crate::message::FetchRequest;

use super::Page;

/// 应用状态
#[derive(Debug)]
pub struct App {
    pub should_quit: bool,
    pub page: Page,
    pub domains: Vec<Domain>,
    pub records: Vec<DnsRecord>,
    pub cursor: usize,
    pub active_domain: Option<String>,
    pub loading: bool,
    pub error: Option<ProviderError>,
    pub pending: Option<FetchRequest>,
    pub domains_loaded: bool,
    pub today: NaiveDate,
}

impl App {
    /// 创建应用
    ///
    /// 指定 `initial_domain` 时直接进入该域名的记录页。
    pub fn new(initial_domain: Option<String>, today: NaiveDate) -> Self {
        Self {
            should_quit: false,
            page: if initial_domain.is_some() {
                Page::Records
            } else {
                Page::Domains
            },
            domains: Vec::new(),
            records: Vec::new(),
            cursor: 0,
            active_domain: initial_domain,
            loading: false,
            error: None,
            pending: None,
            domains_loaded: false,
            today,
        }
    }

    /// 会话的第一个请求
    pub fn begin(&mut self) -> FetchRequest {
        let request = match (&self.page, &self.active_domain) {
            (Page::Records, Some(domain)) => FetchRequest::Records(domain.clone()),
            _ => FetchRequest::Domains,
        };
        self.start_fetch(request)
    }

    /// 标记请求开始，返回同一个请求
    pub fn start_fetch(&mut self, request: FetchRequest) -> FetchRequest {
        self.loading = true;
        self.pending = Some(request.clone());
        request
    }

    /// 结束等待中的请求
    pub fn finish_fetch(&mut self) {
        self.loading = false;
        self.pending = None;
    }

    /// 当前列表长度
    pub fn list_len(&self) -> usize {
        match self.page {
            Page::Domains => self.domains.len(),
            Page::Records => self.records.len(),
        }
    }

    /// 域名页中光标所在的域名
    pub fn selected_domain(&self) -> Option<&Domain> {
        match self.page {
            Page::Domains => self.domains.get(self.cursor),
            Page::Records => None,
        }
    }

    /// 是否在等待某个域名的记录
    pub fn awaiting_records(&self) -> bool {
        matches!(self.pending, Some(FetchRequest::Records(_)))
    }
}
