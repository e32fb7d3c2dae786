//! 后台结果更新
//!
//! 结果只有与 `app.pending` 一致时才会生效，其余一律丢弃：
//! 用户在记录请求返回前按了返回，迟到的记录不会把页面切回 Records。

use steamer_provider::{DnsRecord, Domain, ProviderError};

use crate::message::{FetchRequest, LoadedMessage};
use crate::model::{App, Page};

pub fn update(app: &mut App, msg: LoadedMessage) {
    match msg {
        LoadedMessage::Domains(result) => domains_loaded(app, result),
        LoadedMessage::Records { domain, result } => records_loaded(app, domain, result),
    }
}

fn domains_loaded(app: &mut App, result: Result<Vec<Domain>, ProviderError>) {
    if app.pending != Some(FetchRequest::Domains) {
        tracing::debug!("discarding stale domain list");
        return;
    }
    app.finish_fetch();

    match result {
        Ok(domains) => {
            tracing::info!(count = domains.len(), "domains loaded");
            app.domains = domains;
            app.domains_loaded = true;
            app.error = None;
            if app.page == Page::Domains {
                clamp_cursor(app);
            }
        }
        Err(error) => {
            report(&error);
            app.error = Some(error);
        }
    }
}

fn records_loaded(
    app: &mut App,
    domain: String,
    result: Result<Vec<DnsRecord>, ProviderError>,
) {
    if !matches!(&app.pending, Some(FetchRequest::Records(target)) if *target == domain) {
        tracing::debug!(domain = %domain, "discarding stale records");
        return;
    }
    app.finish_fetch();

    match result {
        Ok(records) => {
            tracing::info!(domain = %domain, count = records.len(), "records loaded");
            app.page = Page::Records;
            app.records = records;
            app.cursor = 0;
            app.active_domain = Some(domain);
            app.error = None;
        }
        Err(error) => {
            report(&error);
            app.error = Some(error);
        }
    }
}

fn clamp_cursor(app: &mut App) {
    app.cursor = app.cursor.min(app.list_len().saturating_sub(1));
}

fn report(error: &ProviderError) {
    if error.is_expected() {
        tracing::warn!("{error}");
    } else {
        tracing::error!("{error}");
    }
}
