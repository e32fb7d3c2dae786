//! steamer
//!
//! Porkbun 域名与 DNS 记录管理：一次性子命令 + 交互式浏览器 (`steamer tui`)。
//!
//! ## 架构
//!
//! 交互式浏览器采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 后台请求 (`backend/`)
//!
//! main.rs 的执行顺序：
//!
//!     Cli::parse()                // 解析参数
//!     logging::init()             // 子命令写 stderr，TUI 写日志文件
//!     config::load()              // 凭据与主题
//!     PorkbunClient::new()        // 构造 Provider
//!     子命令 → runtime.block_on(cli::execute())
//!     tui    → init_terminal() / app::run() / restore_terminal()

mod app;
mod backend;
mod cli;
mod config;
mod event;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use steamer_provider::{DnsProvider, PorkbunClient};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use backend::Backend;
use cli::{Cli, Command};
use logging::LogTarget;
use util::{init_terminal, restore_terminal};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("{e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let target = match cli.command {
        Command::Tui { .. } => LogTarget::File(logging::default_log_dir()),
        _ => LogTarget::Stderr,
    };
    let _log_guard = logging::init(cli.verbose, target)?;

    let settings = config::load(cli.config.as_deref())?;
    match &settings.source {
        Some(path) => tracing::info!(path = %path.display(), "using config file"),
        None => tracing::info!("no config file, credentials from environment"),
    }
    view::theme::set_theme(settings.theme);

    let provider: Arc<dyn DnsProvider> = Arc::new(PorkbunClient::new(settings.credentials)?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let today = Local::now().date_naive();

    match cli.command {
        Command::Tui { domain } => run_tui(&runtime, provider, domain, today),
        command => runtime.block_on(cli::execute(
            command,
            provider.as_ref(),
            &mut io::stdout().lock(),
            today,
        )),
    }
}

/// 运行交互式浏览器
fn run_tui(
    runtime: &Runtime,
    provider: Arc<dyn DnsProvider>,
    domain: Option<String>,
    today: NaiveDate,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = Backend::new(provider, runtime.handle().clone(), tx);
    let mut app = model::App::new(domain, today);

    // 1. 初始化终端
    let mut terminal = init_terminal()?;

    // 2. 运行主循环
    let result = app::run(&mut terminal, &mut app, &backend, &mut rx);

    // 3. 恢复终端（无论成功失败都执行）
    let restored = restore_terminal(&mut terminal);

    finish(result, restored)
}

/// 合并主循环与终端恢复的结果，主循环的错误优先
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let (Err(_), Err(e)) = (&result, &restored) {
        tracing::warn!("failed to restore terminal: {e:#}");
    }
    result.and(restored)
}
