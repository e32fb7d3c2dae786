//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方；按键与后台结果都经由 `update()` 串行进入，
//! 因此 App 不需要任何锁。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;    // 列表移动与确认
//!         mod loaded;     // 后台请求结果
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<FetchRequest>
//!
//! 返回值是需要 Backend 发起的请求（若有）。

mod content;
mod loaded;

use crate::message::{AppMessage, FetchRequest};
use crate::model::{App, Page};

/// 主更新函数
pub fn update(app: &mut App, msg: AppMessage) -> Option<FetchRequest> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }
        AppMessage::GoBack => go_back(app),
        AppMessage::Refresh => refresh(app),
        AppMessage::Content(content_msg) => content::update(app, content_msg),
        AppMessage::Loaded(loaded_msg) => {
            loaded::update(app, loaded_msg);
            None
        }
        AppMessage::Noop => None,
    }
}

/// 返回域名列表
///
/// 清除错误并放弃在途的记录请求。
/// 以 `--domain` 启动的会话还没有域名列表，此时补拉一次。
fn go_back(app: &mut App) -> Option<FetchRequest> {
    if app.awaiting_records() {
        tracing::debug!(domain = ?app.active_domain, "records request abandoned");
        app.finish_fetch();
    }
    app.error = None;

    match app.page {
        Page::Domains => {
            app.active_domain = None;
            None
        }
        Page::Records => {
            app.page = Page::Domains;
            app.records.clear();
            app.cursor = 0;
            app.active_domain = None;
            if !app.domains_loaded && !app.loading {
                return Some(app.start_fetch(FetchRequest::Domains));
            }
            None
        }
    }
}

/// 重新拉取当前页面
fn refresh(app: &mut App) -> Option<FetchRequest> {
    if app.loading {
        return None;
    }
    let request = match (app.page, &app.active_domain) {
        (Page::Records, Some(domain)) => FetchRequest::Records(domain.clone()),
        _ => FetchRequest::Domains,
    };
    app.error = None;
    Some(app.start_fetch(request))
}
