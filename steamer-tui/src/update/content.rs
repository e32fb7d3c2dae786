//! 内容区更新：列表移动与确认

use crate::message::{ContentMessage, FetchRequest};
use crate::model::{App, Page};

pub fn update(app: &mut App, msg: ContentMessage) -> Option<FetchRequest> {
    match msg {
        ContentMessage::SelectPrevious => {
            select_previous(app);
            None
        }
        ContentMessage::SelectNext => {
            select_next(app);
            None
        }
        ContentMessage::SelectFirst => {
            app.cursor = 0;
            None
        }
        ContentMessage::SelectLast => {
            app.cursor = app.list_len().saturating_sub(1);
            None
        }
        ContentMessage::Confirm => open_selected(app),
    }
}

/// 上移，不回绕
fn select_previous(app: &mut App) {
    if app.cursor > 0 {
        app.cursor -= 1;
    }
}

/// 下移，不越界
fn select_next(app: &mut App) {
    if app.cursor + 1 < app.list_len() {
        app.cursor += 1;
    }
}

/// 打开选中域名的记录
///
/// 已有请求在途或正在显示错误时忽略。
fn open_selected(app: &mut App) -> Option<FetchRequest> {
    if app.page != Page::Domains || app.loading || app.error.is_some() {
        return None;
    }
    let name = app.selected_domain()?.name.clone();
    tracing::debug!(domain = %name, "opening records");
    app.active_domain = Some(name.clone());
    Some(app.start_fetch(FetchRequest::Records(name)))
}
