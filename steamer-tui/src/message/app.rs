//! 主消息

use super::{ContentMessage, LoadedMessage};

#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,
    /// 返回域名列表；在域名页则取消正在进行的记录请求
    GoBack,
    /// 重新拉取当前页面
    Refresh,
    /// 列表内操作
    Content(ContentMessage),
    /// 后台请求完成
    Loaded(LoadedMessage),
    /// 无操作
    Noop,
}
