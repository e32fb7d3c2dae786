//! 页面定义

/// 当前显示的列表
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    /// 账户下的域名
    #[default]
    Domains,
    /// 某个域名的 DNS 记录
    Records,
}
