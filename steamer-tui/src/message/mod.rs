//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event / Backend → Update 之间的桥梁。
//! 按键被翻译成 AppMessage / ContentMessage；
//! 后台请求完成后以 LoadedMessage 的形式回到主循环。
//! Update 消费消息时可能产生一个 FetchRequest，交给 Backend 执行。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // 主消息
//!         mod content;    // 列表内的移动与确认
//!         mod loaded;     // 后台请求结果
//!         mod fetch;      // Update 发出的请求

mod app;
mod content;
mod fetch;
mod loaded;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use fetch::FetchRequest;
pub use loaded::LoadedMessage;
