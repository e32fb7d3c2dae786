//! Event 层：输入处理
//!
//!     mod handler;    // 轮询终端事件并翻译成 AppMessage
//!     mod keymap;     // 快捷键定义

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
