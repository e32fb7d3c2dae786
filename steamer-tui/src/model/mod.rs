//! Model 层：应用状态
//!
//!     mod app;    // App：浏览器的全部状态
//!     mod page;   // Page：当前显示的列表

mod app;
mod page;

pub use app::App;
pub use page::Page;
