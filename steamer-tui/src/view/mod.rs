//! View 层：UI 渲染
//!
//! `browser_lines()` 把 App 投影成文本行，不做 I/O 也不修改状态；
//! `render()` 把这些行连同标题栏、状态栏画到终端上。

pub mod format;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
