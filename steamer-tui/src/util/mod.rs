//! 工具函数

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
