//! 页面渲染

pub mod domains;
pub mod records;
