//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改状态。每一轮主循环都从头渲染整个界面。
//!
//!     layout.rs       标题栏 + 左侧导航 + 右侧数据集页面 + 状态栏 + 弹窗
//!     theme.rs        颜色方案（Dark / Light）
//!     components/     导航、状态栏、弹窗、表格、过滤栏、分页栏、标签栏
//!     pages/          数据集页面（Users / Products 共用）
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
