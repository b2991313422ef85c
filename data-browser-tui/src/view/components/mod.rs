//! 可复用的 UI 组件

pub mod filter_bar;
pub mod modal;
pub mod navigation;
pub mod pager;
pub mod statusbar;
pub mod table;
pub mod tabs;
