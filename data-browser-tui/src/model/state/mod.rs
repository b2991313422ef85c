//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod browser;
mod modal;

pub use browser::BrowserState;
pub use modal::{Modal, ModalState};
