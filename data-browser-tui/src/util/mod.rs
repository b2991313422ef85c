//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：终端的初始化和恢复。
//!
//!     init_terminal()         启用原始模式，进入备用屏幕
//!     restore_terminal()      禁用原始模式，离开备用屏幕，显示光标
//!
//! 注意：无论主循环正常退出还是返回错误，都必须先调用 restore_terminal()，
//!       否则终端会停留在原始模式。
//!

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
