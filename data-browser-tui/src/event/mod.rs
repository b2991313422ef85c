//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 把终端的原始事件（crossterm::Event）翻译成 AppMessage。
//! 不修改任何状态，只读取 App 来判断按键在当前上下文中的含义。
//!
//!
//! 按键的优先级：
//!     1. 弹窗打开时，所有按键交给弹窗
//!     2. Ctrl+C 总是退出
//!     3. 编辑过滤条件时，可打印字符作为输入
//!     4. 全局快捷键（? / Alt+r / q / Esc / Tab）
//!     5. 按焦点分发到导航面板或数据集页面
//!
//! 快捷键定义在 keymap.rs 的 DefaultKeymap 中。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
