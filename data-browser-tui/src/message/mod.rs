//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 按键由 Event 层翻译成 Message，后台拉取的结果由主循环包装成
//! `AppMessage::FetchCompleted`，二者走同一条 update 路径。
//!
//!
//! 有模块结构：
//!     app.rs          主消息 AppMessage
//!     content.rs      内容面板（数据集页面）子消息
//!     modal.rs        弹窗子消息
//!     navigation.rs   导航栏子消息
//!

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
