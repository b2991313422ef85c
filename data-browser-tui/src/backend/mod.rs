//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责配置、日志以及与 data-browser-core 的交互。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（JSON）
//!         mod core_service;       // 核心服务入口 + 拉取分发
//!         pub mod logging;        // 文件日志
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     创建流程：
//!         1. 根据配置创建数据源（REST 或内置演示数据）
//!         2. 按配置的页大小调整预置数据集（users / products）
//!         3. 组装 ServiceContext，创建 FetchCoordinator
//!
//!     CoreService 实现 FetchDispatcher：
//!         Update 层拿到 FetchTicket 后调用 dispatch()，
//!         CoreService 在 tokio 运行时上执行 FetchCoordinator::load()，
//!         完成后把 FetchOutcome 发送到通道。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按 → 翻页
//!         ↓
//!     Update 层调用 BrowserSession::next_page()，得到 FetchTicket
//!         ↓
//!     FetchDispatcher::dispatch()（不阻塞主循环）
//!         ↓
//!     tokio 任务调用数据源，结果写入通道
//!         ↓
//!     主循环 try_recv() 取出 FetchOutcome，转为 AppMessage::FetchCompleted
//!         ↓
//!     Update 层调用 BrowserSession::apply()（过期的响应被丢弃）
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod core_service;
pub mod logging;

pub use config_service::{data_dir, AppConfig, ConfigService, LocalConfigService};
pub use core_service::{CoreService, FetchDispatcher};
