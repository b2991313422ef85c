//! Data Browser TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、日志与后台拉取 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService::load()  // 读取配置文件 + 环境变量覆盖
//!     logging::init()             // 日志写入文件，终端留给 UI
//!     save()                      // 首次运行写出默认配置
//!     set_theme() / set_language()
//!     tokio Runtime + mpsc 通道    // 后台拉取，结果经通道回到主循环
//!     CoreService::new()          // 数据源 + 数据集
//!     App::new()                  // 每个数据集一个会话
//!     update::load_current()      // 首个数据集立即开始加载
//!     init_terminal()
//!     app::run()                  // 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use backend::{logging, AppConfig, ConfigService, CoreService, LocalConfigService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 配置
    let config_service = LocalConfigService::new();
    let config = config_service
        .load()
        .with_context(|| format!("invalid config {}", config_service.path().display()))?;

    // 2. 日志（失败时不影响使用）
    match logging::init(&backend::data_dir(), &config.log_level) {
        Ok(path) => log::info!(
            "Data Browser v{} started, logging to {}",
            env!("CARGO_PKG_VERSION"),
            path.display()
        ),
        Err(e) => eprintln!("Logging disabled: {e:#}"),
    }

    // 首次运行时写出默认配置
    if !config_service.path().exists() {
        match config_service.save(&AppConfig::default()) {
            Ok(()) => log::info!("Wrote default config to {}", config_service.path().display()),
            Err(e) => log::warn!("Could not write default config: {e:#}"),
        }
    }

    view::theme::set_theme(config.theme);
    i18n::set_language(config.language());

    // 3. 后台运行时与结果通道
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("data-browser-fetch")
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;
    let (tx, mut rx) = mpsc::unbounded_channel();

    // 4. 创建应用实例
    let service = CoreService::new(&config, runtime.handle().clone(), tx)?;
    let sessions = service.sessions()?;
    let mut app = model::App::new(sessions, Arc::new(service));
    update::load_current(&mut app);

    // 5. 运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!("Data Browser exiting");
    result
}
