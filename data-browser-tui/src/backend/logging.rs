//! 文件日志
//!
//! 终端被 UI 占用，日志写入 `<data_dir>/data-browser/data-browser.log`。
//! 库 crate 通过 `log` 门面输出，由 subscriber 的 log 桥接一并收集。
//! `RUST_LOG` 优先于配置文件中的 `logLevel`。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "data-browser.log";

/// 初始化日志，返回日志文件路径
pub fn init(dir: &Path, level: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(build_filter(level)?)
        .try_init()?;

    Ok(path)
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid logLevel '{level}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_levels_and_directives() {
        assert!(build_filter("debug").is_ok());
        assert!(build_filter("data_browser_source=debug,warn").is_ok());
    }
}
