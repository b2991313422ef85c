//! 配置服务
//!
//! 配置文件为 JSON（camelCase 键），默认位于 `<config_dir>/data-browser/config.json`。
//! 文件不存在时使用默认值。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use data_browser_core::types::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES};
use data_browser_source::{
    parse_base_url, SourceConfig, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 覆盖配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "DATA_BROWSER_CONFIG";
/// 覆盖 `baseUrl` 的环境变量
pub const BASE_URL_ENV: &str = "DATA_BROWSER_BASE_URL";

const APP_DIR: &str = "data-browser";
const CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub max_retries: u32,
    pub page_sizes: Vec<u32>,
    pub default_page_size: u32,
    pub theme: Theme,
    pub language: String,
    pub log_level: String,
    /// 使用内置演示数据，不访问网络
    pub demo: bool,
    /// 演示数据源的模拟延迟（毫秒）
    pub demo_latency_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dummyjson.com".to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            max_retries: 0,
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
            theme: Theme::Dark,
            language: "en-US".to_string(),
            log_level: "info".to_string(),
            demo: false,
            demo_latency_ms: 0,
        }
    }
}

impl AppConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.page_sizes.is_empty() {
            bail!("pageSizes must not be empty");
        }
        if self.page_sizes.contains(&0) {
            bail!("pageSizes must be strictly positive, got {:?}", self.page_sizes);
        }
        if !self.page_sizes.contains(&self.default_page_size) {
            bail!(
                "defaultPageSize {} is not one of {:?}",
                self.default_page_size,
                self.page_sizes
            );
        }
        if self.request_timeout_secs == 0 || self.connect_timeout_secs == 0 {
            bail!("timeouts must be positive");
        }
        if Language::from_code(&self.language).is_none() {
            bail!("unsupported language '{}'", self.language);
        }
        if !self.demo {
            parse_base_url("config", &self.base_url)?;
        }
        Ok(())
    }

    /// 当前语言（未知代码回退到英文）
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    /// 构造数据源配置
    pub fn source_config(&self) -> SourceConfig {
        if self.demo {
            SourceConfig::Memory {
                latency_ms: self.demo_latency_ms,
            }
        } else {
            SourceConfig::Rest {
                base_url: self.base_url.clone(),
                connect_timeout_secs: self.connect_timeout_secs,
                request_timeout_secs: self.request_timeout_secs,
                max_retries: self.max_retries,
            }
        }
    }

    /// 应用环境变量覆盖
    fn apply_overrides(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认路径（或 `DATA_BROWSER_CONFIG` 指定的路径）
    pub fn new() -> Self {
        Self::with_path(
            std::env::var_os(CONFIG_PATH_ENV).map_or_else(default_config_path, PathBuf::from),
        )
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = self.read_file()?;
        config.apply_overrides(std::env::var(BASE_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

/// 应用数据目录（日志等）
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("data-browser-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_sizes, vec![5, 10, 20, 50]);
        assert_eq!(config.default_page_size, 5);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"baseUrl":"http://localhost:8080","theme":"light"}"#)
                .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.request_timeout_secs, 15);
        assert!(!config.demo);
    }

    #[test]
    fn default_size_must_be_in_set() {
        let config = AppConfig {
            page_sizes: vec![10, 20],
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_size_and_zero_timeout_rejected() {
        let zero_size = AppConfig {
            page_sizes: vec![0, 5],
            ..AppConfig::default()
        };
        assert!(zero_size.validate().is_err());

        let zero_timeout = AppConfig {
            request_timeout_secs: 0,
            ..AppConfig::default()
        };
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn bad_base_url_rejected_unless_demo() {
        let mut config = AppConfig {
            base_url: "ftp://example.com".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
        config.demo = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_language_rejected() {
        let config = AppConfig {
            language: "fr-FR".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn env_override_replaces_base_url() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("http://127.0.0.1:9000".to_string()));
        assert_eq!(config.base_url, "http://127.0.0.1:9000");

        config.apply_overrides(Some("  ".to_string()));
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn source_config_follows_demo_flag() {
        let mut config = AppConfig::default();
        assert!(matches!(config.source_config(), SourceConfig::Rest { .. }));
        config.demo = true;
        config.demo_latency_ms = 250;
        assert_eq!(
            config.source_config(),
            SourceConfig::Memory { latency_ms: 250 }
        );
    }

    #[test]
    fn missing_file_yields_defaults_and_save_round_trips() {
        let service = LocalConfigService::with_path(temp_path("config.json"));
        let _ = fs::remove_file(service.path());
        assert_eq!(service.read_file().unwrap(), AppConfig::default());

        let config = AppConfig {
            max_retries: 2,
            demo: true,
            ..AppConfig::default()
        };
        service.save(&config).unwrap();
        assert_eq!(service.read_file().unwrap(), config);
        let _ = fs::remove_file(service.path());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let service = LocalConfigService::with_path(temp_path("broken.json"));
        if let Some(dir) = service.path().parent() {
            fs::create_dir_all(dir).unwrap();
        }
        fs::write(service.path(), "{ not json").unwrap();
        assert!(service.read_file().is_err());
        let _ = fs::remove_file(service.path());
    }
}
