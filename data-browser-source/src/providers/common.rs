//! 数据源公共工具函数

use std::time::Duration;

use reqwest::Client;

use crate::error::{Result, SourceError};

/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(
    source_id: &str,
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<Client> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .user_agent(concat!("data-browser/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| SourceError::InvalidParameter {
            source_id: source_id.to_string(),
            param: "http_client".to_string(),
            detail: e.to_string(),
        })
}

/// 解析并校验基础 URL（仅允许 http/https）
pub fn parse_base_url(source_id: &str, raw: &str) -> Result<url::Url> {
    let invalid = |detail: String| SourceError::InvalidParameter {
        source_id: source_id.to_string(),
        param: "base_url".to_string(),
        detail,
    };

    let parsed = url::Url::parse(raw.trim()).map_err(|e| invalid(format!("{raw}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
