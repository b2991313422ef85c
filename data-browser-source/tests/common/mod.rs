//! 共享测试工具：本地 HTTP 测试服务器与断言宏

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use data_browser_source::{RestOptions, RestSource};

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试服务器的一次响应
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub retry_after: Option<u64>,
    pub delay: Option<Duration>,
}

impl Reply {
    pub fn json(body: &serde_json::Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            retry_after: None,
            delay: None,
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            retry_after: None,
            delay: None,
        }
    }

    #[must_use]
    pub fn retry_after(mut self, secs: u64) -> Self {
        self.retry_after = Some(secs);
        self
    }

    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// 本地 HTTP 测试服务器，按顺序返回预设响应，并记录收到的请求 URL
pub struct TestServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// 启动服务器；预设响应用完后重复最后一个
    pub fn start(replies: Vec<Reply>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test server");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("test server listens on TCP");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            let mut index = 0;
            for request in server.incoming_requests() {
                seen.lock().expect("request log").push(request.url().to_string());
                let Some(reply) = replies.get(index).or_else(|| replies.last()).cloned() else {
                    break;
                };
                index += 1;
                if let Some(delay) = reply.delay {
                    thread::sleep(delay);
                }
                let content_type =
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .expect("static header");
                let mut response = tiny_http::Response::from_string(reply.body)
                    .with_status_code(reply.status)
                    .with_header(content_type);
                if let Some(secs) = reply.retry_after {
                    let header = tiny_http::Header::from_bytes(
                        &b"Retry-After"[..],
                        secs.to_string().as_bytes(),
                    )
                    .expect("retry-after header");
                    response = response.with_header(header);
                }
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// 已收到的请求 URL（路径 + 查询串）
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log").clone()
    }

    /// 指向本服务器的 `RestSource`
    pub fn source(&self, max_retries: u32) -> RestSource {
        let mut options = RestOptions::new(self.base_url.clone());
        options.max_retries = max_retries;
        options.request_timeout = Duration::from_secs(5);
        RestSource::new(options).expect("rest source")
    }
}

/// 生成 dummyjson 形状的产品分页响应体
pub fn products_body(ids: std::ops::RangeInclusive<u32>, total: u32, skip: u32) -> serde_json::Value {
    let items: Vec<serde_json::Value> = ids
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("Product {id}"),
                "brand": "Acme",
                "category": "laptops",
                "price": 999.99
            })
        })
        .collect();
    let limit = u32::try_from(items.len()).unwrap_or(0);
    serde_json::json!({
        "products": items,
        "total": total,
        "skip": skip,
        "limit": limit
    })
}
