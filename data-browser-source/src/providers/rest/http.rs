//! REST 请求与响应解析

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{Result, SourceError};
use crate::http_client::HttpUtils;
use crate::types::{PageRequest, PageResponse, Record};

use super::{RestSource, SOURCE_ID};

impl RestSource {
    /// 构建分页请求 URL
    pub(crate) fn page_url(&self, request: &PageRequest) -> Result<url::Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            request.endpoint_path()
        );
        let mut url = url::Url::parse(&joined).map_err(|e| SourceError::InvalidParameter {
            source_id: SOURCE_ID.to_string(),
            param: "collection".to_string(),
            detail: format!("{joined}: {e}"),
        })?;
        url.query_pairs_mut()
            .append_pair("limit", &request.limit.to_string())
            .append_pair("skip", &request.skip.to_string());
        Ok(url)
    }

    /// 执行 GET 请求并解析分页响应
    pub(crate) async fn get_page(&self, request: &PageRequest) -> Result<PageResponse> {
        let url = self.page_url(request)?;
        let builder = self.client.get(url.clone());

        let (status, body) = HttpUtils::execute_request_with_retry(
            builder,
            SOURCE_ID,
            "GET",
            url.as_str(),
            self.max_retries,
        )
        .await?;

        if status == 404 {
            return Err(SourceError::NotFound {
                source_id: SOURCE_ID.to_string(),
                collection: request.endpoint_path(),
            });
        }
        if !(200..300).contains(&status) {
            log::error!("[{SOURCE_ID}] Unexpected HTTP {status} for {url}");
            return Err(SourceError::HttpStatus {
                source_id: SOURCE_ID.to_string(),
                status,
                raw_message: Some(body),
            });
        }

        let value: Value = HttpUtils::parse_json(&body, SOURCE_ID)?;
        decode_page(value, request)
    }
}

/// 从响应体中提取 `{<itemsField>, total, skip, limit}`
pub(crate) fn decode_page(value: Value, request: &PageRequest) -> Result<PageResponse> {
    let parse_error = |detail: String| SourceError::ParseError {
        source_id: SOURCE_ID.to_string(),
        detail,
    };

    let Value::Object(mut body) = value else {
        return Err(parse_error("response body is not an object".to_string()));
    };

    let items_field = &request.collection.items_field;
    let raw_items = body
        .remove(items_field)
        .ok_or_else(|| parse_error(format!("missing field '{items_field}'")))?;
    let items: Vec<Record> = serde_json::from_value(raw_items)
        .map_err(|e| parse_error(format!("field '{items_field}': {e}")))?;

    // id 在一页内必须唯一
    let mut seen = HashSet::with_capacity(items.len());
    if let Some(dup) = items.iter().find(|r| !seen.insert(r.id().to_string())) {
        return Err(parse_error(format!(
            "duplicate id {} in '{items_field}'",
            dup.id()
        )));
    }

    let total = read_u32(&body, "total")
        .ok_or_else(|| parse_error("missing or invalid field 'total'".to_string()))?;
    let skip = read_u32(&body, "skip").unwrap_or(request.skip);
    let limit = read_u32(&body, "limit").unwrap_or(request.limit);

    Ok(PageResponse::new(items, total, skip, limit))
}

fn read_u32(body: &serde_json::Map<String, Value>, key: &str) -> Option<u32> {
    body.get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Collection;
    use serde_json::json;

    fn products_request(category: Option<&str>) -> PageRequest {
        PageRequest::for_page(
            Collection::new("products", "products"),
            2,
            10,
            category.map(str::to_string),
        )
    }

    #[test]
    fn decodes_items_field() {
        let body = json!({
            "products": [{"id": 1, "title": "Phone"}, {"id": 2, "title": "Laptop"}],
            "total": 194,
            "skip": 10,
            "limit": 10
        });
        let page = decode_page(body, &products_request(None));
        assert!(matches!(&page, Ok(p) if p.items.len() == 2 && p.total == 194 && p.skip == 10));
    }

    #[test]
    fn missing_items_field_is_parse_error() {
        let body = json!({"users": [], "total": 0});
        let page = decode_page(body, &products_request(None));
        assert!(matches!(page, Err(SourceError::ParseError { .. })));
    }

    #[test]
    fn item_without_id_is_parse_error() {
        let body = json!({"products": [{"title": "x"}], "total": 1});
        let page = decode_page(body, &products_request(None));
        assert!(matches!(page, Err(SourceError::ParseError { .. })));
    }

    #[test]
    fn duplicate_id_is_parse_error() {
        let body = json!({
            "products": [{"id": 7, "title": "a"}, {"id": 8}, {"id": 7, "title": "b"}],
            "total": 3
        });
        let page = decode_page(body, &products_request(None));
        assert!(
            matches!(&page, Err(SourceError::ParseError { detail, .. }) if detail.contains("duplicate id 7"))
        );
    }

    #[test]
    fn skip_and_limit_fall_back_to_request() {
        let body = json!({"products": [], "total": 0});
        let page = decode_page(body, &products_request(Some("laptops")));
        assert!(matches!(&page, Ok(p) if p.skip == 10 && p.limit == 10 && p.items.is_empty()));
    }

    #[test]
    fn page_url_shapes() {
        let source = RestSource::new(super::super::RestOptions::new("https://dummyjson.com/"));
        let Ok(source) = source else {
            panic!("source should build");
        };
        let all = source.page_url(&products_request(None)).map(|u| u.to_string());
        let laptops = source
            .page_url(&products_request(Some("laptops")))
            .map(|u| u.to_string());
        assert_eq!(
            all.ok().as_deref(),
            Some("https://dummyjson.com/products?limit=10&skip=10")
        );
        assert_eq!(
            laptops.ok().as_deref(),
            Some("https://dummyjson.com/products/category/laptops?limit=10&skip=10")
        );
    }
}
