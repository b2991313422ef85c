use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============ Records ============

/// A single row returned by a record source.
///
/// Records are opaque mappings from column key to JSON value. The only field the browser relies
/// on is `id`, which must be present and non-null; deserialization rejects records without one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Record {
    fields: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        match fields.get("id") {
            None | Some(Value::Null) => Err("record is missing required field 'id'".to_string()),
            Some(_) => Ok(Self { fields }),
        }
    }
}

impl From<Record> for Map<String, Value> {
    fn from(record: Record) -> Self {
        record.fields
    }
}

impl Record {
    /// Build a record from an arbitrary JSON value.
    ///
    /// Returns `None` unless the value is an object carrying a non-null `id`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Self::try_from(fields).ok(),
            _ => None,
        }
    }

    /// The record identity.
    pub fn id(&self) -> &Value {
        // try_from guarantees the key is present
        self.fields.get("id").unwrap_or(&Value::Null)
    }

    /// Raw value at `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Value at `key` coerced to display text.
    ///
    /// - strings are returned as-is
    /// - integral numbers print without a fractional part (`4.0` -> `"4"`)
    /// - booleans print as `true` / `false`
    /// - arrays of scalars are joined with `", "`
    /// - `null`, objects and absent keys yield `None`
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields.get(key).and_then(value_text)
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter(|v| !matches!(v, Value::Array(_)))
                .filter_map(value_text)
                .collect();
            Some(parts.join(", "))
        }
        Value::Null | Value::Object(_) => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

// ============ Page Requests ============

/// Identifies a remote collection and the field its items are delivered under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Path segment below the base URL (e.g. `"users"`).
    pub path: String,
    /// Name of the array field in the response body (e.g. `"users"`).
    pub items_field: String,
}

impl Collection {
    pub fn new(path: impl Into<String>, items_field: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            items_field: items_field.into(),
        }
    }
}

/// Parameters for fetching one page of a collection.
///
/// `skip` is an item offset, not a page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Target collection.
    pub collection: Collection,
    /// Page size.
    pub limit: u32,
    /// Number of items to skip.
    pub skip: u32,
    /// Optional category scope. Empty strings are treated as absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl PageRequest {
    /// Request for 1-indexed `page` of size `page_size`.
    pub fn for_page(
        collection: Collection,
        page: u32,
        page_size: u32,
        category: Option<String>,
    ) -> Self {
        Self {
            collection,
            limit: page_size,
            skip: page.saturating_sub(1).saturating_mul(page_size),
            category,
        }
    }

    /// Effective category, with empty strings mapped to `None`.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Relative endpoint path: `<collection>` or `<collection>/category/<name>`.
    ///
    /// The category name is percent-encoded.
    pub fn endpoint_path(&self) -> String {
        let base = self.collection.path.trim_matches('/');
        match self.category() {
            Some(category) => format!("{base}/category/{}", urlencoding::encode(category)),
            None => base.to_string(),
        }
    }
}

/// One page of records plus the collection-wide total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    /// Records in this page.
    pub items: Vec<Record>,
    /// Total number of records in the (possibly category-scoped) collection.
    pub total: u32,
    /// Offset echoed by the source.
    pub skip: u32,
    /// Page size echoed by the source.
    pub limit: u32,
}

impl PageResponse {
    pub fn new(items: Vec<Record>, total: u32, skip: u32, limit: u32) -> Self {
        Self {
            items,
            total,
            skip,
            limit,
        }
    }
}
