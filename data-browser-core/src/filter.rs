//! Filter engine
//!
//! Client-side, per-column substring filtering over the currently loaded page. Filters never
//! reach the source; changing one only changes which loaded rows are visible.

use std::collections::BTreeMap;

use data_browser_source::Record;

use crate::error::{CoreError, CoreResult};
use crate::types::{ColumnSpec, MatchRule};

/// Active filters, keyed by column.
///
/// A key is present only while its query is non-empty, and only for filterable columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterMap {
    entries: BTreeMap<String, String>,
}

impl FilterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query for `key`; an empty value clears it.
    ///
    /// Returns whether the map changed.
    pub fn set(&mut self, columns: &[ColumnSpec], key: &str, value: &str) -> CoreResult<bool> {
        let column = columns
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| CoreError::UnknownColumn(key.to_string()))?;
        if !column.filterable {
            return Err(CoreError::ColumnNotFilterable(key.to_string()));
        }

        if value.is_empty() {
            return Ok(self.entries.remove(key).is_some());
        }
        let previous = self.entries.insert(key.to_string(), value.to_string());
        Ok(previous.as_deref() != Some(value))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// A filter resolved against its column, with the query lowercased once.
struct Compiled<'a> {
    key: &'a str,
    query: String,
    rule: Option<&'a MatchRule>,
}

fn compile<'a>(filters: &'a FilterMap, columns: &'a [ColumnSpec]) -> Vec<Compiled<'a>> {
    filters
        .iter()
        .map(|(key, query)| Compiled {
            key,
            query: query.to_lowercase(),
            rule: columns.iter().find(|c| c.key == key).map(|c| &c.rule),
        })
        .collect()
}

fn field_contains(record: &Record, field: &str, query: &str) -> bool {
    record
        .text(field)
        .is_some_and(|text| text.to_lowercase().contains(query))
}

fn passes(record: &Record, compiled: &[Compiled<'_>]) -> bool {
    compiled.iter().all(|f| match f.rule {
        None | Some(MatchRule::Field) => field_contains(record, f.key, &f.query),
        Some(MatchRule::AnyOf(fields)) => fields
            .iter()
            .any(|field| field_contains(record, field, &f.query)),
        Some(MatchRule::Custom(matcher)) => matcher.call(record, &f.query),
    })
}

/// Records passing every filter, by reference, in input order.
pub fn filter_records<'r>(
    records: &'r [Record],
    filters: &FilterMap,
    columns: &[ColumnSpec],
) -> Vec<&'r Record> {
    if filters.is_empty() {
        return records.iter().collect();
    }
    let compiled = compile(filters, columns);
    records.iter().filter(|r| passes(r, &compiled)).collect()
}

/// Records passing every filter, in input order.
///
/// Matching is a case-insensitive substring test on the value coerced to text. Missing,
/// `null` and object values never match. Filters combine conjunctively; an empty map keeps
/// every record.
pub fn apply_filters(records: &[Record], filters: &FilterMap, columns: &[ColumnSpec]) -> Vec<Record> {
    filter_records(records, filters, columns)
        .into_iter()
        .cloned()
        .collect()
}
