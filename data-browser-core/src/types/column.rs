//! Column configuration

use std::fmt;
use std::sync::Arc;

use data_browser_source::Record;

/// Signature of a custom column matcher.
///
/// Receives the record and the already-lowercased query.
pub type MatcherFn = dyn Fn(&Record, &str) -> bool + Send + Sync;

/// Shareable custom matcher.
#[derive(Clone)]
pub struct Matcher(Arc<MatcherFn>);

impl Matcher {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Record, &str) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub(crate) fn call(&self, record: &Record, query: &str) -> bool {
        (self.0)(record, query)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Matcher(..)")
    }
}

/// How a filter on a column is evaluated.
#[derive(Debug, Clone, Default)]
pub enum MatchRule {
    /// Substring match on the column's own value.
    #[default]
    Field,
    /// Substring match on any of the listed fields.
    AnyOf(Vec<String>),
    /// Arbitrary predicate.
    Custom(Matcher),
}

/// Static description of a table column.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Record field the column displays.
    pub key: String,
    /// Header label.
    pub label: String,
    /// Whether a filter may be set on this column.
    pub filterable: bool,
    /// Label for the filter input, when it differs from the header.
    pub filter_label: Option<String>,
    /// Filter evaluation rule.
    pub rule: MatchRule,
}

impl ColumnSpec {
    /// Display-only column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            filterable: false,
            filter_label: None,
            rule: MatchRule::Field,
        }
    }

    /// Column that accepts a substring filter.
    pub fn filterable(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            filterable: true,
            ..Self::new(key, label)
        }
    }

    /// Match the filter against any of `fields` instead of only this column.
    #[must_use]
    pub fn matching_any<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule = MatchRule::AnyOf(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Match the filter with a custom predicate.
    #[must_use]
    pub fn matching_with(mut self, matcher: Matcher) -> Self {
        self.rule = MatchRule::Custom(matcher);
        self
    }

    #[must_use]
    pub fn with_filter_label(mut self, label: impl Into<String>) -> Self {
        self.filter_label = Some(label.into());
        self
    }

    /// Label shown next to the filter input.
    pub fn filter_label(&self) -> &str {
        self.filter_label.as_deref().unwrap_or(&self.label)
    }
}
