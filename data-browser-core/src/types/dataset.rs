//! Dataset definitions and built-in presets

use std::collections::HashSet;

use data_browser_source::Collection;

use crate::error::{CoreError, CoreResult};

use super::column::ColumnSpec;

/// Page sizes offered by default.
pub const DEFAULT_PAGE_SIZES: [u32; 4] = [5, 10, 20, 50];
/// Page size a fresh session starts with.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// A category tab. `category = None` targets the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSpec {
    pub id: String,
    pub label: String,
    pub category: Option<String>,
}

impl TabSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>, category: Option<&str>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category: category.filter(|c| !c.is_empty()).map(str::to_string),
        }
    }
}

/// Everything needed to browse one collection.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub id: String,
    pub title: String,
    pub collection: Collection,
    pub columns: Vec<ColumnSpec>,
    pub tabs: Vec<TabSpec>,
    pub page_sizes: Vec<u32>,
    pub default_page_size: u32,
}

impl DatasetConfig {
    pub fn new(id: impl Into<String>, title: impl Into<String>, collection: Collection) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            collection,
            columns: Vec::new(),
            tabs: Vec::new(),
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    #[must_use]
    pub fn tab(mut self, tab: TabSpec) -> Self {
        self.tabs.push(tab);
        self
    }

    #[must_use]
    pub fn with_page_sizes(mut self, sizes: Vec<u32>, default_size: u32) -> Self {
        self.page_sizes = sizes;
        self.default_page_size = default_size;
        self
    }

    /// Look up a column by key.
    pub fn column_spec(&self, key: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Columns that accept filters, in display order.
    pub fn filterable_columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| c.filterable)
    }

    /// Index of the tab with `id`.
    pub fn tab_index(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Check the definition for internal consistency.
    pub fn validate(&self) -> CoreResult<()> {
        let invalid = |detail: String| CoreError::InvalidDataset {
            dataset: self.id.clone(),
            detail,
        };

        if self.columns.is_empty() {
            return Err(invalid("no columns".to_string()));
        }
        let mut keys = HashSet::new();
        for column in &self.columns {
            if !keys.insert(column.key.as_str()) {
                return Err(invalid(format!("duplicate column '{}'", column.key)));
            }
        }

        let mut tab_ids = HashSet::new();
        for tab in &self.tabs {
            if !tab_ids.insert(tab.id.as_str()) {
                return Err(invalid(format!("duplicate tab '{}'", tab.id)));
            }
        }

        if self.page_sizes.is_empty() || self.page_sizes.contains(&0) {
            return Err(invalid("page sizes must be non-empty and positive".to_string()));
        }
        if !self.page_sizes.contains(&self.default_page_size) {
            return Err(invalid(format!(
                "default page size {} is not one of {:?}",
                self.default_page_size, self.page_sizes
            )));
        }
        Ok(())
    }
}

/// `users` collection: twelve columns, "Name" filter also matches last names.
pub fn users() -> DatasetConfig {
    DatasetConfig::new("users", "Users", Collection::new("users", "users"))
        .column(ColumnSpec::filterable("id", "ID"))
        .column(
            ColumnSpec::filterable("firstName", "First Name")
                .with_filter_label("Name")
                .matching_any(["firstName", "lastName"]),
        )
        .column(ColumnSpec::filterable("lastName", "Last Name"))
        .column(ColumnSpec::new("maidenName", "Maiden Name"))
        .column(ColumnSpec::new("age", "Age"))
        .column(ColumnSpec::filterable("gender", "Gender"))
        .column(ColumnSpec::filterable("email", "Email"))
        .column(ColumnSpec::new("phone", "Phone"))
        .column(ColumnSpec::new("username", "Username"))
        .column(ColumnSpec::filterable("birthDate", "Birth Date"))
        .column(ColumnSpec::new("bloodGroup", "Blood Group"))
        .column(ColumnSpec::new("eyeColor", "Eye Color"))
}

/// `products` collection with `All` / `Laptops` tabs.
pub fn products() -> DatasetConfig {
    DatasetConfig::new("products", "Products", Collection::new("products", "products"))
        .column(ColumnSpec::new("id", "ID"))
        .column(ColumnSpec::filterable("title", "Title"))
        .column(ColumnSpec::filterable("brand", "Brand"))
        .column(ColumnSpec::filterable("category", "Category"))
        .column(ColumnSpec::new("price", "Price"))
        .column(ColumnSpec::new("rating", "Rating"))
        .column(ColumnSpec::new("stock", "Stock"))
        .column(ColumnSpec::new("discountPercentage", "Discount"))
        .tab(TabSpec::new("all", "All", None))
        .tab(TabSpec::new("laptops", "Laptops", Some("laptops")))
}

/// Built-in datasets in navigation order.
pub fn presets() -> Vec<DatasetConfig> {
    vec![users(), products()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for dataset in presets() {
            assert!(dataset.validate().is_ok(), "{} invalid", dataset.id);
        }
    }

    #[test]
    fn users_preset_shape() {
        let users = users();
        assert_eq!(users.columns.len(), 12);
        let filterable: Vec<&str> = users.filterable_columns().map(|c| c.key.as_str()).collect();
        assert_eq!(
            filterable,
            vec!["id", "firstName", "lastName", "gender", "email", "birthDate"]
        );
        assert!(users.tabs.is_empty());
        assert_eq!(users.column_spec("firstName").map(ColumnSpec::filter_label), Some("Name"));
    }

    #[test]
    fn products_preset_shape() {
        let products = products();
        assert_eq!(products.columns.len(), 8);
        assert_eq!(products.tabs.len(), 2);
        assert_eq!(products.tabs[0].category, None);
        assert_eq!(products.tabs[1].category.as_deref(), Some("laptops"));
        assert_eq!(products.tab_index("laptops"), Some(1));
    }

    #[test]
    fn empty_tab_category_means_whole_collection() {
        assert_eq!(TabSpec::new("all", "All", Some("")).category, None);
    }

    #[test]
    fn validate_rejects_bad_page_sizes() {
        let missing_default = users().with_page_sizes(vec![10, 20], 5);
        let zero = users().with_page_sizes(vec![0, 5], 5);
        assert!(matches!(
            missing_default.validate(),
            Err(CoreError::InvalidDataset { .. })
        ));
        assert!(zero.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_columns() {
        let dup = users().column(ColumnSpec::new("id", "Again"));
        assert!(dup.validate().is_err());
    }
}
