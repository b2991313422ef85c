//! Static configuration types

mod column;
mod dataset;

pub use column::{ColumnSpec, MatchRule, Matcher, MatcherFn};
pub use dataset::{
    presets, products, users, DatasetConfig, TabSpec, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES,
};
