#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Query criteria and page result types for the report list view.
//!
//! The UI builds an immutable [`QueryCriteria`] value per interaction and
//! passes it into the query pipeline; there is no shared mutable filter
//! state in the core.

use pothole_map_report_models::Report;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Ordering applied to the report list before filtering.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortBy {
    /// Most recently created first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Highest danger first, ties broken newest-first.
    MostDangerous,
}

/// Inclusive danger level bounds for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DangerRange {
    /// Lowest danger level to keep.
    pub min: u8,
    /// Highest danger level to keep.
    pub max: u8,
}

impl DangerRange {
    /// Whether a danger value falls inside this range.
    #[must_use]
    pub const fn contains(self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// User-selected sort, filter, and pagination criteria for one list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCriteria {
    /// Case-insensitive search text. Empty keeps every report.
    pub search: String,
    /// Ordering applied before filtering.
    pub sort_by: SortBy,
    /// Danger bounds, or `None` to keep every report.
    pub danger_range: Option<DangerRange>,
    /// 1-based page number.
    pub page: u32,
    /// Reports per page. Must be greater than zero.
    pub page_size: u32,
}

impl Default for QueryCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_by: SortBy::default(),
            danger_range: None,
            page: 1,
            page_size: 10,
        }
    }
}

/// One page of the filtered-and-ordered report list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPage {
    /// Reports on this page, at most `page_size` of them.
    pub items: Vec<Report>,
    /// Total page count for the filtered result set. 0 when nothing matched;
    /// a page request beyond this yields an empty `items`, not an error.
    pub total_pages: u32,
}
