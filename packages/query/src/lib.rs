#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Sort, filter, and pagination pipeline for the report list view.
//!
//! Reproduces the store's ordering client-side so the whole pipeline is
//! deterministic and testable without a backend: order by the selected key,
//! apply search and danger filters, then slice out the requested page.

use pothole_map_query_models::{QueryCriteria, ReportPage, SortBy};
use pothole_map_report_models::{DangerLevel, Report};

/// Errors that can occur while running a query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The criteria violate the query contract (zero page or page size).
    #[error("Invalid query criteria: {message}")]
    InvalidCriteria {
        /// Description of the violated contract.
        message: String,
    },
}

/// Runs the list-view pipeline over a report collection.
///
/// Pure and deterministic: identical inputs yield identical output. A `page`
/// beyond the last page returns an empty page, not an error.
///
/// # Errors
///
/// Returns [`QueryError::InvalidCriteria`] when `page` or `page_size` is
/// zero. Both are programming-contract violations, not runtime conditions.
pub fn query(reports: &[Report], criteria: &QueryCriteria) -> Result<ReportPage, QueryError> {
    if criteria.page == 0 {
        return Err(QueryError::InvalidCriteria {
            message: "page must be at least 1".to_string(),
        });
    }
    if criteria.page_size == 0 {
        return Err(QueryError::InvalidCriteria {
            message: "pageSize must be greater than 0".to_string(),
        });
    }

    let mut ordered = reports.to_vec();
    order_reports(&mut ordered, criteria.sort_by);

    let needle = criteria.search.to_lowercase();
    ordered.retain(|report| {
        matches_search(report, &needle)
            && criteria
                .danger_range
                .is_none_or(|range| range.contains(danger_value(report)))
    });

    log::debug!(
        "Query matched {} of {} reports (sortBy={})",
        ordered.len(),
        reports.len(),
        criteria.sort_by
    );

    Ok(paginate(ordered, criteria.page, criteria.page_size))
}

/// Sorts reports by the selected key. The sort is stable, so reports equal on
/// every key keep their input order.
fn order_reports(reports: &mut [Report], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => reports.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Oldest => reports.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortBy::MostDangerous => reports.sort_by(|a, b| {
            danger_value(b)
                .cmp(&danger_value(a))
                .then_with(|| b.created_at.cmp(&a.created_at))
        }),
    }
}

/// Whether a report matches the lowercased search text. An empty search
/// matches everything; any one field match suffices.
fn matches_search(report: &Report, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    report
        .description
        .as_deref()
        .is_some_and(|description| description.to_lowercase().contains(needle))
        || report.location.district.to_lowercase().contains(needle)
        || report
            .location
            .formatted_address
            .to_lowercase()
            .contains(needle)
}

/// Danger value used for sorting and range filtering: the rating, or 0 when
/// absent.
fn danger_value(report: &Report) -> u8 {
    report.danger_level.map_or(0, DangerLevel::value)
}

/// Slices out the requested 1-based page. Zero matches yield zero pages.
fn paginate(filtered: Vec<Report>, page: u32, page_size: u32) -> ReportPage {
    let page_size_len = page_size as usize;
    let total_pages = u32::try_from(filtered.len().div_ceil(page_size_len)).unwrap_or(u32::MAX);

    let start = (page as usize - 1).saturating_mul(page_size_len);
    let items = filtered
        .into_iter()
        .skip(start)
        .take(page_size_len)
        .collect();

    ReportPage { items, total_pages }
}
