#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Leaderboard and summary statistics result types.
//!
//! Derived, ephemeral values. Recomputed on every aggregation call and never
//! persisted.

use serde::{Deserialize, Serialize};

/// Summary statistics for one district's reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictSummary {
    /// District name (grouping key).
    pub district: String,
    /// Number of reports in this district. At least 1 by construction.
    pub count: u64,
    /// Mean danger level over the district's reports, full precision.
    pub avg_danger: f64,
}

/// Aggregate view over the full report collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSummary {
    /// Districts ranked by report count, tie-broken by average danger.
    pub leaderboard: Vec<DistrictSummary>,
    /// Total number of reports.
    pub total_reports: u64,
    /// Number of distinct districts.
    pub total_districts: u64,
    /// Mean danger level across every report, rounded to 1 decimal place.
    pub avg_danger_level: f64,
}

impl LeaderboardSummary {
    /// The degenerate summary for an empty report collection.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            leaderboard: Vec::new(),
            total_reports: 0,
            total_districts: 0,
            avg_danger_level: 0.0,
        }
    }
}
