#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Report normalization boundary, bulk fetch, and submission flow.
//!
//! Everything between the external collaborators (store, geocoder) and the
//! pure aggregation/query logic lives here. Store documents are normalized
//! exactly once, when fetched, so downstream code only ever sees the
//! strictly-typed [`pothole_map_report_models::Report`].

pub mod fetch;
pub mod normalize;
pub mod submit;

use pothole_map_report_models::InvalidDangerLevelError;
use pothole_map_store::StoreError;

/// Errors that can occur while fetching or submitting reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Submission carried a danger rating outside 1-10.
    #[error("Invalid submission: {0}")]
    InvalidDanger(#[from] InvalidDangerLevelError),
}
