#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Document store contract for pothole reports.
//!
//! The managed cloud store is an external collaborator; this crate defines
//! the [`ReportStore`] trait through which the rest of the system reads and
//! writes, plus an in-memory implementation used by tests and local
//! development. Reports are write-once; the contract has no update or
//! delete operation.

pub mod memory;

use async_trait::async_trait;
use pothole_map_report_models::{DangerLevel, ReportDocument};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store backend could not be reached.
    #[error("Store unreachable: {message}")]
    Unreachable {
        /// Description of the transport failure.
        message: String,
    },

    /// The store returned a response that could not be interpreted.
    #[error("Malformed store response: {message}")]
    Malformed {
        /// Description of what went wrong.
        message: String,
    },
}

/// Which document field a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    /// Server-assigned creation timestamp.
    CreatedAt,
    /// Reporter-assigned danger rating.
    DangerLevel,
}

/// Listing sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

/// Ordering requested from the store when listing reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOrder {
    /// Field to order by.
    pub field: OrderField,
    /// Sort direction.
    pub direction: SortDirection,
}

impl ListOrder {
    /// Newest reports first, the default ordering for every view load.
    pub const NEWEST_FIRST: Self = Self {
        field: OrderField::CreatedAt,
        direction: SortDirection::Descending,
    };
}

/// Fields for a report being created.
///
/// The store assigns the document id and creation timestamp; everything else
/// is provided by the submission flow.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    /// Validated danger rating.
    pub danger_level: DangerLevel,
    /// Free-text description.
    pub description: Option<String>,
    /// Latitude (WGS84).
    pub lat: f64,
    /// Longitude (WGS84).
    pub lng: f64,
    /// Resolved district, or a sentinel when geocoding failed.
    pub district: String,
    /// Resolved human-readable address.
    pub formatted_address: String,
    /// Base64-encoded photo, compressed before it reaches this core.
    pub image_data: String,
}

/// Contract every report store backend must implement.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Lists all report documents, optionally ordered by the store.
    ///
    /// An empty result is valid and must not be treated as an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend is unreachable or returns a
    /// malformed response.
    async fn list_reports(
        &self,
        order: Option<ListOrder>,
    ) -> Result<Vec<ReportDocument>, StoreError>;

    /// Creates a report document and returns its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend rejects the write.
    async fn create_report(&self, report: NewReport) -> Result<String, StoreError>;
}
