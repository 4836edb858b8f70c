#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical pothole report types.
//!
//! This crate defines the strictly-typed [`Report`] record shared across the
//! entire pothole-map system, plus the loose [`ReportDocument`] shape that the
//! external document store returns. Every store read passes through the
//! normalization boundary in `pothole_map_report` before a [`Report`] reaches
//! the aggregation or query logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// District placeholder for documents that carry no district at all.
pub const UNKNOWN_DISTRICT: &str = "Unknown District";

/// District placeholder for reports whose reverse-geocoding lookup failed at
/// submission time.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Reporter-assigned danger rating, from 1 (cosmetic) to 10 (hazardous).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DangerLevel(u8);

impl DangerLevel {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 10;

    /// Creates a danger level from a numeric value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range 1-10.
    pub const fn new(value: u8) -> Result<Self, InvalidDangerLevelError> {
        if matches!(value, Self::MIN..=Self::MAX) {
            Ok(Self(value))
        } else {
            Err(InvalidDangerLevelError { value })
        }
    }

    /// Returns the numeric value of this rating.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DangerLevel {
    type Error = InvalidDangerLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DangerLevel> for u8 {
    fn from(level: DangerLevel) -> Self {
        level.value()
    }
}

impl std::fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when attempting to create a [`DangerLevel`] from an invalid
/// numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDangerLevelError {
    /// The invalid rating value that was provided.
    pub value: u8,
}

impl std::fmt::Display for InvalidDangerLevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid danger level {}: expected 1-10", self.value)
    }
}

impl std::error::Error for InvalidDangerLevelError {}

/// Where a pothole was reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLocation {
    /// Latitude (WGS84).
    pub lat: f64,
    /// Longitude (WGS84).
    pub lng: f64,
    /// Geographic district the coordinates fall in. Never empty; the sentinels
    /// [`UNKNOWN_DISTRICT`] and [`UNKNOWN_LOCATION`] cover unresolved cases.
    pub district: String,
    /// Human-readable address from reverse geocoding.
    pub formatted_address: String,
}

/// A single user-submitted pothole report.
///
/// Immutable once created: the store assigns `id` and `created_at` on
/// creation, and no edit or delete operation exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Opaque unique identifier assigned by the store.
    pub id: String,
    /// Reporter-assigned severity. `None` for legacy documents that predate
    /// the bounded input control; such reports contribute a danger of 0 to
    /// aggregate statistics.
    pub danger_level: Option<DangerLevel>,
    /// Free-text description. May be present but empty.
    pub description: Option<String>,
    /// Geotag and resolved address.
    pub location: ReportLocation,
    /// Base64-encoded photo, compressed client-side before it reaches this
    /// core. `None` when the stored document omits it.
    pub image_data: Option<String>,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A report document exactly as the external store returns it.
///
/// Every field is optional; the normalization boundary decides which
/// omissions are tolerable and which reject the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportDocument {
    /// Store-assigned document identifier.
    pub id: Option<String>,
    /// Raw danger rating as stored. May be out of range in corrupt documents.
    pub danger_level: Option<i64>,
    /// Free-text description.
    pub description: Option<String>,
    /// Latitude (WGS84).
    pub lat: Option<f64>,
    /// Longitude (WGS84).
    pub lng: Option<f64>,
    /// District name, if reverse geocoding resolved one.
    pub district: Option<String>,
    /// Human-readable address, if reverse geocoding resolved one.
    pub formatted_address: Option<String>,
    /// Base64-encoded photo.
    pub image_data: Option<String>,
    /// Server-assigned creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}
