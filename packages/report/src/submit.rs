//! Report submission flow.
//!
//! Resolves the submission coordinates to a district and address, then
//! writes the report through the store contract. Geocoding failure does not
//! fail the submission; the report is stored under the [`UNKNOWN_LOCATION`]
//! sentinel instead.

use pothole_map_geocoder::service_registry::GeocodingService;
use pothole_map_geocoder::{ResolvedLocation, resolve_location};
use pothole_map_report_models::{DangerLevel, UNKNOWN_LOCATION};
use pothole_map_store::{NewReport, ReportStore};

use crate::ReportError;

/// Fields the reporter provides when submitting a pothole.
///
/// The photo is already compressed and encoded by the time it reaches this
/// core.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSubmission {
    /// Latitude (WGS84).
    pub lat: f64,
    /// Longitude (WGS84).
    pub lng: f64,
    /// Danger rating, 1-10.
    pub danger_level: u8,
    /// Free-text description.
    pub description: Option<String>,
    /// Base64-encoded photo.
    pub image_data: String,
}

/// Submits a report: reverse-geocode, then create through the store.
///
/// Returns the store-assigned report id.
///
/// # Errors
///
/// Returns [`ReportError`] if the danger rating is out of range or the store
/// write fails. Geocoding failures are absorbed by the sentinel fallback.
pub async fn submit_report(
    store: &dyn ReportStore,
    client: &reqwest::Client,
    services: &[GeocodingService],
    submission: ReportSubmission,
) -> Result<String, ReportError> {
    let danger_level = DangerLevel::new(submission.danger_level)?;

    let location = resolve_location(client, services, submission.lat, submission.lng)
        .await
        .unwrap_or_else(|| {
            log::warn!(
                "No geocoding result for {},{}; storing under sentinel",
                submission.lat,
                submission.lng
            );
            ResolvedLocation {
                district: UNKNOWN_LOCATION.to_string(),
                formatted_address: UNKNOWN_LOCATION.to_string(),
            }
        });

    let id = store
        .create_report(NewReport {
            danger_level,
            description: submission.description,
            lat: submission.lat,
            lng: submission.lng,
            district: location.district,
            formatted_address: location.formatted_address,
            image_data: submission.image_data,
        })
        .await?;

    log::debug!("Created report {id}");
    Ok(id)
}
