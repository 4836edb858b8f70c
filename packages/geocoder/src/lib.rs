#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Reverse-geocoding service for pothole report locations.
//!
//! Converts latitude/longitude coordinates from a submission into a district
//! name and formatted address using a multi-provider strategy configured via
//! TOML files in `services/`:
//!
//! 1. **Nominatim / OpenStreetMap** (priority 1) — free, 1 req/sec rate
//!    limit.
//! 2. **Photon / Komoot** (priority 2) — free, no API key.
//!
//! Providers are loaded from the [`service_registry`] and executed in
//! priority order. Unreachable providers are skipped automatically; when
//! every provider fails, the caller falls back to its sentinel location.

pub mod nominatim;
pub mod photon;
pub mod service_registry;

use service_registry::{GeocodingService, ProviderConfig};
use thiserror::Error;

/// A resolved location for a pair of coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    /// District the coordinates fall in.
    pub district: String,
    /// Human-readable address.
    pub formatted_address: String,
}

/// Errors from reverse-geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,
}

/// Resolves coordinates by trying each service in priority order.
///
/// Provider failures are logged and skipped. Returns `None` when no provider
/// produced a result; the caller decides what sentinel to substitute.
pub async fn resolve_location(
    client: &reqwest::Client,
    services: &[GeocodingService],
    lat: f64,
    lng: f64,
) -> Option<ResolvedLocation> {
    for service in services {
        let result = match &service.provider {
            ProviderConfig::Nominatim { base_url, .. } => {
                nominatim::reverse_geocode(client, base_url, lat, lng).await
            }
            ProviderConfig::Photon { base_url } => {
                photon::reverse_geocode(client, base_url, lat, lng).await
            }
        };

        match result {
            Ok(Some(location)) => return Some(location),
            Ok(None) => {
                log::debug!("Service '{}' had no match for {lat},{lng}", service.id);
            }
            Err(e) => {
                log::warn!("Service '{}' failed for {lat},{lng}: {e}", service.id);
            }
        }
    }

    None
}
