//! Photon / Komoot reverse-geocoding client.
//!
//! Photon returns `GeoJSON` feature collections. No API key required.
//!
//! See <https://photon.komoot.io/>

use crate::{GeocodeError, ResolvedLocation};

/// Property keys checked for a district name, most specific first.
const DISTRICT_KEYS: &[&str] = &["district", "suburb", "county", "city"];

/// Reverse-geocodes a coordinate pair using the Photon reverse endpoint.
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request or response parsing fails.
pub async fn reverse_geocode(
    client: &reqwest::Client,
    base_url: &str,
    lat: f64,
    lng: f64,
) -> Result<Option<ResolvedLocation>, GeocodeError> {
    let resp = client
        .get(base_url)
        .query(&[
            ("lat", lat.to_string().as_str()),
            ("lon", lng.to_string().as_str()),
            ("limit", "1"),
        ])
        .send()
        .await?;

    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GeocodeError::RateLimited);
    }

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body)
}

/// Parses a Photon `GeoJSON` response.
fn parse_response(body: &serde_json::Value) -> Result<Option<ResolvedLocation>, GeocodeError> {
    let features = body["features"]
        .as_array()
        .ok_or_else(|| GeocodeError::Parse {
            message: "Photon response has no features array".to_string(),
        })?;

    let Some(first) = features.first() else {
        return Ok(None);
    };

    let props = &first["properties"];

    let district = DISTRICT_KEYS
        .iter()
        .find_map(|key| props.get(*key).and_then(serde_json::Value::as_str))
        .map(String::from);

    let Some(district) = district else {
        return Ok(None);
    };

    let formatted_address = format_address(props, &district);

    Ok(Some(ResolvedLocation {
        district,
        formatted_address,
    }))
}

/// Builds a display address from Photon's separate name/street/city fields.
fn format_address(props: &serde_json::Value, district: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for key in ["name", "street", "city", "state", "country"] {
        if let Some(value) = props.get(key).and_then(serde_json::Value::as_str) {
            if !value.is_empty() && !parts.contains(&value) {
                parts.push(value);
            }
        }
    }

    if parts.is_empty() {
        district.to_string()
    } else {
        parts.join(", ")
    }
}
