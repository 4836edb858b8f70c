//! Nominatim / OpenStreetMap reverse-geocoding client.
//!
//! Nominatim has strict rate limits: **1 request per second** maximum.
//!
//! See <https://nominatim.org/release-docs/develop/api/Reverse/>

use crate::{GeocodeError, ResolvedLocation};

/// Address keys checked for a district name, most specific first.
const DISTRICT_KEYS: &[&str] = &[
    "city_district",
    "district",
    "suburb",
    "state_district",
    "county",
    "city",
];

/// Reverse-geocodes a coordinate pair using the Nominatim reverse endpoint.
///
/// The caller is responsible for rate limiting (typically 1 request per
/// second for the public instance; see `rate_limit_ms` in the service
/// TOML configuration).
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
            ("format", "jsonv2"),
            ("zoom", "16"),
            ("addressdetails", "1"),
        ])
        .send()
        .await?;

    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GeocodeError::RateLimited);
    }

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body)
}

/// Parses a Nominatim reverse response.
fn parse_response(body: &serde_json::Value) -> Result<Option<ResolvedLocation>, GeocodeError> {
    if !body.is_object() {
        return Err(GeocodeError::Parse {
            message: "Nominatim response is not an object".to_string(),
        });
    }

    // Nominatim reports "Unable to geocode" as an error field, not an HTTP
    // status.
    if body.get("error").is_some() {
        return Ok(None);
    }

    let Some(display_name) = body["display_name"].as_str() else {
        return Ok(None);
    };

    let district = body
        .get("address")
        .and_then(|address| {
            DISTRICT_KEYS
                .iter()
                .find_map(|key| address.get(*key).and_then(serde_json::Value::as_str))
        })
        .map(String::from);

    let Some(district) = district else {
        return Ok(None);
    };

    Ok(Some(ResolvedLocation {
        district,
        formatted_address: display_name.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reverse_result() {
        let body = serde_json::json!({
            "display_name": "MG Road, Ernakulam, Kochi, Kerala, India",
            "address": {
                "road": "MG Road",
                "city_district": "Ernakulam",
                "city": "Kochi",
                "state": "Kerala"
            }
        });
        let location = parse_response(&body).unwrap().unwrap();
        assert_eq!(location.district, "Ernakulam");
        assert_eq!(
            location.formatted_address,
            "MG Road, Ernakulam, Kochi, Kerala, India"
        );
    }

    #[test]
    fn falls_through_district_keys() {
        let body = serde_json::json!({
            "display_name": "Somewhere rural",
            "address": { "county": "Palakkad" }
        });
        let location = parse_response(&body).unwrap().unwrap();
        assert_eq!(location.district, "Palakkad");
    }

    #[test]
    fn unable_to_geocode_is_no_match() {
        let body = serde_json::json!({ "error": "Unable to geocode" });
        assert!(parse_response(&body).unwrap().is_none());
    }

    #[test]
    fn non_object_is_parse_error() {
        let body = serde_json::json!([1, 2, 3]);
        assert!(parse_response(&body).is_err());
    }
}
