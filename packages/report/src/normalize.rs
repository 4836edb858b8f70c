//! Normalizes raw store documents into strictly-typed [`Report`] values.
//!
//! Runs once per fetch. A document missing its id, coordinates, or creation
//! timestamp is structurally invalid and rejected; a missing danger rating is
//! preserved as `None` (aggregation substitutes zero), but an out-of-range
//! rating rejects the document.

use pothole_map_report_models::{
    DangerLevel, Report, ReportDocument, ReportLocation, UNKNOWN_DISTRICT,
};

/// Normalizes a list of store documents, skipping invalid ones.
#[must_use]
pub fn normalize_documents(documents: &[ReportDocument]) -> Vec<Report> {
    documents.iter().filter_map(normalize_document).collect()
}

/// Normalizes a single store document.
#[must_use]
pub fn normalize_document(document: &ReportDocument) -> Option<Report> {
    let id = document
        .id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())?
        .to_string();

    let lat = document.lat?;
    let lng = document.lng?;
    let created_at = document.created_at?;

    let danger_level = match document.danger_level {
        None => None,
        Some(raw) => {
            let value = u8::try_from(raw).ok()?;
            Some(DangerLevel::new(value).ok()?)
        }
    };

    let district = document
        .district
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_DISTRICT)
        .to_string();

    let formatted_address = document
        .formatted_address
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(|| district.clone(), String::from);

    let description = document
        .description
        .as_deref()
        .map(|s| s.trim().to_string());

    Some(Report {
        id,
        danger_level,
        description,
        location: ReportLocation {
            lat,
            lng,
            district,
            formatted_address,
        },
        image_data: document.image_data.clone(),
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn document() -> ReportDocument {
        ReportDocument {
            id: Some("r1".to_string()),
            danger_level: Some(6),
            description: Some("  deep pothole  ".to_string()),
            lat: Some(9.9312),
            lng: Some(76.2673),
            district: Some("Kochi".to_string()),
            formatted_address: Some("MG Road, Kochi".to_string()),
            image_data: Some("aGVsbG8=".to_string()),
            created_at: Some(DateTime::from_timestamp(1_700_000_000, 0).unwrap()),
        }
    }

    #[test]
    fn normalizes_a_complete_document() {
        let report = normalize_document(&document()).unwrap();
        assert_eq!(report.id, "r1");
        assert_eq!(report.danger_level.unwrap().value(), 6);
        assert_eq!(report.description.as_deref(), Some("deep pothole"));
        assert_eq!(report.location.district, "Kochi");
    }

    #[test]
    fn rejects_documents_missing_required_fields() {
        let strips: [fn(&mut ReportDocument); 5] = [
            |d| d.id = None,
            |d| d.id = Some("   ".to_string()),
            |d| d.lat = None,
            |d| d.lng = None,
            |d| d.created_at = None,
        ];

        for strip in strips {
            let mut doc = document();
            strip(&mut doc);
            assert!(normalize_document(&doc).is_none(), "{doc:?}");
        }
    }

    #[test]
    fn missing_danger_is_preserved_as_none() {
        let mut doc = document();
        doc.danger_level = None;
        let report = normalize_document(&doc).unwrap();
        assert!(report.danger_level.is_none());
    }

    #[test]
    fn out_of_range_danger_rejects_the_document() {
        for raw in [0, 11, -3, 1000] {
            let mut doc = document();
            doc.danger_level = Some(raw);
            assert!(normalize_document(&doc).is_none(), "danger {raw}");
        }
    }

    #[test]
    fn missing_district_gets_the_sentinel() {
        let mut doc = document();
        doc.district = None;
        doc.formatted_address = None;
        let report = normalize_document(&doc).unwrap();
        assert_eq!(report.location.district, UNKNOWN_DISTRICT);
        assert_eq!(report.location.formatted_address, UNKNOWN_DISTRICT);
    }

    #[test]
    fn keeps_valid_documents_when_skipping_invalid_ones() {
        let mut missing_coords = document();
        missing_coords.lat = None;

        let reports = normalize_documents(&[document(), missing_coords, document()]);
        assert_eq!(reports.len(), 2);
    }
}
