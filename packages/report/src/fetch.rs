//! Bulk report fetch for the aggregate views.
//!
//! One store read per view load; the normalization boundary runs on the way
//! out so callers only handle [`Report`] values.

use pothole_map_report_models::Report;
use pothole_map_store::{ListOrder, ReportStore};

use crate::ReportError;
use crate::normalize::normalize_documents;

/// Loads every report from the store, newest first, normalized.
///
/// Malformed documents are logged and excluded; an empty store yields an
/// empty list.
///
/// # Errors
///
/// Returns [`ReportError`] if the store read fails. Store failures surface
/// unchanged and are never retried here.
pub async fn load_reports(store: &dyn ReportStore) -> Result<Vec<Report>, ReportError> {
    let documents = store.list_reports(Some(ListOrder::NEWEST_FIRST)).await?;
    let reports = normalize_documents(&documents);

    let skipped = documents.len() - reports.len();
    if skipped > 0 {
        log::warn!("Skipped {skipped} malformed report documents");
    }
    log::debug!("Loaded {} reports", reports.len());

    Ok(reports)
}
