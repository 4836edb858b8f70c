//! In-memory [`ReportStore`] backend.
//!
//! Holds documents behind an `RwLock` so tests and local development can run
//! without a cloud store. Assigns UUID v4 ids and `Utc::now()` timestamps the
//! way the managed store would.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use pothole_map_report_models::ReportDocument;

use crate::{ListOrder, NewReport, OrderField, ReportStore, SortDirection, StoreError};

/// An in-memory report store.
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    documents: RwLock<Vec<ReportDocument>>,
}

impl MemoryReportStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with documents.
    #[must_use]
    pub fn with_documents(documents: Vec<ReportDocument>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn list_reports(
        &self,
        order: Option<ListOrder>,
    ) -> Result<Vec<ReportDocument>, StoreError> {
        let mut documents = self
            .documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if let Some(order) = order {
            sort_documents(&mut documents, order);
        }

        Ok(documents)
    }

    async fn create_report(&self, report: NewReport) -> Result<String, StoreError> {
        let id = uuid::Uuid::new_v4().to_string();

        let document = ReportDocument {
            id: Some(id.clone()),
            danger_level: Some(i64::from(report.danger_level.value())),
            description: report.description,
            lat: Some(report.lat),
            lng: Some(report.lng),
            district: Some(report.district),
            formatted_address: Some(report.formatted_address),
            image_data: Some(report.image_data),
            created_at: Some(Utc::now()),
        };

        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(document);

        Ok(id)
    }
}

/// Sorts documents the way the managed store would for the given order.
///
/// Documents missing the ordered field sort last in either direction.
fn sort_documents(documents: &mut [ReportDocument], order: ListOrder) {
    documents.sort_by(|a, b| match order.field {
        OrderField::CreatedAt => compare_present(a.created_at, b.created_at, order.direction),
        OrderField::DangerLevel => compare_present(a.danger_level, b.danger_level, order.direction),
    });
}

fn compare_present<T: Ord>(
    a: Option<T>,
    b: Option<T>,
    direction: SortDirection,
) -> std::cmp::Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.cmp(&b),
            SortDirection::Descending => b.cmp(&a),
        },
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}
