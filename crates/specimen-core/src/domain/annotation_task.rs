use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AnnotationTaskStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationTask {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: AnnotationTaskStatus,
    pub assignee_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Optional narrowing for an annotation task listing.
///
/// Every field is independent; `None` means that dimension is not filtered.
/// `page` is 1-based. Applying the filters is up to the listing adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationTasksListFilters {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub title: Option<String>,
    pub status: Option<AnnotationTaskStatus>,
}

impl AnnotationTasksListFilters {
    /// True when neither title nor status narrows the result.
    pub fn is_unfiltered(&self) -> bool {
        self.title.is_none() && self.status.is_none()
    }
}
