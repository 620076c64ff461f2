use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Specimen photograph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecimenImage {
    pub id: Uuid,
    pub url: String,
    pub species: Option<String>,
    pub sex: Option<String>,
    pub abdomen_status: Option<String>,
    /// `None` means the capture time is unknown.
    pub captured_at: Option<DateTime<Utc>>,
    pub submitted_at: DateTime<Utc>,
}
