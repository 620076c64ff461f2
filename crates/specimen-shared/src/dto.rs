//! Data Transfer Objects - records as they arrive from upstream services.
//!
//! Required fields are plain types, optional fields are `Option`. Serde enforces
//! both at the boundary, so anything holding one of these has already been
//! structurally validated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access level granted to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserPrivilege {
    Annotator,
    Reviewer,
    Admin,
}

/// Lifecycle state of an annotation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationTaskStatus {
    Pending,
    InProgress,
    Completed,
    Archived,
}

/// Collection site as reported by the field program service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDto {
    pub id: i64,
    pub program_id: i64,
    pub district: Option<String>,
    pub subdistrict: Option<String>,
    pub village_name: Option<String>,
    pub house_number: Option<String>,
    pub is_active: bool,
}

/// User account record, including bookkeeping the domain does not keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub privilege: UserPrivilege,
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Uploaded specimen photograph with its (possibly pending) classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecimenImageDto {
    pub id: Uuid,
    pub url: String,
    pub species: Option<String>,
    pub sex: Option<String>,
    pub abdomen_status: Option<String>,
    /// When the photo was taken, if the device reported it.
    pub captured_at: Option<DateTime<Utc>>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationTaskDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: AnnotationTaskStatus,
    pub assignee_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Token pair handed out by the authentication service. Opaque to this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokensDto {
    pub access_token: String,
    pub refresh_token: String,
}

/// Successful authentication result from the authentication service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub message: String,
    pub user: UserDto,
    pub tokens: AuthTokensDto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_specimen_image_missing_capture_time_is_none() {
        let dto: SpecimenImageDto = serde_json::from_value(json!({
            "id": "6f1c2c8e-8a51-4d36-9a0b-0b8f8d3c6b11",
            "url": "https://cdn.example.org/specimens/1.jpg",
            "species": null,
            "sex": "female",
            "abdomen_status": null,
            "submitted_at": "2024-03-01T08:30:00Z"
        }))
        .unwrap();

        assert_eq!(dto.captured_at, None);
        assert_eq!(dto.sex.as_deref(), Some("female"));
    }

    #[test]
    fn test_specimen_image_requires_submitted_at() {
        let result = serde_json::from_value::<SpecimenImageDto>(json!({
            "id": "6f1c2c8e-8a51-4d36-9a0b-0b8f8d3c6b11",
            "url": "https://cdn.example.org/specimens/1.jpg",
            "species": null,
            "sex": null,
            "abdomen_status": null,
            "captured_at": null
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_user_privilege_wire_names() {
        assert_eq!(
            serde_json::to_value(UserPrivilege::Reviewer).unwrap(),
            json!("reviewer")
        );
        assert_eq!(
            serde_json::from_value::<AnnotationTaskStatus>(json!("in_progress")).unwrap(),
            AnnotationTaskStatus::InProgress
        );
    }

    #[test]
    fn test_site_location_fields_independently_nullable() {
        let dto: SiteDto = serde_json::from_value(json!({
            "id": 7,
            "program_id": 2,
            "district": "North",
            "subdistrict": null,
            "village_name": null,
            "house_number": "14B",
            "is_active": true
        }))
        .unwrap();

        assert_eq!(dto.district.as_deref(), Some("North"));
        assert_eq!(dto.subdistrict, None);
        assert_eq!(dto.house_number.as_deref(), Some("14B"));
    }
}
