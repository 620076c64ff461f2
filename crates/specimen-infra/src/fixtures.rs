//! Seed data in upstream DTO shape, loaded from a JSON file.
//!
//! ```json
//! { "sites": [...], "users": [...], "specimen_images": [...],
//!   "annotation_tasks": [...], "sessions": [...] }
//! ```
//!
//! Every key is optional. Records are validated by deserialization only.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use specimen_shared::dto::{
    AnnotationTaskDto, AuthResponseDto, SiteDto, SpecimenImageDto, UserDto,
};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixtures from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fixture file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixtureSet {
    pub sites: Vec<SiteDto>,
    pub users: Vec<UserDto>,
    pub specimen_images: Vec<SpecimenImageDto>,
    pub annotation_tasks: Vec<AnnotationTaskDto>,
    pub sessions: Vec<AuthResponseDto>,
}

impl FixtureSet {
    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub async fn load(path: &Path) -> Result<Self, FixtureError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FixtureError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let fixtures = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            sites = fixtures.sites.len(),
            users = fixtures.users.len(),
            specimen_images = fixtures.specimen_images.len(),
            annotation_tasks = fixtures.annotation_tasks.len(),
            sessions = fixtures.sessions.len(),
            "Loaded fixtures"
        );
        Ok(fixtures)
    }
}
