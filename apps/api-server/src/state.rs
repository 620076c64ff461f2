//! Application state - shared across all handlers.

use std::sync::Arc;

use specimen_core::ListingDefaults;
use specimen_core::ports::{
    AnnotationTaskRepository, SessionProvider, SiteRepository, SpecimenImageRepository,
    UserRepository,
};
use specimen_infra::{
    FixtureSet, InMemoryAnnotationTaskRepository, InMemorySessionStore, InMemorySiteRepository,
    InMemorySpecimenImageRepository, InMemoryUserRepository,
};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub sites: Arc<dyn SiteRepository>,
    pub users: Arc<dyn UserRepository>,
    pub specimen_images: Arc<dyn SpecimenImageRepository>,
    pub annotation_tasks: Arc<dyn AnnotationTaskRepository>,
    pub sessions: Arc<dyn SessionProvider>,
    pub listing: ListingDefaults,
}

impl AppState {
    /// Build the state, seeding stores from the fixture file when one is configured.
    pub async fn new(config: &AppConfig) -> Self {
        let fixtures = match &config.fixtures_path {
            Some(path) => match FixtureSet::load(path).await {
                Ok(fixtures) => fixtures,
                Err(e) => {
                    tracing::error!("Failed to load fixtures: {}. Starting with empty stores.", e);
                    FixtureSet::default()
                }
            },
            None => {
                tracing::warn!("FIXTURES_PATH not set. Starting with empty stores.");
                FixtureSet::default()
            }
        };

        Self::from_fixtures(fixtures, config.listing).await
    }

    pub async fn from_fixtures(fixtures: FixtureSet, listing: ListingDefaults) -> Self {
        let sessions = InMemorySessionStore::new();
        for session in fixtures.sessions {
            sessions.register(session).await;
        }

        tracing::info!("Application state initialized");

        Self {
            sites: Arc::new(InMemorySiteRepository::new(fixtures.sites)),
            users: Arc::new(InMemoryUserRepository::new(fixtures.users)),
            specimen_images: Arc::new(InMemorySpecimenImageRepository::new(
                fixtures.specimen_images,
            )),
            annotation_tasks: Arc::new(InMemoryAnnotationTaskRepository::new(
                fixtures.annotation_tasks,
            )),
            sessions: Arc::new(sessions),
            listing,
        }
    }
}
