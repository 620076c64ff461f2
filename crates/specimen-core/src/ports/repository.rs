use async_trait::async_trait;
use specimen_shared::OffsetPage;
use uuid::Uuid;

use crate::domain::{AnnotationTask, AnnotationTasksListFilters, Site, SpecimenImage, User};
use crate::error::RepoError;
use crate::listing::PageWindow;

#[async_trait]
pub trait SiteRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Site>, RepoError>;

    /// Sites belonging to a program, in source order.
    async fn list_by_program(&self, program_id: i64) -> Result<Vec<Site>, RepoError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;
}

#[async_trait]
pub trait SpecimenImageRepository: Send + Sync {
    /// One page of images, most recently submitted first.
    async fn list(&self, window: PageWindow) -> Result<OffsetPage<SpecimenImage>, RepoError>;
}

#[async_trait]
pub trait AnnotationTaskRepository: Send + Sync {
    /// One page of the tasks matching `filters`. The `page`/`limit` fields of
    /// `filters` are ignored here; `window` has already been resolved from them.
    async fn list(
        &self,
        filters: &AnnotationTasksListFilters,
        window: PageWindow,
    ) -> Result<OffsetPage<AnnotationTask>, RepoError>;
}
