use async_trait::async_trait;
use tokio::sync::RwLock;

use specimen_core::domain::{AnnotationTask, AnnotationTasksListFilters};
use specimen_core::ports::AnnotationTaskRepository;
use specimen_core::{PageWindow, RepoError};
use specimen_shared::OffsetPage;
use specimen_shared::dto::AnnotationTaskDto;

pub struct InMemoryAnnotationTaskRepository {
    tasks: RwLock<Vec<AnnotationTaskDto>>,
}

impl InMemoryAnnotationTaskRepository {
    pub fn new(tasks: Vec<AnnotationTaskDto>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }

    /// `title` is the lowercased title filter.
    fn matches(
        task: &AnnotationTaskDto,
        filters: &AnnotationTasksListFilters,
        title: Option<&str>,
    ) -> bool {
        let title_ok = title.is_none_or(|needle| task.title.to_lowercase().contains(needle));
        let status_ok = filters.status.is_none_or(|status| task.status == status);
        title_ok && status_ok
    }
}

#[async_trait]
impl AnnotationTaskRepository for InMemoryAnnotationTaskRepository {
    async fn list(
        &self,
        filters: &AnnotationTasksListFilters,
        window: PageWindow,
    ) -> Result<OffsetPage<AnnotationTask>, RepoError> {
        let needle = filters.title.as_deref().map(str::to_lowercase);
        let tasks = self.tasks.read().await;

        let matching: Vec<&AnnotationTaskDto> = tasks
            .iter()
            .filter(|task| Self::matches(task, filters, needle.as_deref()))
            .collect();

        let total = matching.len() as u64;
        let items: Vec<AnnotationTask> = matching
            .into_iter()
            .skip(usize::try_from(window.offset()).unwrap_or(usize::MAX))
            .take(window.limit() as usize)
            .cloned()
            .map(Into::into)
            .collect();

        tracing::debug!(
            filtered = !filters.is_unfiltered(),
            total,
            returned = items.len(),
            "Listed annotation tasks"
        );

        Ok(window.page(items, total)?)
    }
}
