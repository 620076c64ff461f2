use async_trait::async_trait;
use tokio::sync::RwLock;

use specimen_core::domain::SpecimenImage;
use specimen_core::ports::SpecimenImageRepository;
use specimen_core::{PageWindow, RepoError};
use specimen_shared::OffsetPage;
use specimen_shared::dto::SpecimenImageDto;

pub struct InMemorySpecimenImageRepository {
    images: RwLock<Vec<SpecimenImageDto>>,
}

impl InMemorySpecimenImageRepository {
    pub fn new(images: Vec<SpecimenImageDto>) -> Self {
        Self {
            images: RwLock::new(images),
        }
    }
}

#[async_trait]
impl SpecimenImageRepository for InMemorySpecimenImageRepository {
    async fn list(&self, window: PageWindow) -> Result<OffsetPage<SpecimenImage>, RepoError> {
        let images = self.images.read().await;

        let mut ordered: Vec<&SpecimenImageDto> = images.iter().collect();
        ordered.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

        let total = ordered.len() as u64;
        let items: Vec<SpecimenImage> = ordered
            .into_iter()
            .skip(usize::try_from(window.offset()).unwrap_or(usize::MAX))
            .take(window.limit() as usize)
            .cloned()
            .map(Into::into)
            .collect();

        tracing::debug!(
            total,
            returned = items.len(),
            offset = window.offset(),
            "Listed specimen images"
        );

        Ok(window.page(items, total)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use specimen_core::ListingDefaults;
    use uuid::Uuid;

    fn image(minutes: i64) -> SpecimenImageDto {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        SpecimenImageDto {
            id: Uuid::new_v4(),
            url: format!("https://cdn.example.org/specimens/{minutes}.jpg"),
            species: None,
            sex: None,
            abdomen_status: None,
            captured_at: None,
            submitted_at: base + Duration::minutes(minutes),
        }
    }

    #[tokio::test]
    async fn test_newest_first() {
        let repo = InMemorySpecimenImageRepository::new(vec![image(1), image(3), image(2)]);
        let window = PageWindow::resolve(None, Some(2), &ListingDefaults::default()).unwrap();

        let page = repo.list(window).await.unwrap();
        let urls: Vec<&str> = page.items().iter().map(|i| i.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://cdn.example.org/specimens/3.jpg",
                "https://cdn.example.org/specimens/2.jpg"
            ]
        );
        assert_eq!(page.total(), 3);
        assert!(page.has_more());
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let repo = InMemorySpecimenImageRepository::new(vec![image(1)]);
        let window = PageWindow::resolve(Some(4), Some(10), &ListingDefaults::default()).unwrap();

        let page = repo.list(window).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total(), 1);
        assert!(!page.has_more());
    }
}
