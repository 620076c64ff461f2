use async_trait::async_trait;
use tokio::sync::RwLock;

use specimen_core::RepoError;
use specimen_core::domain::Site;
use specimen_core::ports::SiteRepository;
use specimen_shared::dto::SiteDto;

/// Sites kept in their upstream shape, in insertion order.
pub struct InMemorySiteRepository {
    sites: RwLock<Vec<SiteDto>>,
}

impl InMemorySiteRepository {
    pub fn new(sites: Vec<SiteDto>) -> Self {
        Self {
            sites: RwLock::new(sites),
        }
    }
}

#[async_trait]
impl SiteRepository for InMemorySiteRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Site>, RepoError> {
        tracing::debug!(site_id = id, "Finding site by id");

        let sites = self.sites.read().await;
        Ok(sites.iter().find(|s| s.id == id).cloned().map(Into::into))
    }

    async fn list_by_program(&self, program_id: i64) -> Result<Vec<Site>, RepoError> {
        let sites = self.sites.read().await;
        let result: Vec<Site> = sites
            .iter()
            .filter(|s| s.program_id == program_id)
            .cloned()
            .map(Into::into)
            .collect();

        tracing::debug!(program_id, count = result.len(), "Listed sites for program");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(id: i64, program_id: i64) -> SiteDto {
        SiteDto {
            id,
            program_id,
            district: None,
            subdistrict: None,
            village_name: Some(format!("Village {id}")),
            house_number: None,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_list_by_program_keeps_order() {
        let repo = InMemorySiteRepository::new(vec![site(3, 1), site(1, 2), site(2, 1)]);

        let ids: Vec<i64> = repo
            .list_by_program(1)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[tokio::test]
    async fn test_find_missing_site() {
        let repo = InMemorySiteRepository::new(vec![site(1, 1)]);
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }
}
