use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use specimen_core::RepoError;
use specimen_core::domain::User;
use specimen_core::ports::UserRepository;
use specimen_shared::dto::UserDto;

use super::mask_email;

pub struct InMemoryUserRepository {
    users: RwLock<Vec<UserDto>>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<UserDto>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        let found = users.iter().find(|u| u.id == id).cloned();

        if let Some(user) = &found {
            tracing::debug!(user_id = %id, user_email = %mask_email(&user.email), "Found user");
        }

        Ok(found.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use specimen_shared::dto::UserPrivilege;

    #[tokio::test]
    async fn test_find_by_id_projects_user() {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let repo = InMemoryUserRepository::new(vec![UserDto {
            id,
            email: "reviewer@example.org".to_string(),
            privilege: UserPrivilege::Reviewer,
            is_active: true,
            is_superuser: true,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }]);

        let user = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(user.email, "reviewer@example.org");
        assert_eq!(user.privilege, UserPrivilege::Reviewer);
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }
}
