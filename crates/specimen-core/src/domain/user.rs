use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserPrivilege;

/// User as seen by the application. Only these four fields are kept; account
/// bookkeeping from the upstream record stays behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub privilege: UserPrivilege,
    pub is_active: bool,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.privilege == UserPrivilege::Admin
    }
}
