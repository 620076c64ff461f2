//! Domain models - what application logic and the UI work with.

mod annotation_task;
mod auth;
mod site;
mod specimen_image;
mod user;

pub use annotation_task::{AnnotationTask, AnnotationTasksListFilters};
pub use auth::{AuthPayload, AuthTokens};
pub use site::Site;
pub use specimen_image::SpecimenImage;
pub use user::User;

pub use specimen_shared::dto::{AnnotationTaskStatus, UserPrivilege};
