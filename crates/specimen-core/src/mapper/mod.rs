//! DTO to domain mappers.
//!
//! Each mapping is a `From` impl plus a named function, so call sites can make
//! the DTO/domain boundary explicit. All of them are total over well-formed
//! DTOs, perform no I/O and never log.
//!
//! Two policies are in use:
//!
//! - **pass-through** (`Site`, `SpecimenImage`, `AnnotationTask`,
//!   `AuthTokens`): every field is copied unchanged.
//! - **projection** (`User`): only an explicit allow-list of fields is kept.
//!   New DTO fields never reach the domain unless added here.

mod annotation_task;
mod auth;
mod site;
mod specimen_image;
mod user;

pub use annotation_task::annotation_task_from_dto;
pub use auth::{auth_payload_from_dto, auth_tokens_from_dto};
pub use site::site_from_dto;
pub use specimen_image::specimen_image_from_dto;
pub use user::user_from_dto;
