//! Ports - traits the infrastructure implements.

mod repository;
mod session;

pub use repository::{
    AnnotationTaskRepository, SiteRepository, SpecimenImageRepository, UserRepository,
};
pub use session::{AuthError, SessionProvider};
