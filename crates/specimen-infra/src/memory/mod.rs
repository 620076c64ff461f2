//! In-memory adapters backed by `tokio::sync::RwLock`.
//!
//! Data is lost on process restart.

mod annotation_task;
mod session;
mod site;
mod specimen_image;
mod user;

pub use annotation_task::InMemoryAnnotationTaskRepository;
pub use session::InMemorySessionStore;
pub use site::InMemorySiteRepository;
pub use specimen_image::InMemorySpecimenImageRepository;
pub use user::InMemoryUserRepository;

/// Mask an e-mail address for logging, keeping the first character and the domain.
pub(crate) fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}@{domain}")
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane@example.org"), "j***@example.org");
        assert_eq!(mask_email("j@example.org"), "***@example.org");
        assert_eq!(mask_email("not-an-address"), "***");
    }
}
