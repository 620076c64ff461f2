//! # Specimen Core
//!
//! The domain layer: domain models, the DTO mappers that produce them, and the
//! ports the infrastructure implements. Everything here is synchronous and
//! free of I/O apart from the async port traits themselves.

pub mod domain;
pub mod error;
pub mod listing;
pub mod mapper;
pub mod ports;

pub use error::{DomainError, RepoError};
pub use listing::{ListingDefaults, PageWindow};
