//! # Specimen Infrastructure
//!
//! Concrete implementations of the ports defined in `specimen-core`.
//! Records are held in their upstream DTO shape and mapped to domain models
//! on every read, the same way a database adapter maps rows.

pub mod fixtures;
pub mod memory;

pub use fixtures::{FixtureError, FixtureSet};
pub use memory::{
    InMemoryAnnotationTaskRepository, InMemorySessionStore, InMemorySiteRepository,
    InMemorySpecimenImageRepository, InMemoryUserRepository,
};
