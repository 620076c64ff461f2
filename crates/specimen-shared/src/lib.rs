//! # Specimen Shared
//!
//! Wire types shared between the API server and its consumers.
//! DTOs mirror what the upstream services send; nothing here carries behaviour
//! beyond construction and validation of the pagination envelope.

pub mod dto;
pub mod pagination;
pub mod response;

pub use pagination::{OffsetPage, PageError};
pub use response::{ApiResponse, ErrorResponse};
