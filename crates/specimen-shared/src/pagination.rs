//! Offset-based pagination envelope for list endpoints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected pagination parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("limit must be a positive integer, got {0}")]
    NonPositiveLimit(i64),

    #[error("offset must not be negative, got {0}")]
    NegativeOffset(i64),

    #[error("page holds {items} items but the limit is {limit}")]
    Overfull { items: usize, limit: u64 },

    #[error("page numbers start at 1")]
    ZeroPage,

    #[error("limit {limit} exceeds maximum {max}")]
    LimitAboveMax { limit: u32, max: u32 },

    #[error("page {0} is out of range")]
    PageOutOfRange(u32),
}

/// One page of a larger collection.
///
/// `has_more` is derived from the other fields and cannot be set directly:
/// it is `offset + items.len() < total`. Items keep whatever order the
/// producer supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOffsetPage<T>")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct OffsetPage<T> {
    items: Vec<T>,
    total: u64,
    limit: u64,
    offset: u64,
    has_more: bool,
}

impl<T> OffsetPage<T> {
    /// Build a page from its slice and the parameters that produced it.
    ///
    /// Fails when `limit <= 0`, `offset < 0`, or the slice is longer than
    /// `limit`. Nothing is clamped.
    pub fn new(items: Vec<T>, total: u64, limit: i64, offset: i64) -> Result<Self, PageError> {
        if limit <= 0 {
            return Err(PageError::NonPositiveLimit(limit));
        }
        if offset < 0 {
            return Err(PageError::NegativeOffset(offset));
        }

        let limit = limit as u64;
        let offset = offset as u64;
        if items.len() as u64 > limit {
            return Err(PageError::Overfull {
                items: items.len(),
                limit,
            });
        }

        let has_more = offset.saturating_add(items.len() as u64) < total;

        Ok(Self {
            items,
            total,
            limit,
            offset,
            has_more,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Size of the whole collection, not of this page.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Offset to request for the following page, if there is one.
    pub fn next_offset(&self) -> Option<u64> {
        self.has_more.then(|| self.offset + self.items.len() as u64)
    }

    /// Convert every item, keeping the page metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> OffsetPage<U> {
        OffsetPage {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
            has_more: self.has_more,
        }
    }
}

impl<T> IntoIterator for OffsetPage<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Wire shape accepted on deserialization. Any `has_more` in the payload is
/// ignored and recomputed.
#[derive(Deserialize)]
struct RawOffsetPage<T> {
    items: Vec<T>,
    total: u64,
    limit: i64,
    offset: i64,
}

impl<T> TryFrom<RawOffsetPage<T>> for OffsetPage<T> {
    type Error = PageError;

    fn try_from(raw: RawOffsetPage<T>) -> Result<Self, Self::Error> {
        OffsetPage::new(raw.items, raw.total, raw.limit, raw.offset)
    }
}
