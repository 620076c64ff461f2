//! Turning `page`/`limit` request values into an offset window.

use specimen_shared::{OffsetPage, PageError};

use crate::error::DomainError;

/// Page size bounds, resolved once from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingDefaults {
    default_limit: u32,
    max_limit: u32,
}

impl ListingDefaults {
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const MAX_LIMIT: u32 = 100;

    pub fn new(default_limit: u32, max_limit: u32) -> Result<Self, DomainError> {
        if default_limit == 0 {
            return Err(DomainError::Validation(
                "default page limit must be positive".to_string(),
            ));
        }
        if default_limit > max_limit {
            return Err(DomainError::Validation(format!(
                "default page limit {default_limit} exceeds maximum {max_limit}"
            )));
        }
        Ok(Self {
            default_limit,
            max_limit,
        })
    }

    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }

    pub fn max_limit(&self) -> u32 {
        self.max_limit
    }
}

impl Default for ListingDefaults {
    fn default() -> Self {
        Self {
            default_limit: Self::DEFAULT_LIMIT,
            max_limit: Self::MAX_LIMIT,
        }
    }
}

/// Validated `limit`/`offset` pair for one listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    limit: u32,
    offset: u64,
}

impl PageWindow {
    /// Resolve a 1-based page number and page size.
    ///
    /// Missing values fall back to page 1 and the configured default limit.
    /// Out-of-range values are rejected, never clamped.
    pub fn resolve(
        page: Option<u32>,
        limit: Option<u32>,
        defaults: &ListingDefaults,
    ) -> Result<Self, DomainError> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(defaults.default_limit);

        if page == 0 {
            return Err(PageError::ZeroPage.into());
        }
        if limit == 0 {
            return Err(PageError::NonPositiveLimit(0).into());
        }
        if limit > defaults.max_limit {
            return Err(PageError::LimitAboveMax {
                limit,
                max: defaults.max_limit,
            }
            .into());
        }

        let offset = u64::from(page - 1) * u64::from(limit);
        if i64::try_from(offset).is_err() {
            return Err(PageError::PageOutOfRange(page).into());
        }

        Ok(Self { limit, offset })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Wrap the slice fetched for this window into a page.
    pub fn page<T>(&self, items: Vec<T>, total: u64) -> Result<OffsetPage<T>, PageError> {
        // offset fits in i64, checked in `resolve`
        OffsetPage::new(items, total, i64::from(self.limit), self.offset as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_absent() {
        let window = PageWindow::resolve(None, None, &ListingDefaults::default()).unwrap();
        assert_eq!(window.limit(), 20);
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn test_page_is_one_based() {
        let window = PageWindow::resolve(Some(3), Some(10), &ListingDefaults::default()).unwrap();
        assert_eq!(window.offset(), 20);
    }

    #[test]
    fn test_rejects_page_zero() {
        let result = PageWindow::resolve(Some(0), Some(10), &ListingDefaults::default());
        assert!(matches!(
            result,
            Err(DomainError::Pagination(PageError::ZeroPage))
        ));
    }

    #[test]
    fn test_rejects_zero_limit() {
        let result = PageWindow::resolve(None, Some(0), &ListingDefaults::default());
        assert!(matches!(
            result,
            Err(DomainError::Pagination(PageError::NonPositiveLimit(0)))
        ));
    }

    #[test]
    fn test_rejects_limit_above_max_instead_of_clamping() {
        let defaults = ListingDefaults::new(5, 50).unwrap();
        let result = PageWindow::resolve(None, Some(51), &defaults);
        assert!(matches!(
            result,
            Err(DomainError::Pagination(PageError::LimitAboveMax { limit: 51, max: 50 }))
        ));
    }

    #[test]
    fn test_large_page_stays_representable() {
        let window =
            PageWindow::resolve(Some(u32::MAX), Some(100), &ListingDefaults::default()).unwrap();
        assert_eq!(window.offset(), u64::from(u32::MAX - 1) * 100);
    }

    #[test]
    fn test_rejects_offset_past_i64() {
        let defaults = ListingDefaults::new(1, u32::MAX).unwrap();
        let result = PageWindow::resolve(Some(u32::MAX), Some(u32::MAX), &defaults);
        assert!(matches!(
            result,
            Err(DomainError::Pagination(PageError::PageOutOfRange(u32::MAX)))
        ));
    }

    #[test]
    fn test_defaults_validation() {
        assert!(ListingDefaults::new(0, 10).is_err());
        assert!(ListingDefaults::new(20, 10).is_err());
        assert_eq!(ListingDefaults::new(10, 10).unwrap().max_limit(), 10);
    }

    #[test]
    fn test_window_builds_page() {
        let window = PageWindow::resolve(Some(2), Some(2), &ListingDefaults::default()).unwrap();
        let page = window.page(vec!["c", "d"], 5).unwrap();
        assert_eq!(page.offset(), 2);
        assert!(page.has_more());
    }
}
