use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_PAGE_SIZE: u64 = 100;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Raw `?page=&page_size=` query parameters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

/// Normalized pagination: 1-based page, clamped page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
}

impl From<PageQuery> for Pagination {
    fn from(query: PageQuery) -> Self {
        Self {
            page: query.page.unwrap_or(1).max(1),
            page_size: query
                .page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }
}

impl Pagination {
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_full_size() {
        let pagination = Pagination::from(PageQuery::default());
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn page_zero_is_treated_as_page_one() {
        let pagination = Pagination::from(PageQuery {
            page: Some(0),
            page_size: None,
        });
        assert_eq!(pagination.page, 1);
    }

    #[test]
    fn page_size_is_clamped() {
        let pagination = Pagination::from(PageQuery {
            page: None,
            page_size: Some(10_000),
        });
        assert_eq!(pagination.page_size, MAX_PAGE_SIZE);

        let pagination = Pagination::from(PageQuery {
            page: None,
            page_size: Some(0),
        });
        assert_eq!(pagination.page_size, 1);
    }

    #[test]
    fn offset_scales_with_page() {
        let pagination = Pagination::from(PageQuery {
            page: Some(3),
            page_size: Some(25),
        });
        assert_eq!(pagination.offset(), 50);
        assert_eq!(pagination.limit(), 25);
    }
}
