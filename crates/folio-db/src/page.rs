//! Page result assembly.

use serde::Serialize;

/// One page of a listing plus totals computed under the same predicate.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of items on this page.
    pub count: usize,
    /// Total records matching the predicate.
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, page: i64, limit: i64) -> Self {
        let count = items.len();
        // ceil(total / limit); limit is always >= 1 here
        let total_pages = (total + limit - 1) / limit;
        Page {
            items,
            count,
            total,
            page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_division() {
        let page: Page<i32> = Page::new(vec![1, 2, 3], 11, 1, 5);
        assert_eq!(page.count, 3);
        assert_eq!(page.total, 11);
        assert_eq!(page.total_pages, 3);

        let exact: Page<i32> = Page::new(vec![], 10, 2, 5);
        assert_eq!(exact.total_pages, 2);

        let empty: Page<i32> = Page::new(vec![], 0, 1, 10);
        assert_eq!(empty.total_pages, 0);
        assert_eq!(empty.count, 0);
    }
}
