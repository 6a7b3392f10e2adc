//! Client-side pagination over the project rows.

use crate::data::ProjectRow;
use crate::error::WidgetError;
use log::debug;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// A fixed-size window over an ordered, shared row sequence.
///
/// The current page is always in `[1, total_pages]`. Moving past either end
/// is a no-op; the rows themselves are never touched.
#[derive(Debug, Clone)]
pub struct DataTable {
    rows: Arc<[ProjectRow]>,
    page_size: NonZeroUsize,
    page: usize,
}

impl DataTable {
    /// Create a table showing page 1 of `rows`.
    pub fn new(rows: Arc<[ProjectRow]>, page_size: NonZeroUsize) -> Self {
        Self {
            rows,
            page_size,
            page: 1,
        }
    }

    /// Like [`DataTable::new`], rejecting a page size of zero.
    pub fn with_page_size(rows: Arc<[ProjectRow]>, page_size: usize) -> Result<Self, WidgetError> {
        let page_size = NonZeroUsize::new(page_size).ok_or(WidgetError::ZeroPageSize)?;
        Ok(Self::new(rows, page_size))
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of pages; an empty table still has one (empty) page.
    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.page_size.get()).max(1)
    }

    /// Rows on `page`, clamped into range. The last page may be short.
    pub fn slice_for(&self, page: usize) -> &[ProjectRow] {
        let page = page.clamp(1, self.total_pages());
        let start = ((page - 1) * self.page_size.get()).min(self.rows.len());
        let end = (start + self.page_size.get()).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Rows on the current page.
    pub fn current_slice(&self) -> &[ProjectRow] {
        self.slice_for(self.page)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.page += 1;
            debug!("Table moved to page {} of {}", self.page, self.total_pages());
        }
    }

    pub fn prev_page(&mut self) {
        if self.has_prev() {
            self.page -= 1;
            debug!("Table moved to page {} of {}", self.page, self.total_pages());
        }
    }

    /// Jump to `page`, clamped into `[1, total_pages]`. Returns the page shown.
    pub fn go_to(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.total_pages());
        self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_projects;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rows(count: usize) -> Arc<[ProjectRow]> {
        generate_projects(count, &mut StdRng::seed_from_u64(3)).into()
    }

    fn table(count: usize, page_size: usize) -> DataTable {
        DataTable::with_page_size(rows(count), page_size).unwrap()
    }

    fn ids(slice: &[ProjectRow]) -> Vec<usize> {
        slice.iter().map(|r| r.id).collect()
    }

    #[test]
    // 200 rows at 10 per page: 20 pages, first and last windows line up.
    fn test_default_dataset_pages() {
        let mut table = table(200, 10);
        assert_eq!(table.total_pages(), 20);
        assert_eq!(ids(table.current_slice()), (1..=10).collect::<Vec<_>>());

        table.go_to(20);
        assert_eq!(ids(table.current_slice()), (191..=200).collect::<Vec<_>>());
    }

    #[test]
    fn test_total_pages_is_ceiling_with_minimum_one() {
        for len in 0..60 {
            for size in 1..12 {
                let table = table(len, size);
                let expected = len.div_ceil(size).max(1);
                assert_eq!(table.total_pages(), expected, "len={len} size={size}");
            }
        }
    }

    #[test]
    // Every page is full except possibly the last.
    fn test_slice_lengths() {
        for (len, size) in [(23, 5), (20, 5), (1, 10), (9, 4)] {
            let table = table(len, size);
            let total = table.total_pages();
            for page in 1..total {
                assert_eq!(table.slice_for(page).len(), size);
            }
            assert_eq!(table.slice_for(total).len(), len - (total - 1) * size);
        }
    }

    #[test]
    fn test_prev_at_first_page_is_noop() {
        let mut table = table(30, 10);
        assert!(!table.has_prev());
        table.prev_page();
        assert_eq!(table.page(), 1);
    }

    #[test]
    fn test_next_at_last_page_is_noop() {
        let mut table = table(30, 10);
        table.next_page();
        table.next_page();
        assert_eq!(table.page(), 3);
        assert!(!table.has_next());
        table.next_page();
        assert_eq!(table.page(), 3);
    }

    #[test]
    fn test_empty_rows_render_one_empty_page() {
        let mut table = table(0, 10);
        assert_eq!(table.total_pages(), 1);
        assert!(table.current_slice().is_empty());
        assert!(!table.has_prev());
        assert!(!table.has_next());
        table.next_page();
        assert_eq!(table.page(), 1);
    }

    #[test]
    fn test_go_to_clamps_out_of_range_pages() {
        let mut table = table(45, 10);
        assert_eq!(table.go_to(0), 1);
        assert_eq!(table.go_to(99), 5);
        assert_eq!(table.current_slice().len(), 5);
    }

    #[test]
    // Paging never reorders or mutates the shared rows.
    fn test_paging_leaves_rows_untouched() {
        let shared = rows(25);
        let before = shared.to_vec();
        let mut table = DataTable::with_page_size(shared.clone(), 10).unwrap();
        table.next_page();
        table.next_page();
        table.prev_page();
        assert_eq!(&*shared, before.as_slice());
        assert_eq!(table.len(), 25);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let result = DataTable::with_page_size(rows(10), 0);
        assert_eq!(result.unwrap_err(), WidgetError::ZeroPageSize);
    }
}
