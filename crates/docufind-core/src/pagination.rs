//! Client-side pagination over an already-fetched result set.
//!
//! The whole result array is held in memory; a page is a slice of it. The
//! paginator remembers which result set (by generation number) its page
//! belongs to, and falls back to page 1 when a new set arrives. Without that,
//! a shorter result set could leave the list on an empty, out-of-range page.

use crate::config::RESULTS_PER_PAGE;
use std::ops::Range;

/// Number of pages needed for `len` items, `ceil(len / per_page)`.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1))
}

/// Current page of a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    per_page: usize,
    generation: u64,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(RESULTS_PER_PAGE)
    }
}

impl Paginator {
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            generation: 0,
        }
    }

    /// 1-based current page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Ties the paginator to a result set. Returns `true` if the set changed
    /// and the page was reset to 1.
    pub fn sync(&mut self, generation: u64) -> bool {
        if self.generation == generation {
            return false;
        }
        self.generation = generation;
        self.page = 1;
        true
    }

    /// Copy of this paginator as it would look for result set `generation`,
    /// for rendering before [`Paginator::sync`] has been applied.
    pub fn synced(&self, generation: u64) -> Self {
        let mut view = *self;
        view.sync(generation);
        view
    }

    /// Index range of the current page within a list of `len` items.
    pub fn item_range(&self, len: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(len);
        let end = (start + self.per_page).min(len);
        start..end
    }

    /// Items shown on the current page, `items[per_page*(page-1) .. per_page*page]`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.item_range(items.len())]
    }

    /// Jumps to `page` if it exists for a list of `len` items.
    pub fn go_to(&mut self, page: usize, len: usize) {
        if (1..=total_pages(len, self.per_page)).contains(&page) {
            self.page = page;
        }
    }

    pub fn previous(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn next(&mut self, len: usize) {
        if self.page < total_pages(len, self.per_page) {
            self.page += 1;
        }
    }

    /// State of the pagination controls for a list of `len` items.
    pub fn controls(&self, len: usize) -> PageControls {
        let total = total_pages(len, self.per_page);
        PageControls {
            current: self.page,
            total_pages: total,
            previous_disabled: self.page == 1,
            next_disabled: total == 0 || self.page >= total,
        }
    }
}

/// What the Previous / numbered / Next buttons should look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub current: usize,
    pub total_pages: usize,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl PageControls {
    /// Page numbers to render, one button each.
    pub fn pages(&self) -> impl Iterator<Item = usize> {
        1..=self.total_pages
    }

    pub fn is_current(&self, page: usize) -> bool {
        page == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_results;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(12, 5), 3);
    }

    #[test]
    fn test_slices_match_page_windows() {
        for len in 0..23 {
            let items: Vec<usize> = (0..len).collect();
            let mut pager = Paginator::default();
            for page in 1..=total_pages(len, 5) {
                pager.go_to(page, len);
                let end = (5 * page).min(len);
                assert_eq!(pager.slice(&items), &items[5 * (page - 1)..end]);
            }
        }
    }

    #[test]
    fn test_twelve_results_first_page() {
        let results = sample_results(12);
        let pager = Paginator::default();
        let controls = pager.controls(results.len());

        assert_eq!(pager.slice(&results).len(), 5);
        assert_eq!(pager.slice(&results)[0].filename, "doc-1.txt");
        assert_eq!(controls.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(controls.previous_disabled);
        assert!(!controls.next_disabled);
    }

    #[test]
    fn test_last_page_partial() {
        let results = sample_results(12);
        let mut pager = Paginator::default();
        pager.go_to(3, results.len());

        let shown = pager.slice(&results);
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[1].filename, "doc-12.txt");

        let controls = pager.controls(results.len());
        assert!(!controls.previous_disabled);
        assert!(controls.next_disabled);
    }

    #[test]
    fn test_boundary_navigation_is_noop() {
        let mut pager = Paginator::default();
        pager.previous();
        assert_eq!(pager.page(), 1);

        pager.next(7);
        assert_eq!(pager.page(), 2);
        pager.next(7);
        assert_eq!(pager.page(), 2);

        pager.go_to(9, 7);
        assert_eq!(pager.page(), 2);
        pager.go_to(0, 7);
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn test_empty_list_controls() {
        let pager = Paginator::default();
        let controls = pager.controls(0);
        assert_eq!(controls.total_pages, 0);
        assert!(controls.previous_disabled);
        assert!(controls.next_disabled);
        assert!(pager.slice::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_new_generation_resets_page() {
        let mut pager = Paginator::default();
        assert!(pager.sync(1));
        pager.go_to(3, 12);

        // Same result set: page kept
        assert!(!pager.sync(1));
        assert_eq!(pager.page(), 3);

        // Smaller new result set: back to page 1 instead of an empty page 3
        assert!(pager.sync(2));
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.slice(&sample_results(4)).len(), 4);
    }

    #[test]
    fn test_stale_page_slice_is_empty_not_panic() {
        let mut pager = Paginator::default();
        pager.go_to(3, 12);
        assert!(pager.slice(&sample_results(4)).is_empty());
    }

    #[test]
    fn test_synced_view_leaves_original() {
        let mut pager = Paginator::default();
        pager.sync(1);
        pager.go_to(2, 12);

        assert_eq!(pager.synced(1).page(), 2);
        assert_eq!(pager.synced(2).page(), 1);
        assert_eq!(pager.page(), 2);
    }
}
