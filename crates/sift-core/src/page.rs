//! Paginator: fixed-size page windows over an ordered result set
//!
//! A small state machine over `current_page = 1..=page_count`. Disallowed
//! transitions are no-ops; consumers gate their next/previous affordances
//! on the same booleans the transitions check.

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    page: usize,
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> Paginator<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            page: 1,
        }
    }

    /// Replace the underlying collection. Always snaps back to page 1,
    /// even when the new collection matches the old one.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.page = 1;
    }

    /// Total number of items across all pages.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages, at least 1 even for an empty collection.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.page * self.page_size < self.items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Advance one page. Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page. Returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// The items visible on the current page.
    pub fn current_slice(&self) -> &[T] {
        let start = (self.page - 1) * self.page_size;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_page_one_of_one() {
        let pager: Paginator<u32> = Paginator::new(5);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.page_count(), 1);
        assert!(pager.current_slice().is_empty());
        assert!(!pager.has_next());
        assert!(!pager.has_previous());
    }

    #[test]
    fn test_six_items_walk() {
        let mut pager = Paginator::new(5);
        pager.set_items((1..=6).collect());

        assert_eq!(pager.current_slice(), &[1, 2, 3, 4, 5]);
        assert!(!pager.has_previous());
        assert!(pager.has_next());

        assert!(pager.next());
        assert_eq!(pager.current_slice(), &[6]);
        assert!(!pager.has_next());
        assert!(pager.has_previous());

        assert!(pager.previous());
        assert_eq!(pager.current_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_disallowed_transitions_are_no_ops() {
        let mut pager = Paginator::new(5);
        pager.set_items(vec![1, 2, 3]);

        assert!(!pager.next());
        assert_eq!(pager.page(), 1);
        assert!(!pager.previous());
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_replacing_items_resets_page() {
        let mut pager = Paginator::new(5);
        pager.set_items((1..=6).collect());
        pager.next();
        assert_eq!(pager.page(), 2);

        pager.set_items(vec![7, 8, 9]);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.current_slice(), &[7, 8, 9]);
    }

    #[test]
    fn test_reset_is_unconditional() {
        let mut pager = Paginator::new(2);
        pager.set_items((1..=6).collect());
        pager.next();
        pager.next();
        assert_eq!(pager.page(), 3);
        pager.reset();
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_exact_multiple_has_no_phantom_page() {
        let mut pager = Paginator::new(5);
        pager.set_items((1..=10).collect());
        assert_eq!(pager.page_count(), 2);
        pager.next();
        assert!(!pager.has_next());
        assert_eq!(pager.current_slice(), &[6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_page_size_floor_is_one() {
        let pager: Paginator<u32> = Paginator::new(0);
        assert_eq!(pager.page_size(), 1);
    }
}
