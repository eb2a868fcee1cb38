// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Client-side paging, sorting, and filtering over a collection fetched
//! wholesale from the backend. Every mutation is a synchronous
//! recomputation; the page index is re-clamped after each one.

use std::cmp::Ordering;
use std::fmt;

const PAGE_STRIP_WINDOW_THRESHOLD: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Rows(usize),
    All,
}

impl PageSize {
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(Self::All);
        }
        value.parse::<usize>().ok().map(Self::Rows)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStripEntry {
    Page(usize),
    Ellipsis,
}

struct Entry<T> {
    load_pos: usize,
    item: T,
}

type FilterPredicate<T> = Box<dyn Fn(&T) -> bool>;

pub struct PagedView<T> {
    entries: Vec<Entry<T>>,
    sort: Option<fn(&T, &T) -> Ordering>,
    filter: Option<FilterPredicate<T>>,
    page: usize,
    page_size: PageSize,
}

impl<T> fmt::Debug for PagedView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedView")
            .field("items", &self.entries.len())
            .field("filtered", &self.filtered_len())
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("sorted", &self.sort.is_some())
            .field("filter_active", &self.filter.is_some())
            .finish()
    }
}

impl<T> PagedView<T> {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            entries: Vec::new(),
            sort: None,
            filter: None,
            page: 1,
            page_size,
        }
    }

    /// Wholesale replacement after a successful fetch. The active sort is
    /// re-applied to the fresh items; a failed fetch must not call this,
    /// leaving prior state untouched.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.entries = items
            .into_iter()
            .enumerate()
            .map(|(load_pos, item)| Entry { load_pos, item })
            .collect();
        self.apply_sort();
        self.page = 1;
        self.clamp_page();
    }

    /// Stable reorder of the items themselves; `None` restores load order.
    /// Filtering is unaffected either way.
    pub fn set_sort(&mut self, sort: Option<fn(&T, &T) -> Ordering>) {
        self.sort = sort;
        self.apply_sort();
        self.page = 1;
        self.clamp_page();
    }

    pub fn set_filter(&mut self, filter: Option<FilterPredicate<T>>) {
        self.filter = filter;
        self.page = 1;
        self.clamp_page();
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(None);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = match page_size {
            PageSize::Rows(rows) => PageSize::Rows(rows.max(1)),
            PageSize::All => PageSize::All,
        };
        self.page = 1;
        self.clamp_page();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1).max(1));
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered_indices().len()
    }

    pub fn is_sorted(&self) -> bool {
        self.sort.is_some()
    }

    pub fn is_filtered(&self) -> bool {
        self.filter.is_some()
    }

    pub fn effective_page_size(&self) -> usize {
        match self.page_size {
            PageSize::Rows(rows) => rows.max(1),
            // "all" collapses to one page; floor of 1 avoids a zero divisor
            // on an empty collection.
            PageSize::All => self.filtered_len().max(1),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_len().div_ceil(self.effective_page_size()).max(1)
    }

    /// The visible slice: `filtered[(page-1)*size .. page*size]`.
    pub fn page_slice(&self) -> Vec<&T> {
        let size = self.effective_page_size();
        let start = (self.page - 1) * size;
        self.filtered_indices()
            .into_iter()
            .skip(start)
            .take(size)
            .map(|index| &self.entries[index].item)
            .collect()
    }

    /// Page-number strip for rendering. Short ranges list every page; long
    /// ranges compress to first, last, and current ± 1 with ellipses.
    pub fn page_strip(&self) -> Vec<PageStripEntry> {
        let total = self.total_pages();
        if total <= PAGE_STRIP_WINDOW_THRESHOLD {
            return (1..=total).map(PageStripEntry::Page).collect();
        }

        let mut strip = Vec::new();
        let mut gap_pending = false;
        for page in 1..=total {
            let in_window = page == 1
                || page == total
                || page.abs_diff(self.page) <= 1;
            if in_window {
                if gap_pending {
                    strip.push(PageStripEntry::Ellipsis);
                    gap_pending = false;
                }
                strip.push(PageStripEntry::Page(page));
            } else {
                gap_pending = true;
            }
        }
        strip
    }

    /// Drops the first matching item. Intended for use only after a remote
    /// delete succeeded; a failed delete must leave the view untouched.
    pub fn remove_item(&mut self, matches: impl Fn(&T) -> bool) -> bool {
        let Some(position) = self
            .entries
            .iter()
            .position(|entry| matches(&entry.item))
        else {
            return false;
        };
        self.entries.remove(position);
        self.clamp_page();
        true
    }

    fn filtered_indices(&self) -> Vec<usize> {
        match &self.filter {
            None => (0..self.entries.len()).collect(),
            Some(predicate) => self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| predicate(&entry.item))
                .map(|(index, _)| index)
                .collect(),
        }
    }

    fn apply_sort(&mut self) {
        match self.sort {
            Some(cmp) => self.entries.sort_by(|a, b| cmp(&a.item, &b.item)),
            None => self.entries.sort_by_key(|entry| entry.load_pos),
        }
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages());
    }
}

#[cfg(test)]
mod tests {
    use super::{PageSize, PageStripEntry, PagedView};
    use std::cmp::Ordering;

    fn view_with(count: usize, page_size: PageSize) -> PagedView<usize> {
        let mut view = PagedView::new(page_size);
        view.replace_items((1..=count).collect());
        view
    }

    fn desc(a: &usize, b: &usize) -> Ordering {
        b.cmp(a)
    }

    #[test]
    fn every_item_appears_on_exactly_one_page() {
        for (count, size) in [(23, 10), (1, 1), (30, 7), (100, 9)] {
            let mut view = view_with(count, PageSize::Rows(size));
            assert_eq!(view.total_pages(), count.div_ceil(size));

            let mut seen = Vec::new();
            for page in 1..=view.total_pages() {
                view.go_to_page(page);
                seen.extend(view.page_slice().into_iter().copied());
            }
            assert_eq!(seen, (1..=count).collect::<Vec<_>>());
        }
    }

    #[test]
    fn twenty_three_items_at_ten_per_page() {
        let mut view = view_with(23, PageSize::Rows(10));
        assert_eq!(view.total_pages(), 3);
        assert_eq!(
            view.page_slice().into_iter().copied().collect::<Vec<_>>(),
            (1..=10).collect::<Vec<_>>()
        );

        view.go_to_page(3);
        assert_eq!(
            view.page_slice().into_iter().copied().collect::<Vec<_>>(),
            vec![21, 22, 23]
        );
    }

    #[test]
    fn go_to_page_clamps_into_valid_range() {
        let mut view = view_with(23, PageSize::Rows(10));
        view.go_to_page(99);
        assert_eq!(view.page(), 3);
        view.go_to_page(0);
        assert_eq!(view.page(), 1);

        let mut empty: PagedView<usize> = PagedView::new(PageSize::Rows(10));
        empty.go_to_page(5);
        assert_eq!(empty.page(), 1);
        assert_eq!(empty.total_pages(), 1);
    }

    #[test]
    fn descending_sort_is_monotonic() {
        let mut view = PagedView::new(PageSize::All);
        view.replace_items(vec![3, 1, 4, 1, 5, 9, 2, 6]);
        view.set_sort(Some(desc));
        let items: Vec<usize> = view.page_slice().into_iter().copied().collect();
        for pair in items.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn sort_resets_page_to_first() {
        let mut view = view_with(30, PageSize::Rows(10));
        view.go_to_page(3);
        view.set_sort(Some(desc));
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn clearing_filter_does_not_resort() {
        let mut view = PagedView::new(PageSize::All);
        view.replace_items(vec![3, 1, 2]);
        view.set_sort(Some(desc));
        view.set_filter(Some(Box::new(|item: &usize| *item != 2)));
        assert_eq!(
            view.page_slice().into_iter().copied().collect::<Vec<_>>(),
            vec![3, 1]
        );

        // Filter clear keeps the sorted order; only a sort reset restores
        // load order.
        view.clear_filter();
        assert_eq!(
            view.page_slice().into_iter().copied().collect::<Vec<_>>(),
            vec![3, 2, 1]
        );

        view.set_sort(None);
        assert_eq!(
            view.page_slice().into_iter().copied().collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn filter_resets_page_and_clamps_bounds() {
        let mut view = view_with(40, PageSize::Rows(10));
        view.go_to_page(4);
        view.set_filter(Some(Box::new(|item: &usize| *item <= 5)));
        assert_eq!(view.page(), 1);
        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.filtered_len(), 5);
    }

    #[test]
    fn all_page_size_shows_everything_on_one_page() {
        let mut view = view_with(23, PageSize::Rows(10));
        view.go_to_page(2);
        view.set_page_size(PageSize::All);
        assert_eq!(view.page(), 1);
        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.page_slice().len(), 23);
    }

    #[test]
    fn zero_page_size_is_floored_to_one() {
        let mut view = view_with(3, PageSize::Rows(10));
        view.set_page_size(PageSize::Rows(0));
        assert_eq!(view.effective_page_size(), 1);
        assert_eq!(view.total_pages(), 3);
    }

    #[test]
    fn short_page_strip_lists_every_page() {
        let view = view_with(65, PageSize::Rows(10));
        assert_eq!(
            view.page_strip(),
            (1..=7).map(PageStripEntry::Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn long_page_strip_windows_around_current_page() {
        let mut view = view_with(120, PageSize::Rows(10));
        view.go_to_page(6);
        assert_eq!(
            view.page_strip(),
            vec![
                PageStripEntry::Page(1),
                PageStripEntry::Ellipsis,
                PageStripEntry::Page(5),
                PageStripEntry::Page(6),
                PageStripEntry::Page(7),
                PageStripEntry::Ellipsis,
                PageStripEntry::Page(12),
            ]
        );
    }

    #[test]
    fn long_page_strip_at_edges_has_single_gap() {
        let view = view_with(120, PageSize::Rows(10));
        assert_eq!(
            view.page_strip(),
            vec![
                PageStripEntry::Page(1),
                PageStripEntry::Page(2),
                PageStripEntry::Ellipsis,
                PageStripEntry::Page(12),
            ]
        );
    }

    #[test]
    fn remove_item_clamps_page_after_shrink() {
        let mut view = view_with(11, PageSize::Rows(10));
        view.go_to_page(2);
        assert!(view.remove_item(|item| *item == 11));
        assert_eq!(view.page(), 1);
        assert_eq!(view.len(), 10);
        assert!(!view.remove_item(|item| *item == 99));
    }

    #[test]
    fn page_size_parse_accepts_numbers_and_all() {
        assert_eq!(PageSize::parse("25"), Some(PageSize::Rows(25)));
        assert_eq!(PageSize::parse("all"), Some(PageSize::All));
        assert_eq!(PageSize::parse("lots"), None);
    }
}
