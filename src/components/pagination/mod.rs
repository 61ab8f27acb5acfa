// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Page-number strip and paging state.
//!
//! This module provides the paging model used by list views, and the page
//! range generator that decides which page numbers a compact page strip
//! shows.
//!
//! The strip never changes page by itself. Input handling reports the page
//! the user asked for, and the owner of the [`Pagination`] state applies it.
//!
//! # Page range
//!
//! With few pages every page is listed. Otherwise the first and last pages
//! are always shown, together with a window of up to five pages around the
//! current page, and an ellipsis stands in for each hidden run of pages:
//!
//! ```text
//! [1] 2  3  4  5  …  10
//!  1  …  3  4 [5] 6  7  …  10
//!  1  …  6  7  8  9 [10]
//! ```

mod event;
mod render;

use std::{num::NonZeroUsize, ops::Range};

/// Page counts up to this are listed in full.
pub(crate) const MAX_VISIBLE_PAGES: usize = 5;

/// Distance from the current page to either edge of the window.
const WINDOW_RADIUS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Returns the markers to render for `current_page` of `total_pages`.
///
/// `current_page` is 1-based and must already be within
/// `1..=total_pages`, it is not clamped here.
pub(crate) fn page_range(current_page: usize, total_pages: NonZeroUsize) -> Vec<PageMarker> {
    let total = total_pages.get();

    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let mut start = current_page.saturating_sub(WINDOW_RADIUS).max(1);
    let mut end = (current_page + WINDOW_RADIUS).min(total);

    // Keep the window full width when it runs into either edge
    if current_page <= WINDOW_RADIUS {
        end = MAX_VISIBLE_PAGES;
    }
    if current_page >= total - 1 {
        start = total - (MAX_VISIBLE_PAGES - 1);
    }

    let mut markers = Vec::with_capacity(MAX_VISIBLE_PAGES + 4);

    markers.push(PageMarker::Page(1));

    markers.push(if start <= 2 {
        PageMarker::Page(2)
    } else {
        PageMarker::Ellipsis
    });

    markers.extend((start.max(3)..=end.min(total - 2)).map(PageMarker::Page));

    markers.push(if end >= total - 1 {
        PageMarker::Page(total - 1)
    } else {
        PageMarker::Ellipsis
    });

    markers.push(PageMarker::Page(total));

    markers
}

/// Paging over a list of `total_items` items, `page_size` per page.
///
/// The current page is kept within range whenever the item count or the
/// page changes, and there is always at least one (possibly empty) page.
#[derive(Debug, Clone)]
pub(crate) struct Pagination {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Pagination {
    pub(crate) fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    pub(crate) fn current_page(&self) -> usize {
        self.current_page
    }

    pub(crate) fn total_pages(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.total_items.div_ceil(self.page_size)).unwrap_or(NonZeroUsize::MIN)
    }

    pub(crate) fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = self.clamp(self.current_page);
    }

    pub(crate) fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub(crate) fn has_next(&self) -> bool {
        self.current_page < self.total_pages().get()
    }

    /// Moves to `page`, clamped into range. Returns `true` if the page
    /// changed.
    pub(crate) fn goto(&mut self, page: usize) -> bool {
        let page = self.clamp(page);
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }

    /// Indices of the items on the current page.
    pub(crate) fn item_range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    pub(crate) fn markers(&self) -> Vec<PageMarker> {
        page_range(self.current_page, self.total_pages())
    }

    fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().get())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    fn range(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
        page_range(current_page, NonZeroUsize::new(total_pages).unwrap())
    }

    fn pages(numbers: &[usize]) -> Vec<PageMarker> {
        numbers.iter().copied().map(Page).collect()
    }

    #[test]
    fn should_list_every_page_when_few_pages() {
        for total in 1..=MAX_VISIBLE_PAGES {
            let expected: Vec<usize> = (1..=total).collect();
            for current in 1..=total {
                assert_eq!(range(current, total), pages(&expected), "page {} of {}", current, total);
            }
        }
    }

    #[test]
    fn should_show_single_page() {
        assert_eq!(range(1, 1), pages(&[1]));
    }

    #[test]
    fn should_pin_window_to_start() {
        assert_eq!(range(1, 10), vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]);
        assert_eq!(range(2, 10), vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]);
    }

    #[test]
    fn should_pin_window_to_end() {
        assert_eq!(range(10, 10), vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]);
        assert_eq!(range(9, 10), vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]);
    }

    #[test]
    fn should_center_window_on_current_page() {
        assert_eq!(
            range(5, 10),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
        assert_eq!(
            range(50, 100),
            vec![Page(1), Ellipsis, Page(48), Page(49), Page(50), Page(51), Page(52), Ellipsis, Page(100)]
        );
    }

    #[test]
    fn should_not_hide_pages_without_ellipsis() {
        assert_eq!(range(3, 6), pages(&[1, 2, 3, 4, 5, 6]));
        assert_eq!(range(4, 6), pages(&[1, 2, 3, 4, 5, 6]));
        assert_eq!(range(4, 7), pages(&[1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(range(3, 10), vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]);
        assert_eq!(range(8, 10), vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]);
    }

    #[test]
    fn should_hold_range_invariants_for_all_pages() {
        for total in 1..=40 {
            for current in 1..=total {
                let markers = range(current, total);

                assert_eq!(markers.first(), Some(&Page(1)), "page {} of {}", current, total);
                assert_eq!(markers.last(), Some(&Page(total)), "page {} of {}", current, total);
                assert!(markers.contains(&Page(current)), "page {} of {}", current, total);

                for pair in markers.windows(2) {
                    match pair {
                        [Ellipsis, Ellipsis] => panic!("adjacent ellipses, page {} of {}", current, total),
                        [Page(a), Page(b)] => assert_eq!(a + 1, *b, "gap without ellipsis, page {} of {}", current, total),
                        _ => {}
                    }
                }

                let numbers: Vec<usize> = markers
                    .iter()
                    .filter_map(|m| match m {
                        Page(n) => Some(*n),
                        Ellipsis => None,
                    })
                    .collect();
                assert!(numbers.windows(2).all(|w| w[0] < w[1]), "page {} of {}", current, total);
            }
        }
    }

    #[test]
    fn should_derive_total_pages_from_items() {
        let mut pagination = Pagination::new(10);
        assert_eq!(pagination.total_pages().get(), 1);

        pagination.set_total_items(10);
        assert_eq!(pagination.total_pages().get(), 1);

        pagination.set_total_items(11);
        assert_eq!(pagination.total_pages().get(), 2);

        let mut unsized_pages = Pagination::new(0);
        unsized_pages.set_total_items(3);
        assert_eq!(unsized_pages.total_pages().get(), 3);
    }

    #[test]
    fn should_clamp_current_page() {
        let mut pagination = Pagination::new(10);
        pagination.set_total_items(95);

        assert!(pagination.goto(20));
        assert_eq!(pagination.current_page(), 10);
        assert!(!pagination.goto(10));

        assert!(pagination.goto(0));
        assert_eq!(pagination.current_page(), 1);

        pagination.goto(10);
        pagination.set_total_items(25);
        assert_eq!(pagination.current_page(), 3);

        pagination.set_total_items(0);
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn should_disable_previous_and_next_at_edges() {
        let mut pagination = Pagination::new(10);
        pagination.set_total_items(30);

        assert!(!pagination.has_previous());
        assert!(pagination.has_next());

        pagination.goto(3);
        assert!(pagination.has_previous());
        assert!(!pagination.has_next());

        pagination.set_total_items(0);
        assert!(!pagination.has_previous());
        assert!(!pagination.has_next());
    }

    #[test]
    fn should_return_item_range_of_current_page() {
        let mut pagination = Pagination::new(10);
        assert_eq!(pagination.item_range(), 0..0);

        pagination.set_total_items(25);
        assert_eq!(pagination.item_range(), 0..10);

        pagination.goto(3);
        assert_eq!(pagination.item_range(), 20..25);
    }
}
