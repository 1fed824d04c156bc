//! # Pagination Module
//!
//! Computes the ordered sequence of page controls for the catalog pager.
//!
//! ## Control Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Page Control Windows                                │
//! │                                                                         │
//! │  total_pages <= 5          every page, no ellipses                     │
//! │      page 2 of 4     →     [1] [2] [3] [4]                             │
//! │                                                                         │
//! │  total_pages > 5           1, window around page, last page            │
//! │      page 7 of 12    →     [1] … [6] [7] [8] … [12]                    │
//! │      page 2 of 12    →     [1] [2] [3] … [12]                          │
//! │      page 11 of 12   →     [1] … [10] [11] [12]                        │
//! │                                                                         │
//! │  The window is [max(2, page-1), min(total_pages-1, page+1)].           │
//! │  Left ellipsis iff page > 3; right ellipsis iff page < total-2.        │
//! │  The trailing last-page control is emitted once; a duplicate page      │
//! │  number would be a duplicate render key downstream.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is pure and deterministic: same inputs, same sequence.

use crate::MAX_VISIBLE_PAGE_BUTTONS;

/// One element of the pager row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// A numbered page button.
    Page(u32),
    /// A non-interactive "…" gap.
    Ellipsis,
}

/// Number of pages needed for `total` items at `limit` per page.
///
/// Ceiling division; zero items means zero pages (the pager renders
/// nothing, not a lone disabled button).
pub fn total_pages(total: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Whether a page transition should be applied at all.
///
/// Out-of-range targets and no-op transitions are ignored, mirroring the
/// disabled arrow buttons.
pub fn is_valid_transition(page: u32, new_page: u32, total_pages: u32) -> bool {
    new_page >= 1 && new_page <= total_pages && new_page != page
}

/// Produces the ordered control sequence for `page` of `total_pages`.
///
/// ## Guarantees
/// - Page 1 is always present.
/// - When `total_pages > 1`, the last page is always present, exactly once.
/// - No page number is ever emitted twice.
pub fn page_controls(page: u32, total_pages: u32) -> Vec<PageControl> {
    let mut controls = Vec::new();
    let mut last_page_added = false;

    if total_pages == 0 {
        return controls;
    }

    // Page 1 is unconditional.
    controls.push(PageControl::Page(1));

    if total_pages > MAX_VISIBLE_PAGE_BUTTONS {
        if page > 3 {
            controls.push(PageControl::Ellipsis);
        }

        let start = 2.max(page.saturating_sub(1));
        let end = (total_pages - 1).min(page + 1);

        for n in start..=end {
            controls.push(PageControl::Page(n));
        }

        if end >= total_pages {
            last_page_added = true;
        }

        if page < total_pages.saturating_sub(2) {
            controls.push(PageControl::Ellipsis);
        }
    } else {
        for n in 2..=total_pages {
            controls.push(PageControl::Page(n));
            if n == total_pages {
                last_page_added = true;
            }
        }
    }

    if total_pages > 1 && !last_page_added {
        controls.push(PageControl::Page(total_pages));
    }

    controls
}
