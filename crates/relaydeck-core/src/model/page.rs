// ── Pagination ──
//
// The domain page plus the pure display-sequence math the paginator
// widget consumes. No I/O, no state.

/// A bounded slice of a collection plus navigation metadata.
///
/// Invariants as the backend reports them: `pages == ceil(total / size)`
/// (0 when total is 0) and `1 <= current <= max(pages, 1)`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub size: u64,
    pub current: u64,
    pub pages: u64,
}

impl<T> Page<T> {
    /// The empty page a list view renders when an envelope is not OK.
    pub fn empty(current: u64, size: u64) -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            size,
            current,
            pages: 0,
        }
    }

    /// The display sequence for this page's paginator.
    pub fn sequence(&self, delta: u64) -> Vec<PageItem> {
        page_sequence(self.current, self.pages, delta)
    }
}

/// The page count for a total/size pair.
pub fn page_count(total: u64, size: u64) -> u64 {
    if total == 0 || size == 0 {
        0
    } else {
        total.div_ceil(size)
    }
}

/// One element of the paginator display sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u64),
    Ellipsis,
}

/// Compute the page-number display sequence with ellipsis collapsing.
///
/// Keeps page 1, page `total_pages`, and every page within `delta` of
/// `current`. A gap of exactly one missing page between kept neighbors is
/// filled with that page; larger gaps collapse to a single ellipsis.
/// Idempotent, and never emits two consecutive ellipses.
pub fn page_sequence(current: u64, total_pages: u64, delta: u64) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }

    let mut kept: Vec<u64> = Vec::new();
    for page in 1..=total_pages {
        if page == 1 || page == total_pages || (page + delta >= current && page <= current + delta)
        {
            kept.push(page);
        }
    }

    let mut sequence = Vec::with_capacity(kept.len() + 2);
    let mut last: Option<u64> = None;
    for page in kept {
        if let Some(prev) = last {
            if page - prev == 2 {
                // Exactly one page missing: show it instead of an ellipsis.
                sequence.push(PageItem::Page(prev + 1));
            } else if page - prev > 2 {
                sequence.push(PageItem::Ellipsis);
            }
        }
        sequence.push(PageItem::Page(page));
        last = Some(page);
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageItem::{Ellipsis, Page as P};

    #[test]
    fn middle_page_collapses_both_sides() {
        // total=95, size=10 → pages=10; current=5.
        assert_eq!(page_count(95, 10), 10);
        assert_eq!(
            page_sequence(5, 10, 1),
            vec![P(1), Ellipsis, P(4), P(5), P(6), Ellipsis, P(10)]
        );
    }

    #[test]
    fn single_page_yields_just_itself() {
        assert_eq!(page_sequence(1, 1, 1), vec![P(1)]);
    }

    #[test]
    fn no_ellipsis_when_everything_fits() {
        // total_pages <= 2 * delta + 1 keeps every page.
        assert_eq!(page_sequence(2, 3, 1), vec![P(1), P(2), P(3)]);
        assert_eq!(
            page_sequence(3, 5, 2),
            vec![P(1), P(2), P(3), P(4), P(5)]
        );
    }

    #[test]
    fn gap_of_one_is_filled_not_collapsed() {
        // Kept pages 1 and 3 leave only page 2 missing.
        assert_eq!(
            page_sequence(4, 6, 1),
            vec![P(1), P(2), P(3), P(4), P(5), P(6)]
        );
    }

    #[test]
    fn edges_pin_first_and_last_pages() {
        assert_eq!(
            page_sequence(1, 10, 1),
            vec![P(1), P(2), Ellipsis, P(10)]
        );
        assert_eq!(
            page_sequence(10, 10, 1),
            vec![P(1), Ellipsis, P(9), P(10)]
        );
    }

    #[test]
    fn sequence_is_idempotent_and_never_doubles_ellipses() {
        for current in 1..=30 {
            let first = page_sequence(current, 30, 1);
            let second = page_sequence(current, 30, 1);
            assert_eq!(first, second);
            for window in first.windows(2) {
                assert_ne!(
                    window,
                    [Ellipsis, Ellipsis],
                    "double ellipsis at current={current}"
                );
            }
        }
    }

    #[test]
    fn zero_pages_renders_nothing() {
        assert_eq!(page_sequence(1, 0, 1), Vec::new());
        // The empty page a degraded list view holds renders no paginator.
        assert_eq!(Page::<()>::empty(3, 25).sequence(1), Vec::new());
    }

    #[test]
    fn page_count_edges() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
    }
}
