use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Page size used by the admin survey list.
pub const DEFAULT_PER_PAGE: usize = 10;

/// One page of an ordered row set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    /// Zero when there are no items.
    pub total_pages: usize,
}

/// Return the `page`-th slice of `items` (1-based) and the page count.
///
/// Page 0 is read as page 1 and a zero page size as 1. A page past the end
/// is empty but still reports the real page count.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let items = items
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();

    Page {
        items,
        page,
        per_page,
        total_items,
        total_pages,
    }
}
