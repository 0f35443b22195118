use std::ops::RangeInclusive;

/// Maximum number of page buttons rendered at once.
pub const PAGE_WINDOW: usize = 5;

/// Position of one page within a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// Effective page after clamping, 1-based.
    pub page: usize,
    pub total_pages: usize,
    /// Zero-based offset of the first visible item.
    pub start_index: usize,
    pub page_size: usize,
    pub total_items: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    pub meta: PageMeta,
}

/// Slice `items` for `page`. Out-of-range pages clamp to `1..=total_pages`;
/// an empty list still has one page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start_index = (page - 1) * page_size;
    let start = start_index.min(total_items);
    let end = (start_index + page_size).min(total_items);

    Page {
        visible: &items[start..end],
        meta: PageMeta {
            page,
            total_pages,
            start_index,
            page_size,
            total_items,
        },
    }
}

impl PageMeta {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn previous(&self) -> usize {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> usize {
        (self.page + 1).min(self.total_pages)
    }

    /// 1-based number of the first visible item, 0 for an empty list.
    pub fn first_item(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            self.start_index + 1
        }
    }

    pub fn last_item(&self) -> usize {
        (self.start_index + self.page_size).min(self.total_items)
    }

    pub fn window(&self) -> RangeInclusive<usize> {
        page_window(self.page, self.total_pages, PAGE_WINDOW)
    }
}

/// Up to `width` consecutive page numbers centred on `current`, shifted at the
/// edges so the range stays within `1..=total_pages`.
pub fn page_window(current: usize, total_pages: usize, width: usize) -> RangeInclusive<usize> {
    let total_pages = total_pages.max(1);
    let width = width.clamp(1, total_pages);
    let current = current.clamp(1, total_pages);

    let start = current
        .saturating_sub(width / 2)
        .clamp(1, total_pages - width + 1);
    start..=start + width - 1
}
