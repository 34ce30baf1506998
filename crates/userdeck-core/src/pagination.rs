/// Records per page in the user directory.
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Window `[(page_index - 1) * page_size, page_index * page_size)` of `items`.
///
/// Page indices are 1-based. Index 0 and indices past the last page yield an
/// empty window; clamping is left to the caller.
pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let start = page_index.checked_sub(1).and_then(|p| p.checked_mul(page_size));
    let items = match start {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        }
        _ => &[],
    };
    Page { items, total_pages }
}
