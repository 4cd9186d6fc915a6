/// Questions per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Returns the 1-indexed `page` of `items`, `page_size` items per page.
///
/// Page 0 and pages past the end yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = match (page - 1).checked_mul(page_size) {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_size).min(items.len());

    &items[start..end]
}
