/// Translate a paginator offset (index of the first row shown) into the
/// zero-based page number the backend expects.
///
/// The candidate offsets are `0, rows, 2 * rows, ...` for every known page.
/// An offset that is not exactly one of them resolves to `None`; callers treat
/// that as "nothing to load" rather than as an error.
pub fn find_page(first: u64, total_pages: u32, rows_per_page: u32) -> Option<u32> {
    (0..total_pages)
        .map(|page| u64::from(page) * u64::from(rows_per_page))
        .position(|offset| offset == first)
        .map(|page| page as u32)
}
