//! Page slicing for listings.

use serde::Serialize;

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page number that was requested.
    pub page: usize,
    pub page_size: usize,
    /// Number of records before slicing.
    pub total_count: usize,
    pub total_pages: usize,
}

/// Slice `records` to the requested 1-indexed page.
///
/// A page past the end yields an empty slice. Page 0 is treated as page 1.
pub fn paginate<T>(records: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let total_count = records.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total_count.div_ceil(page_size)
    };
    let offset = (page - 1).saturating_mul(page_size);

    let items = records.into_iter().skip(offset).take(page_size).collect();

    Page {
        items,
        page,
        page_size,
        total_count,
        total_pages,
    }
}

/// Parse a `page` query value.
///
/// Reads a leading integer the way form values are usually read (`"2abc"`
/// is page 2). Missing, non-numeric, zero and negative values become 1.
pub fn parse_page(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return 1;
    };
    let raw = raw.trim_start();
    if raw.starts_with('-') {
        return 1;
    }
    let digits: &str = {
        let unsigned = raw.strip_prefix('+').unwrap_or(raw);
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        &unsigned[..end]
    };
    if digits.is_empty() {
        return 1;
    }
    match digits.parse::<usize>() {
        Ok(0) => 1,
        Ok(page) => page,
        // More digits than fit: far past any real page.
        Err(_) => usize::MAX,
    }
}
