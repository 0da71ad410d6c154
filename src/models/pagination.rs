//! Offset/limit pagination primitives shared by collection endpoints.
//!
//! Everything here is a pure function of `(total, start, limit)`. Paging is
//! disabled unless both `start` and `limit` are positive; in that mode the
//! whole collection is treated as one page and no navigation query is built.

/// Offset/limit query parameters as sent by clients (`?start=6&limit=5`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageWindow {
    pub start: Option<i64>,
    pub limit: Option<i64>,
}

impl PageWindow {
    /// Build a window, normalizing zero and negative values to "absent".
    pub fn new(start: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            start: start.filter(|v| *v > 0),
            limit: limit.filter(|v| *v > 0),
        }
    }

    /// Build a window from decoded query pairs.
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut start = None;
        let mut limit = None;
        for (key, value) in pairs {
            let slot = match key {
                "start" => &mut start,
                "limit" => &mut limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(parse_leading_int(value));
            }
        }
        Self {
            start: start.flatten(),
            limit: limit.flatten(),
        }
    }

    /// Both halves of the window, or `None` when paging is disabled.
    pub fn enabled(&self) -> Option<(i64, i64)> {
        match (self.start, self.limit) {
            (Some(start), Some(limit)) if start > 0 && limit > 0 => Some((start, limit)),
            _ => None,
        }
    }

    /// Row offset and row limit for the store query, `None` for "everything".
    ///
    /// `start` is used as a page number here, matching how collection
    /// links have always been fetched.
    pub fn fetch_bounds(&self) -> Option<(i64, i64)> {
        self.enabled()
            .map(|(start, limit)| ((start - 1).saturating_mul(limit), limit))
    }
}

/// Derived pagination state for a single collection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationResult {
    pub current_page: i64,
    pub number_of_pages: i64,
    pub current_item_count: i64,
    pub first_query: String,
    pub last_query: String,
    pub next_query: String,
    pub previous_query: String,
}

/// Number of items in the current window.
///
/// Not clamped: a `start` past `total` yields a negative count.
pub fn current_item_count(total: i64, window: PageWindow) -> i64 {
    match window.enabled() {
        Some((start, limit)) => (total - start).min(limit),
        None => total,
    }
}

pub fn total_pages(total: i64, window: PageWindow) -> i64 {
    match window.enabled() {
        Some((_, limit)) => (total.saturating_add(limit - 1) / limit).max(1),
        None => 1,
    }
}

pub fn current_page(window: PageWindow) -> i64 {
    match window.enabled() {
        Some((start, limit)) => start / limit + 1,
        None => 1,
    }
}

pub fn first_item() -> i64 {
    1
}

/// Start of the last window. A limit of one points at `total` itself.
pub fn last_item(total: i64, window: PageWindow) -> i64 {
    match window.enabled() {
        Some((_, 1)) | None => total,
        Some((_, limit)) => (total_pages(total, window) - 1) * limit,
    }
}

pub fn next_item(total: i64, window: PageWindow) -> Option<i64> {
    let (start, limit) = window.enabled()?;
    Some(start.saturating_add(limit).min(last_item(total, window)))
}

pub fn previous_item(window: PageWindow) -> Option<i64> {
    let (start, limit) = window.enabled()?;
    Some((start - limit).max(first_item()))
}

fn query_for(item: Option<i64>, window: PageWindow) -> String {
    match (item, window.enabled()) {
        (Some(item), Some((_, limit))) => format!("?start={item}&limit={limit}"),
        _ => String::new(),
    }
}

pub fn first_query(window: PageWindow) -> String {
    query_for(Some(first_item()), window)
}

pub fn last_query(total: i64, window: PageWindow) -> String {
    query_for(Some(last_item(total, window)), window)
}

pub fn next_query(total: i64, window: PageWindow) -> String {
    query_for(next_item(total, window), window)
}

pub fn previous_query(window: PageWindow) -> String {
    query_for(previous_item(window), window)
}

/// Compute every pagination field for `total` items viewed through `window`.
pub fn create_pagination(total: i64, window: PageWindow) -> PaginationResult {
    PaginationResult {
        current_page: current_page(window),
        number_of_pages: total_pages(total, window),
        current_item_count: current_item_count(total, window),
        first_query: first_query(window),
        last_query: last_query(total, window),
        next_query: next_query(total, window),
        previous_query: previous_query(window),
    }
}

/// Parse the leading integer of a query value (`"12abc"` -> 12).
///
/// Anything without a leading integer, and anything not positive, is
/// treated as absent so that paging falls back to "disabled". Digit runs
/// too long for `i64` saturate at `i64::MAX`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('-') {
        return None;
    }
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(value).filter(|v| *v > 0)
}
