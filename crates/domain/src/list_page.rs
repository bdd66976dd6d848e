use serde::Serialize;

/// Number of entries in one page of a list.
pub const PAGE_SIZE: usize = 50;

/// 1-indexed page number.
///
/// Anything that is absent, not an integer, or below 1 collapses to page 1.
/// There is no upper bound; pages past the end of the data are simply empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(u64);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<i64>) {
            Some(Ok(n)) if n >= 1 => PageNumber(n as u64),
            _ => Self::FIRST,
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// Half-open `[start, end)` window of this page, clamped to `len`.
    pub fn window(&self, len: usize) -> (usize, usize) {
        let start = usize::try_from(self.0 - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(PAGE_SIZE)
            .min(len);
        let end = start.saturating_add(PAGE_SIZE).min(len);
        (start, end)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// One page of a (possibly filtered) list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListPage {
    pub entries: Vec<String>,
    /// Size of the filtered list, not of the page and not of the unfiltered list.
    pub total_count: usize,
}

impl ListPage {
    pub fn from_entries(entries: Vec<String>, page: PageNumber) -> Self {
        let total_count = entries.len();
        let (start, end) = page.window(total_count);
        let entries = entries
            .into_iter()
            .skip(start)
            .take(end - start)
            .collect();
        Self {
            entries,
            total_count,
        }
    }
}

/// Case-insensitive substring filter. An empty search keeps every entry.
/// Input order is preserved.
pub fn filter_entries(entries: Vec<String>, search: &str) -> Vec<String> {
    if search.is_empty() {
        return entries;
    }
    let needle = search.to_lowercase();
    entries
        .into_iter()
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .collect()
}
