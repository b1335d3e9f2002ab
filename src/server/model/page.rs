//! Keyset pagination shared by every collection route.

/// Number of records returned per page.
pub const PAGE_SIZE: u64 = 5;

/// One page of records plus the data needed to build the `next` link.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records on this page, ordered by key.
    pub items: Vec<T>,
    /// Key of the last record on this page when more records follow.
    pub next_cursor: Option<i32>,
    /// Total number of records in the collection, across all pages.
    pub count: u64,
}

impl<T> Page<T> {
    /// Builds a page from up to `PAGE_SIZE + 1` rows fetched after the cursor.
    ///
    /// The extra row only signals that another page exists and is dropped.
    pub fn from_lookahead(mut rows: Vec<T>, count: u64, key: impl Fn(&T) -> i32) -> Self {
        let has_more = rows.len() as u64 > PAGE_SIZE;
        rows.truncate(PAGE_SIZE as usize);

        let next_cursor = if has_more {
            rows.last().map(&key)
        } else {
            None
        };

        Self {
            items: rows,
            next_cursor,
            count,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
            count: self.count,
        }
    }
}
