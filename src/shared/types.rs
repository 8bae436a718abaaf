use serde::{Deserialize, Serialize};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// One language's rendering of an entity's name and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub language_code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Translation {
    pub fn new(language_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Page window over an already-fetched list. Derived from it, never stored.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PaginationQuery {
    pub fn new(page: i64) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }

    pub fn total_pages(&self, total: usize) -> i64 {
        let limit = self.limit();
        ((total as i64) + limit - 1) / limit
    }

    /// The `[(page-1)*size, page*size)` window of `items`, clamped to bounds.
    pub fn paginate<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.offset() as usize).min(items.len());
        let end = (start + self.limit() as usize).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_partition_the_list() {
        let items: Vec<i64> = (0..13).collect();
        let size = DEFAULT_PAGE_SIZE as usize;

        let mut seen = Vec::new();
        for page in 1..=PaginationQuery::new(1).total_pages(items.len()) {
            let window = PaginationQuery::new(page).paginate(&items);
            assert!(window.len() <= size);
            seen.extend_from_slice(window);
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items: Vec<i64> = (0..3).collect();
        assert!(PaginationQuery::new(2).paginate(&items).is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        let query = PaginationQuery::default();
        assert_eq!(query.total_pages(0), 0);
        assert_eq!(query.total_pages(5), 1);
        assert_eq!(query.total_pages(6), 2);
    }

    #[test]
    fn page_below_one_is_treated_as_first() {
        let items: Vec<i64> = (0..7).collect();
        assert_eq!(PaginationQuery::new(0).paginate(&items), &[0, 1, 2, 3, 4]);
    }
}
