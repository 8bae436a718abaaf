use crate::shared::constants::SUPPORTED_LANGUAGES;

/// Screens the console can be on. Detail routes carry the ids the data
/// layer resolves against fetched lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    SearchResults,
    CategoryDetail(i64),
    ContentTypeDetail {
        category_id: i64,
        content_type_id: i64,
    },
}

/// UI-local state: nothing here is fetched, everything reshapes fetched
/// views. The active language feeds every translated query key, so changing
/// it refetches translation-dependent lists by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleState {
    pub language: String,
    pub search_query: String,
    pub sidebar_open: bool,
    pub page: i64,
    pub editing_row: Option<i64>,
    pub route: Route,
}

impl ConsoleState {
    pub fn new(default_language: &str) -> Self {
        Self {
            language: default_language.to_string(),
            search_query: String::new(),
            sidebar_open: true,
            page: 1,
            editing_row: None,
            route: Route::Dashboard,
        }
    }

    /// Switch the display language. Returns whether anything changed, which
    /// is when callers re-run their translated queries.
    pub fn set_language(&mut self, language: &str) -> bool {
        if !SUPPORTED_LANGUAGES.contains(&language) || self.language == language {
            return false;
        }
        self.language = language.to_string();
        true
    }

    /// Typing a query routes to the search results; clearing it routes back
    /// to the dashboard. Already being on the right screen is a no-op.
    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
        if !query.trim().is_empty() {
            if self.route != Route::SearchResults {
                self.route = Route::SearchResults;
            }
        } else if self.route == Route::SearchResults {
            self.route = Route::Dashboard;
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_page(&mut self, page: i64) {
        self.page = page.max(1);
    }

    pub fn begin_edit(&mut self, row_id: i64) {
        self.editing_row = Some(row_id);
    }

    pub fn end_edit(&mut self) {
        self.editing_row = None;
    }

    pub fn navigate(&mut self, route: Route) {
        self.route = route;
        self.page = 1;
        self.editing_row = None;
    }
}
