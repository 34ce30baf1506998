use std::sync::Arc;

use tracing::{debug, warn};

use crate::fetcher::FetchOutcome;
use crate::filter::filter_users;
use crate::pagination::{paginate, PAGE_SIZE};
use crate::user::UserRecord;

/// Progress of the directory request. Exactly one variant is active; a
/// failure never keeps the previous collection around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Succeeded(Arc<[UserRecord]>),
    Failed(String),
}

/// Owns the fetch lifecycle, the search term and the page index of the
/// user directory. Everything shown on screen is derived by [`Self::view`].
#[derive(Debug)]
pub struct DirectoryState {
    fetch: FetchState,
    search: String,
    page: usize,
    fetch_seq: u64,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryState {
    pub fn new() -> Self {
        Self { fetch: FetchState::Idle, search: String::new(), page: 1, fetch_seq: 0 }
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn fetch_seq(&self) -> u64 {
        self.fetch_seq
    }

    /// Enters `Loading` from the initial `("", 1)` position and returns the
    /// sequence number the matching [`Self::apply_fetch`] must carry.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq = self.fetch_seq.wrapping_add(1);
        self.fetch = FetchState::Loading;
        self.search.clear();
        self.page = 1;
        debug!("Directory fetch #{} begun", self.fetch_seq);
        self.fetch_seq
    }

    /// Stores a fetch result. Results for any request other than the latest
    /// one, or arriving when no request is pending, are dropped.
    pub fn apply_fetch(&mut self, seq: u64, outcome: FetchOutcome) -> bool {
        if seq != self.fetch_seq || self.fetch != FetchState::Loading {
            warn!("Discarding stale directory fetch #{seq} (current #{})", self.fetch_seq);
            return false;
        }
        self.fetch = match outcome {
            Ok(users) => FetchState::Succeeded(users.into()),
            Err(e) => FetchState::Failed(e.to_string()),
        };
        true
    }

    pub fn can_retry(&self) -> bool {
        matches!(self.fetch, FetchState::Failed(_))
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut term = std::mem::take(&mut self.search);
        term.push(c);
        self.set_search(term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = std::mem::take(&mut self.search);
        term.pop();
        self.set_search(term);
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    fn total_pages(&self) -> usize {
        match &self.fetch {
            FetchState::Succeeded(users) => paginate(&filter_users(users, &self.search), 1, PAGE_SIZE).total_pages,
            _ => 0,
        }
    }

    pub fn view(&self) -> DirectoryView<'_> {
        match &self.fetch {
            FetchState::Idle => DirectoryView::Idle,
            FetchState::Loading => DirectoryView::Loading,
            FetchState::Failed(message) => DirectoryView::Failed { message },
            FetchState::Succeeded(users) => {
                let filtered = filter_users(users, &self.search);
                let page = paginate(&filtered, self.page, PAGE_SIZE);
                DirectoryView::Ready(ResultsView {
                    search: &self.search,
                    page_items: page.items.to_vec(),
                    filtered_count: filtered.len(),
                    total_count: users.len(),
                    page: self.page,
                    total_pages: page.total_pages,
                })
            }
        }
    }
}

/// Render-ready projection of [`DirectoryState`].
#[derive(Debug, PartialEq, Eq)]
pub enum DirectoryView<'a> {
    Idle,
    Loading,
    Failed { message: &'a str },
    Ready(ResultsView<'a>),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ResultsView<'a> {
    pub search: &'a str,
    pub page_items: Vec<&'a UserRecord>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl ResultsView<'_> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages >= 1
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    pub fn summary(&self) -> String {
        format!("Showing {} of {} users", self.page_items.len(), self.filtered_count)
    }
}

#[cfg(test)]
mod tests;
