//! # Browse State
//!
//! [`BrowseState`] is the single owner of everything a browsing session mutates: the
//! filter selections, query text, sort key, the materialized result, the page cursor
//! and the comparison selection. The catalog it browses is read-only.
//!
//! Every change to filters, query or sort goes through a method that recomputes the
//! result from the full catalog and resets the cursor to the first page. The result is
//! therefore always consistent with the current inputs; no caller can observe a stale
//! result after a mutation returns.

use crate::catalog::Catalog;
use crate::filter::{self, FilterCategory, FilterState};
use crate::model::CatalogEntry;
use crate::pagination::PageCursor;
use crate::query::{self, QueryResult, SortKey};
use crate::selection::SelectionList;
use serde::Serialize;

/// What the renderer needs to draw the visible page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub entries: Vec<CatalogEntry>,
    pub total_count: usize,
    pub has_more: bool,
    pub page_size: usize,
    pub page_count: usize,
}

#[derive(Debug, Clone)]
pub struct BrowseState {
    catalog: Catalog,
    filters: FilterState,
    query: String,
    sort: SortKey,
    results: QueryResult,
    cursor: PageCursor,
    selection: SelectionList,
}

impl BrowseState {
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        let mut state = Self {
            catalog,
            filters: FilterState::new(),
            query: String::new(),
            sort: SortKey::None,
            results: Vec::new(),
            cursor: PageCursor::new(page_size),
            selection: SelectionList::new(),
        };
        state.recompute();
        state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn results(&self) -> &[CatalogEntry] {
        &self.results
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn selection(&self) -> &SelectionList {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionList {
        &mut self.selection
    }

    /// Rebuild the result from the catalog and show the first page again.
    pub fn recompute(&mut self) {
        let predicate = filter::build(&self.filters, &self.query);
        self.results = query::run(self.catalog.entries(), &predicate, self.sort);
        self.cursor.reset();
    }

    /// Returns whether the token is selected afterwards.
    pub fn toggle_filter(&mut self, category: FilterCategory, token: &str) -> bool {
        let selected = self.filters.toggle(category, token);
        self.recompute();
        selected
    }

    pub fn set_hexagram(&mut self, name: Option<String>) {
        self.filters.set_hexagram(name);
        self.recompute();
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.recompute();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
        self.recompute();
    }

    /// Reset filters, hexagram and query. The sort key and selection are kept.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.query.clear();
        self.recompute();
    }

    pub fn advance_page(&mut self) -> bool {
        self.cursor.advance(self.results.len())
    }

    pub fn window(&self) -> &[CatalogEntry] {
        self.cursor.window(&self.results)
    }

    pub fn total_count(&self) -> usize {
        self.results.len()
    }

    pub fn has_more(&self) -> bool {
        self.cursor.has_more(self.results.len())
    }

    pub fn view(&self) -> PageView {
        PageView {
            entries: self.window().to_vec(),
            total_count: self.total_count(),
            has_more: self.has_more(),
            page_size: self.cursor.page_size(),
            page_count: self.cursor.page_count(),
        }
    }
}
