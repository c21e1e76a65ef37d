//! # API Facade
//!
//! [`MingpuApi`] is the single entry point for a browsing session, whatever UI drives
//! it. It owns the [`BrowseState`], the query [`Debouncer`] and a [`HandoffStore`], and
//! forwards every action to [`commands::dispatch`].
//!
//! ## Timing
//!
//! The facade is the only layer that knows about time. Search text goes through the
//! debouncer: [`MingpuApi::search`] only schedules it, and the query recomputes on the
//! first [`MingpuApi::tick`] after the quiet period. Every other command applies
//! immediately. Callers pass `now` explicitly, so a UI loop can use a real clock and
//! tests can step through instants.
//!
//! [`MingpuApi::clear_filters`] also drops any pending search text, otherwise a late
//! tick would re-apply a query the user just cleared.
//!
//! ## Generic Over HandoffStore
//!
//! - Production: `MingpuApi<FileHandoff>`
//! - Testing: `MingpuApi<InMemoryHandoff>`

use crate::catalog::Catalog;
use crate::commands::{self, CmdResult, Command};
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::filter::FilterCategory;
use crate::handoff::HandoffStore;
use crate::query::SortKey;
use crate::state::{BrowseState, PageView};
use std::time::{Duration, Instant};

pub struct MingpuApi<H: HandoffStore> {
    state: BrowseState,
    debouncer: Debouncer<String>,
    handoff: H,
}

impl<H: HandoffStore> MingpuApi<H> {
    pub fn new(catalog: Catalog, page_size: usize, quiet: Duration, handoff: H) -> Self {
        Self {
            state: BrowseState::new(catalog, page_size),
            debouncer: Debouncer::new(quiet),
            handoff,
        }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn handoff(&self) -> &H {
        &self.handoff
    }

    pub fn view(&self) -> PageView {
        self.state.view()
    }

    /// Whether search text is waiting for its quiet period.
    pub fn query_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Route a command. `SetQuery` is scheduled; everything else runs now.
    pub fn dispatch(&mut self, command: Command, now: Instant) -> Result<CmdResult> {
        match command {
            Command::SetQuery(text) => {
                self.debouncer.schedule(text, now);
                Ok(CmdResult::default().with_view(self.state.view()))
            }
            Command::ClearFilters => {
                self.debouncer.cancel();
                commands::dispatch(&mut self.state, &self.handoff, Command::ClearFilters)
            }
            other => commands::dispatch(&mut self.state, &self.handoff, other),
        }
    }

    /// Apply pending search text if its quiet period has elapsed by `now`.
    pub fn tick(&mut self, now: Instant) -> Result<Option<CmdResult>> {
        match self.debouncer.poll(now) {
            Some(text) => self.apply_query(text).map(Some),
            None => Ok(None),
        }
    }

    /// Apply pending search text without waiting.
    pub fn flush_query(&mut self) -> Result<Option<CmdResult>> {
        match self.debouncer.flush() {
            Some(text) => self.apply_query(text).map(Some),
            None => Ok(None),
        }
    }

    fn apply_query(&mut self, text: String) -> Result<CmdResult> {
        commands::dispatch(&mut self.state, &self.handoff, Command::SetQuery(text))
    }

    pub fn toggle_filter(&mut self, category: FilterCategory, token: &str) -> Result<CmdResult> {
        self.dispatch(
            Command::ToggleFilter {
                category,
                token: token.to_string(),
            },
            Instant::now(),
        )
    }

    pub fn set_hexagram(&mut self, name: Option<String>) -> Result<CmdResult> {
        self.dispatch(Command::SetHexagram(name), Instant::now())
    }

    pub fn search(&mut self, text: &str, now: Instant) -> Result<CmdResult> {
        self.dispatch(Command::SetQuery(text.to_string()), now)
    }

    pub fn set_sort(&mut self, key: SortKey) -> Result<CmdResult> {
        self.dispatch(Command::SetSort(key), Instant::now())
    }

    pub fn show_more(&mut self) -> Result<CmdResult> {
        self.dispatch(Command::AdvancePage, Instant::now())
    }

    pub fn clear_filters(&mut self) -> Result<CmdResult> {
        self.dispatch(Command::ClearFilters, Instant::now())
    }

    pub fn select(&mut self, id: u32) -> Result<CmdResult> {
        self.dispatch(Command::Select(id), Instant::now())
    }

    pub fn deselect(&mut self, id: u32) -> Result<CmdResult> {
        self.dispatch(Command::Deselect(id), Instant::now())
    }

    pub fn start_comparison(&mut self) -> Result<CmdResult> {
        self.dispatch(Command::StartComparison, Instant::now())
    }

    pub fn show_detail(&mut self, id: u32) -> Result<CmdResult> {
        self.dispatch(Command::ShowDetail(id), Instant::now())
    }

    pub fn statistics(&mut self) -> Result<CmdResult> {
        self.dispatch(Command::Statistics, Instant::now())
    }
}
