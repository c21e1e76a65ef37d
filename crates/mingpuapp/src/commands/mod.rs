//! # Command Layer
//!
//! Every user action in a browsing session is a [`Command`]. [`dispatch`] is the one
//! reducer that applies a command to a [`BrowseState`] and reports what happened as a
//! [`CmdResult`]. Each command lives in its own submodule as a plain function over the
//! state.
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout, stderr or formatting; the UI decides how to render.
//! - **Timing**: the query debounce lives in the API facade, so `SetQuery` applies
//!   immediately here.
//! - **Exit codes**: errors are returned, the caller decides.
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries the visible page after the command ran, any entries the
//! command is about (the detail entry, the compared entries), statistics when asked
//! for, the hand-off key that was written, and leveled messages.
//!
//! Selection rejections (duplicate pick, full list, too few to compare) are not
//! errors: they come back as warning messages and the state is left untouched.
//!
//! ## Command Modules
//!
//! - [`filter`]: toggle filter tokens, set the hexagram, clear everything
//! - [`search`]: apply the free-text query
//! - [`sort`]: change the sort key
//! - [`page`]: show one more page
//! - [`compare`]: select, deselect and start a comparison
//! - [`detail`]: open one entry
//! - [`stats`]: catalog-wide statistics

use crate::error::Result;
use crate::filter::FilterCategory;
use crate::handoff::{HandoffKey, HandoffStore};
use crate::model::CatalogEntry;
use crate::query::SortKey;
use crate::state::{BrowseState, PageView};
use crate::stats::CatalogStats;
use serde::Serialize;

pub mod compare;
pub mod detail;
pub mod filter;
pub mod page;
pub mod search;
pub mod sort;
pub mod stats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct CmdResult {
    /// The visible page after the command ran.
    pub view: Option<PageView>,
    /// Entries the command is about, for detail and comparison.
    pub entries: Vec<CatalogEntry>,
    pub stats: Option<CatalogStats>,
    /// Hand-off record written by the command, if any.
    pub handoff: Option<HandoffKey>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_view(mut self, view: PageView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_entries(mut self, entries: Vec<CatalogEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}

/// A user action in a browsing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ToggleFilter {
        category: FilterCategory,
        token: String,
    },
    SetHexagram(Option<String>),
    SetQuery(String),
    SetSort(SortKey),
    AdvancePage,
    ClearFilters,
    Select(u32),
    Deselect(u32),
    StartComparison,
    ShowDetail(u32),
    Statistics,
}

impl Command {
    /// Whether the command changes the query inputs, and so the result.
    pub fn recomputes(&self) -> bool {
        matches!(
            self,
            Command::ToggleFilter { .. }
                | Command::SetHexagram(_)
                | Command::SetQuery(_)
                | Command::SetSort(_)
                | Command::ClearFilters
        )
    }
}

/// Apply `command` to `state`. The returned result always carries the page view.
pub fn dispatch<H: HandoffStore + ?Sized>(
    state: &mut BrowseState,
    handoff: &H,
    command: Command,
) -> Result<CmdResult> {
    tracing::debug!(?command, "dispatch");

    let result = match command {
        Command::ToggleFilter { category, token } => filter::toggle(state, category, &token),
        Command::SetHexagram(name) => filter::set_hexagram(state, name),
        Command::ClearFilters => filter::clear(state),
        Command::SetQuery(text) => search::run(state, text),
        Command::SetSort(key) => sort::run(state, key),
        Command::AdvancePage => page::advance(state),
        Command::Select(id) => compare::select(state, id)?,
        Command::Deselect(id) => compare::deselect(state, id),
        Command::StartComparison => compare::start(state, handoff)?,
        Command::ShowDetail(id) => detail::run(state, handoff, id)?,
        Command::Statistics => stats::run(state)?,
    };

    Ok(result.with_view(state.view()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::handoff::InMemoryHandoff;
    use crate::test_utils::sample_entries;

    #[test]
    fn every_result_carries_the_view() {
        let mut state = BrowseState::new(Catalog::new(sample_entries(12)).unwrap(), 9);
        let handoff = InMemoryHandoff::new();

        for command in [
            Command::SetSort(SortKey::Name),
            Command::AdvancePage,
            Command::Select(1),
            Command::Statistics,
        ] {
            let result = dispatch(&mut state, &handoff, command).unwrap();
            assert!(result.view.is_some());
        }
    }

    #[test]
    fn recomputing_commands() {
        assert!(Command::ClearFilters.recomputes());
        assert!(Command::SetQuery("x".into()).recomputes());
        assert!(!Command::AdvancePage.recomputes());
        assert!(!Command::Select(1).recomputes());
    }
}
