use crate::commands::{CmdMessage, CmdResult};
use crate::filter::FilterCategory;
use crate::state::BrowseState;

pub fn toggle(state: &mut BrowseState, category: FilterCategory, token: &str) -> CmdResult {
    let selected = state.toggle_filter(category, token);
    let mut result = CmdResult::default();

    let verb = if selected { "added" } else { "removed" };
    result.add_message(CmdMessage::info(format!(
        "Filter {} {}: {} ({} matching)",
        category,
        verb,
        token,
        state.total_count()
    )));
    result
}

pub fn set_hexagram(state: &mut BrowseState, name: Option<String>) -> CmdResult {
    state.set_hexagram(name);
    let mut result = CmdResult::default();

    let content = match state.filters().hexagram() {
        Some(name) => format!("Hexagram filter: {} ({} matching)", name, state.total_count()),
        None => "Hexagram filter cleared".to_string(),
    };
    result.add_message(CmdMessage::info(content));
    result
}

pub fn clear(state: &mut BrowseState) -> CmdResult {
    state.clear_filters();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Filters cleared ({} entries)",
        state.total_count()
    )));
    result
}
