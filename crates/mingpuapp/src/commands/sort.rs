use crate::commands::{CmdMessage, CmdResult};
use crate::query::SortKey;
use crate::state::BrowseState;

pub fn run(state: &mut BrowseState, key: SortKey) -> CmdResult {
    state.set_sort(key);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Sorted by {}", key)));
    result
}
