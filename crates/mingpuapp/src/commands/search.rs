use crate::commands::{CmdMessage, CmdResult};
use crate::state::BrowseState;

pub fn run(state: &mut BrowseState, text: String) -> CmdResult {
    state.set_query(text);
    let mut result = CmdResult::default();

    if state.query().trim().is_empty() {
        return result;
    }
    if state.total_count() == 0 {
        result.add_message(CmdMessage::info(format!(
            "No names match \"{}\"",
            state.query().trim()
        )));
    }
    result
}
