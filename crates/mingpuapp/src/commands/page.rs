use crate::commands::{CmdMessage, CmdResult};
use crate::state::BrowseState;

/// Show one more page. Past the end this changes nothing and says so.
pub fn advance(state: &mut BrowseState) -> CmdResult {
    let mut result = CmdResult::default();
    if !state.advance_page() {
        result.add_message(CmdMessage::info("No more names to show"));
    }
    result
}
