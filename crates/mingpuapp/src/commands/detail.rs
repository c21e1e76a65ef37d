use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MingpuError, Result};
use crate::handoff::{publish_detail, HandoffKey, HandoffStore};
use crate::state::BrowseState;

/// Look up one entry and write it as the detail hand-off record.
pub fn run<H: HandoffStore + ?Sized>(
    state: &BrowseState,
    handoff: &H,
    id: u32,
) -> Result<CmdResult> {
    let entry = state
        .catalog()
        .get(id)
        .cloned()
        .ok_or(MingpuError::EntryNotFound(id))?;

    publish_detail(handoff, &entry)?;

    let mut result = CmdResult::default();
    result.handoff = Some(HandoffKey::SelectedName);
    if entry.has_risk() {
        result.add_message(CmdMessage::warning(format!(
            "{} has {} noted risk(s)",
            entry.name,
            entry.risks.len()
        )));
    }
    Ok(result.with_entries(vec![entry]))
}
