use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MingpuError, Result};
use crate::handoff::{publish_comparison, HandoffKey, HandoffStore};
use crate::model::CatalogEntry;
use crate::selection::MAX_SELECTION;
use crate::state::BrowseState;

pub fn select(state: &mut BrowseState, id: u32) -> Result<CmdResult> {
    let name = state
        .catalog()
        .get(id)
        .map(|e| e.name.clone())
        .ok_or(MingpuError::EntryNotFound(id))?;
    let mut result = CmdResult::default();

    match state.selection_mut().add(id) {
        Ok(()) => result.add_message(CmdMessage::success(format!(
            "Selected {} ({}/{})",
            name,
            state.selection().len(),
            MAX_SELECTION
        ))),
        Err(err) => result.add_message(CmdMessage::warning(err.to_string())),
    }
    Ok(result)
}

pub fn deselect(state: &mut BrowseState, id: u32) -> CmdResult {
    let mut result = CmdResult::default();
    if state.selection_mut().remove(id) {
        result.add_message(CmdMessage::info(format!("Deselected {}", id)));
    } else {
        result.add_message(CmdMessage::warning(format!("{} is not selected", id)));
    }
    result
}

/// Write the comparison hand-off record for the current selection.
pub fn start<H: HandoffStore + ?Sized>(state: &BrowseState, handoff: &H) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let ids = match state.selection().start_comparison() {
        Ok(ids) => ids,
        Err(err) => {
            result.add_message(CmdMessage::warning(err.to_string()));
            return Ok(result);
        }
    };

    publish_comparison(handoff, &ids)?;
    let entries: Vec<CatalogEntry> = ids
        .iter()
        .filter_map(|id| state.catalog().get(*id).cloned())
        .collect();

    result.handoff = Some(HandoffKey::CompareList);
    result.add_message(CmdMessage::success(format!(
        "Comparing {} names",
        entries.len()
    )));
    Ok(result.with_entries(entries))
}
