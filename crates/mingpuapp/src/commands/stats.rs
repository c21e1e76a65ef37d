use crate::commands::CmdResult;
use crate::error::Result;
use crate::state::BrowseState;
use crate::stats::summarize;

/// Statistics cover the whole catalog, whatever the current filters.
pub fn run(state: &BrowseState) -> Result<CmdResult> {
    let stats = summarize(state.catalog())?;
    Ok(CmdResult {
        stats: Some(stats),
        ..Default::default()
    })
}
