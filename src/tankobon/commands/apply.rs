use super::{diagnostic_messages, CmdMessage, CmdResult, Plan};
use crate::error::Result;
use crate::store::DirStore;
use crate::transform::MoveStatus;

/// Rename the directories of the plan, or only list the renames with `dry_run`.
pub fn run<S: DirStore>(store: &mut S, plan: &Plan, dry_run: bool) -> Result<CmdResult> {
    let moves = plan.transform.execute(plan.base(), dry_run, store)?;
    let changed = moves
        .iter()
        .filter(|m| m.status != MoveStatus::Unchanged)
        .count();

    let mut result = CmdResult::default();
    for message in diagnostic_messages(&plan.series) {
        result.add_message(message);
    }
    if changed == 0 {
        result.add_message(CmdMessage::info("Nothing to rename."));
    } else if dry_run {
        result.add_message(CmdMessage::info(format!(
            "{} folder(s) would be renamed.",
            changed
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Renamed {} folder(s).",
            changed
        )));
    }
    Ok(result.with_moves(moves))
}
