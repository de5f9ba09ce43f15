use crate::commands::{CmdMessage, CmdResult, StudentPatch};
use crate::error::{RosterError, Result};
use crate::roster::Roster;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    roster: &mut Roster<S>,
    roll: &str,
    patch: &StudentPatch,
) -> Result<CmdResult> {
    let current = roster
        .view_by_roll(roll)
        .ok_or_else(|| RosterError::StudentNotFound(roll.to_string()))?;

    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Nothing to update for {}",
            roll
        )));
        return Ok(result.with_listed(vec![current]));
    }

    let updated = patch.apply(current);
    roster.update(roll, updated.clone())?;

    result.add_message(CmdMessage::success(format!(
        "Student updated ({}): {}",
        updated.roll, updated.name
    )));
    Ok(result.with_affected(vec![updated]))
}
