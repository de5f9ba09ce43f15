use crate::commands::CmdResult;
use crate::error::{RosterError, Result};
use crate::roster::Roster;
use crate::store::DataStore;

pub fn run<S: DataStore>(roster: &Roster<S>, roll: &str) -> Result<CmdResult> {
    let student = roster
        .view_by_roll(roll)
        .ok_or_else(|| RosterError::StudentNotFound(roll.to_string()))?;
    Ok(CmdResult::default().with_listed(vec![student]))
}
