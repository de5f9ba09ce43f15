use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::DataStore;

pub fn run<S: DataStore>(roster: &mut Roster<S>, rolls: &[String]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for roll in rolls {
        let removed = roster.delete(roll)?;
        result.add_message(CmdMessage::success(format!(
            "Student deleted ({}): {}",
            removed.roll, removed.name
        )));
        result.affected.push(removed);
    }

    Ok(result)
}
