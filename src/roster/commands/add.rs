use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Student;
use crate::roster::Roster;
use crate::store::DataStore;

pub fn run<S: DataStore>(roster: &mut Roster<S>, student: Student) -> Result<CmdResult> {
    roster.add(student.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added ({}): {}",
        student.roll, student.name
    )));
    Ok(result.with_affected(vec![student]))
}
