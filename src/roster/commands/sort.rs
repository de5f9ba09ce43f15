use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SortOrder;
use crate::roster::Roster;
use crate::store::DataStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Gpa,
    Roll,
}

pub fn run<S: DataStore>(roster: &mut Roster<S>, key: SortKey, order: SortOrder) -> Result<CmdResult> {
    let label = match key {
        SortKey::Gpa => {
            roster.sort_by_gpa(order)?;
            "GPA"
        }
        SortKey::Roll => {
            roster.sort_by_roll(order)?;
            "roll"
        }
    };

    let direction = match order {
        SortOrder::Ascending => "ascending",
        SortOrder::Descending => "descending",
    };

    let mut result = CmdResult::default().with_listed(roster.view_all());
    result.add_message(CmdMessage::success(format!(
        "Sorted by {} ({}).",
        label, direction
    )));
    Ok(result)
}
