use crate::commands::{listing, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::DataStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Department,
}

pub fn run<S: DataStore>(roster: &Roster<S>, field: SearchField, term: &str) -> Result<CmdResult> {
    let hits = match field {
        SearchField::Name => roster.search_by_name(term),
        SearchField::Department => roster.search_by_department(term),
    };
    Ok(listing(hits))
}
