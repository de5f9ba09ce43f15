use crate::commands::{listing, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::DataStore;

pub fn run<S: DataStore>(roster: &Roster<S>) -> Result<CmdResult> {
    Ok(listing(roster.view_all()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_collection_order() {
        let roster = Roster::open(StoreFixture::new().with_students(3).store);
        let result = run(&roster).unwrap();

        let rolls: Vec<_> = result.listed.iter().map(|s| s.roll.as_str()).collect();
        assert_eq!(rolls, vec!["R1", "R2", "R3"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_roster_gets_a_hint() {
        let roster = Roster::open(InMemoryStore::new());
        let result = run(&roster).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages[0].content, "No students found.");
    }
}
