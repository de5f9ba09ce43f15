//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every roster operation, whatever the front end.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Owns** the [`Roster`] and the scope paths
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints, never exits, and holds no business rules. Those live in
//! `commands/*.rs` and in [`Roster`].
//!
//! `RosterApi<S: DataStore>` is generic over the backend: `FileStore` in
//! production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{Scope, SortOrder, Student};
use crate::roster::Roster;
use crate::store::DataStore;

pub struct RosterApi<S: DataStore> {
    roster: Roster<S>,
    paths: commands::RosterPaths,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(roster: Roster<S>, paths: commands::RosterPaths) -> Self {
        Self { roster, paths }
    }

    pub fn add_student(&mut self, student: Student) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.roster, student)
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.roster)
    }

    pub fn view_student(&self, roll: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.roster, roll)
    }

    pub fn update_student(
        &mut self,
        roll: &str,
        patch: &commands::StudentPatch,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.roster, roll, patch)
    }

    pub fn delete_students(&mut self, rolls: &[String]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.roster, rolls)
    }

    pub fn search_students(&self, field: SearchField, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.roster, field, term)
    }

    pub fn sort_students(&mut self, key: SortKey, order: SortOrder) -> Result<commands::CmdResult> {
        commands::sort::run(&mut self.roster, key, order)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn roster(&self) -> &Roster<S> {
        &self.roster
    }

    pub fn paths(&self) -> &commands::RosterPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::search::SearchField;
pub use commands::sort::SortKey;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RosterPaths, StudentPatch};
