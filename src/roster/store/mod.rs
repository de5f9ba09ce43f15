//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the in-memory [`Roster`] and
//! wherever the records actually live. A backend only knows how to read and
//! write the *whole* ordered list; lookups, uniqueness and sorting happen in
//! the roster.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one encoded record per line in a
//!   plain text file. Writes go to a temp file that is renamed over the target.
//! - [`memory::InMemoryStore`]: Storage for tests. Counts saves and can be
//!   told to fail writes.
//!
//! ## Storage Format
//!
//! ```text
//! .roster/
//! ├── students.txt    # name,roll,department,gpa,contact per line
//! └── config.json     # Scope configuration
//! ```
//!
//! [`Roster`]: crate::roster::Roster

use crate::error::Result;
use crate::model::Student;

pub mod fs;
pub mod memory;

/// Abstract interface for record persistence.
pub trait DataStore {
    /// Read every persisted record, in stored order.
    fn load(&self) -> Result<Vec<Student>>;

    /// Replace the persisted records with `students`, keeping their order.
    fn save(&mut self, students: &[Student]) -> Result<()>;
}
