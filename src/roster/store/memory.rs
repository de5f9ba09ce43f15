use super::DataStore;
use crate::error::{RosterError, Result};
use crate::model::Student;
use std::io;

/// Keeps the last saved list in memory instead of on disk. `load` returns
/// that list and `persisted()` exposes it to tests.
#[derive(Default)]
pub struct InMemoryStore {
    students: Vec<Student>,
    saves: usize,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students,
            ..Self::default()
        }
    }

    /// Make every subsequent `save` fail with an I/O error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// What a reload would see.
    pub fn persisted(&self) -> &[Student] {
        &self.students
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Student>> {
        Ok(self.students.clone())
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        if self.fail_writes {
            return Err(RosterError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "writes disabled",
            )));
        }
        self.students = students.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.students.push(Student::new(
                    format!("Student {}", i + 1),
                    format!("R{}", i + 1),
                    "CS",
                    2.0 + (i as f64) * 0.5,
                    format!("555-01{:02}", i + 1),
                ));
            }
            self
        }

        pub fn with_student(mut self, name: &str, roll: &str, department: &str, gpa: f64) -> Self {
            self.store
                .students
                .push(Student::new(name, roll, department, gpa, "555"));
            self
        }

        pub fn failing_writes(mut self) -> Self {
            self.store.fail_writes = true;
            self
        }
    }
}
