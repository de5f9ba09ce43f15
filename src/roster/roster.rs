//! # Roster
//!
//! [`Roster`] is the single owner of the student records. It keeps the full
//! ordered collection in memory, and writes the whole collection back through
//! its [`DataStore`] after every successful mutation. Reads never touch the
//! backend.
//!
//! Order is insertion order until a sort runs; after that the sorted order is
//! what gets persisted and reloaded.
//!
//! If a save fails, the in-memory change is kept and the I/O error is
//! returned, so the caller can report it and carry on.

use crate::error::{RosterError, Result};
use crate::model::{SortOrder, Student};
use crate::store::DataStore;
use std::cmp::Ordering;

pub struct Roster<S: DataStore> {
    store: S,
    students: Vec<Student>,
    max_gpa: Option<f64>,
}

impl<S: DataStore> Roster<S> {
    /// Build a roster and load whatever the store holds.
    ///
    /// A store that cannot be read yields an empty roster; the failure is
    /// logged, not returned.
    pub fn open(store: S) -> Self {
        let mut roster = Self {
            store,
            students: Vec::new(),
            max_gpa: None,
        };
        if let Err(e) = roster.load() {
            tracing::warn!(error = %e, "could not load records, starting empty");
        }
        roster
    }

    /// Reject GPAs outside `0.0..=max` on add and update. `None` accepts any
    /// value.
    pub fn with_max_gpa(mut self, max_gpa: Option<f64>) -> Self {
        self.max_gpa = max_gpa;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn load(&mut self) -> Result<()> {
        self.students.clear();
        self.students = self.store.load()?;
        Ok(())
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.students)
    }

    pub fn roll_exists(&self, roll: &str) -> bool {
        self.position(roll).is_some()
    }

    pub fn add(&mut self, student: Student) -> Result<()> {
        if self.roll_exists(&student.roll) {
            return Err(RosterError::DuplicateRoll(student.roll));
        }
        self.check_gpa(student.gpa)?;

        tracing::info!(roll = %student.roll, "adding student");
        self.students.push(student);
        self.save()
    }

    pub fn view_all(&self) -> Vec<Student> {
        self.students.clone()
    }

    pub fn view_by_roll(&self, roll: &str) -> Option<Student> {
        self.students.iter().find(|s| s.roll == roll).cloned()
    }

    /// Replace the record holding `roll` with `student`, roll included.
    ///
    /// Changing the roll to one held by another record is rejected.
    pub fn update(&mut self, roll: &str, student: Student) -> Result<()> {
        let idx = self
            .position(roll)
            .ok_or_else(|| RosterError::StudentNotFound(roll.to_string()))?;

        if student.roll != roll && self.roll_exists(&student.roll) {
            return Err(RosterError::DuplicateRoll(student.roll));
        }
        self.check_gpa(student.gpa)?;

        tracing::info!(roll, new_roll = %student.roll, "updating student");
        self.students[idx] = student;
        self.save()
    }

    pub fn delete(&mut self, roll: &str) -> Result<Student> {
        let idx = self
            .position(roll)
            .ok_or_else(|| RosterError::StudentNotFound(roll.to_string()))?;

        tracing::info!(roll, "deleting student");
        let removed = self.students.remove(idx);
        self.save()?;
        Ok(removed)
    }

    pub fn search_by_name(&self, part: &str) -> Vec<Student> {
        self.filtered(|s| s.name.contains(part))
    }

    pub fn search_by_department(&self, part: &str) -> Vec<Student> {
        self.filtered(|s| s.department.contains(part))
    }

    /// Stable sort on GPA; equal GPAs keep their current relative order.
    pub fn sort_by_gpa(&mut self, order: SortOrder) -> Result<()> {
        self.sort_with(order, |a, b| a.gpa.total_cmp(&b.gpa))
    }

    /// Stable lexicographic sort on roll.
    pub fn sort_by_roll(&mut self, order: SortOrder) -> Result<()> {
        self.sort_with(order, |a, b| a.roll.cmp(&b.roll))
    }

    fn sort_with<F>(&mut self, order: SortOrder, cmp: F) -> Result<()>
    where
        F: Fn(&Student, &Student) -> Ordering,
    {
        match order {
            SortOrder::Ascending => self.students.sort_by(|a, b| cmp(a, b)),
            SortOrder::Descending => self.students.sort_by(|a, b| cmp(b, a)),
        }
        tracing::debug!(?order, "sorted records");
        self.save()
    }

    fn position(&self, roll: &str) -> Option<usize> {
        self.students.iter().position(|s| s.roll == roll)
    }

    fn filtered<P>(&self, predicate: P) -> Vec<Student>
    where
        P: Fn(&Student) -> bool,
    {
        self.students
            .iter()
            .filter(|s| predicate(s))
            .cloned()
            .collect()
    }

    fn check_gpa(&self, gpa: f64) -> Result<()> {
        if !gpa.is_finite() {
            return Err(RosterError::InvalidGpa(gpa));
        }
        match self.max_gpa {
            Some(max) if !(0.0..=max).contains(&gpa) => Err(RosterError::InvalidGpa(gpa)),
            _ => Ok(()),
        }
    }
}
