use crate::codec::{join_fields, split_fields};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// A single student record. `roll` is the key used for every lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub roll: String,
    pub department: String,
    pub gpa: f64,
    pub contact: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        roll: impl Into<String>,
        department: impl Into<String>,
        gpa: f64,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            roll: roll.into(),
            department: department.into(),
            gpa,
            contact: contact.into(),
        }
    }

    /// Encodes the record as one line: `name,roll,department,gpa,contact`.
    pub fn encode(&self) -> String {
        let gpa = self.gpa.to_string();
        join_fields([
            self.name.as_str(),
            self.roll.as_str(),
            self.department.as_str(),
            gpa.as_str(),
            self.contact.as_str(),
        ])
    }

    /// Decodes a line produced by [`Student::encode`].
    ///
    /// Missing trailing fields keep their defaults and extra fields are
    /// ignored. A GPA that is empty or not a finite number reads as `0.0`.
    pub fn decode(line: &str) -> Self {
        let mut student = Student::default();
        let mut fields = split_fields(line).into_iter();

        if let Some(name) = fields.next() {
            student.name = name;
        }
        if let Some(roll) = fields.next() {
            student.roll = roll;
        }
        if let Some(department) = fields.next() {
            student.department = department;
        }
        if let Some(gpa) = fields.next() {
            student.gpa = parse_gpa(&gpa, &student.roll);
        }
        if let Some(contact) = fields.next() {
            student.contact = contact;
        }

        student
    }
}

fn parse_gpa(raw: &str, roll: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(gpa) if gpa.is_finite() => gpa,
        _ => {
            tracing::warn!(roll, value = raw, "unreadable GPA, using 0.0");
            0.0
        }
    }
}
