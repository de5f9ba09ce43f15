use crate::config::RosterConfig;
use crate::error::{RosterError, Result};
use crate::model::{Scope, Student};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod list;
pub mod search;
pub mod sort;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct RosterPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl RosterPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| RosterError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Student>,
    pub listed: Vec<Student>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, students: Vec<Student>) -> Self {
        self.affected = students;
        self
    }

    pub fn with_listed(mut self, students: Vec<Student>) -> Self {
        self.listed = students;
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field changes for `update`. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub roll: Option<String>,
    pub department: Option<String>,
    pub gpa: Option<f64>,
    pub contact: Option<String>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.roll.is_none()
            && self.department.is_none()
            && self.gpa.is_none()
            && self.contact.is_none()
    }

    pub fn apply(&self, mut student: Student) -> Student {
        if let Some(name) = &self.name {
            student.name = name.clone();
        }
        if let Some(roll) = &self.roll {
            student.roll = roll.clone();
        }
        if let Some(department) = &self.department {
            student.department = department.clone();
        }
        if let Some(gpa) = self.gpa {
            student.gpa = gpa;
        }
        if let Some(contact) = &self.contact {
            student.contact = contact.clone();
        }
        student
    }
}

/// Query results get a hint when nothing matched.
pub(crate) fn listing(students: Vec<Student>) -> CmdResult {
    let mut result = CmdResult::default();
    if students.is_empty() {
        result.add_message(CmdMessage::info("No students found."));
    }
    result.with_listed(students)
}
