use super::DataStore;
use crate::error::{RosterError, Result};
use crate::model::Student;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(RosterError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("students");
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Student>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(RosterError::Io(e)),
        };

        let students: Vec<Student> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Student::decode)
            .collect();

        tracing::debug!(path = %self.path.display(), count = students.len(), "loaded records");
        Ok(students)
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        self.ensure_parent()?;

        let mut content = String::new();
        for student in students {
            content.push_str(&student.encode());
            content.push('\n');
        }

        // Atomic write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(RosterError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(RosterError::Io(e));
        }

        tracing::debug!(path = %self.path.display(), count = students.len(), "saved records");
        Ok(())
    }
}
