//! JSON persistence for [`Roster`].
//!
//! The file is a single JSON array of student objects. It is always read and
//! written whole.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::{LoadOutcome, Roster, RosterError};
use crate::models::Student;

/// File used when no path is configured, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "student_data.json";

impl Roster {
    /// Write every student to `path`, replacing whatever was there.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RosterError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.students).map_err(RosterError::Encode)?;

        fs::write(path, json).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), students = self.students.len(), "Saved roster");
        Ok(())
    }

    /// Append the students stored at `path`, in file order.
    ///
    /// The whole file is parsed before anything is appended, so a malformed
    /// file leaves the roster unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, RosterError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No previous data found");
                return Ok(LoadOutcome::Missing);
            }
            Err(source) => {
                return Err(RosterError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let students: Vec<Student> =
            serde_json::from_str(&content).map_err(|source| RosterError::MalformedData {
                path: path.to_path_buf(),
                source,
            })?;

        let count = students.len();
        for student in students {
            self.add_student(student);
        }

        tracing::info!(path = %path.display(), students = count, "Loaded roster");
        Ok(LoadOutcome::Loaded(count))
    }
}
