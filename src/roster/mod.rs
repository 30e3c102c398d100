mod file;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::Student;

pub use file::DEFAULT_DATA_FILE;

/// Errors from reading or writing the roster file.
///
/// A missing file on load is not an error; see [`LoadOutcome::Missing`].
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed roster data in {}: {source}", path.display())]
    MalformedData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode roster: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result of [`Roster::load`] when nothing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed; this many students were appended.
    Loaded(usize),
    /// No file at the path. The roster is left as it was.
    Missing,
}

/// All students tracked in a session, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_student(&mut self, student: Student) {
        tracing::debug!(student_id = %student.id, "Adding student");
        self.students.push(student);
    }

    /// First student whose id equals `id`.
    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn find_student_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for student in &self.students {
            writeln!(f, "{}", student)?;
        }
        Ok(())
    }
}
