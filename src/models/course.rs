use std::fmt;

use serde::{Deserialize, Serialize};

/// A course a student is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "course_name")]
    pub name: String,
    /// Identifier for the course within a student's list.
    #[serde(rename = "course_code")]
    pub code: String,
    pub instructor: String,
}

impl Course {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            instructor: instructor.into(),
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), Instructor: {}",
            self.name, self.code, self.instructor
        )
    }
}
