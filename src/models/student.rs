use std::fmt;

use serde::{Deserialize, Serialize};

use super::Course;

/// A student and the courses they are enrolled in.
///
/// Courses keep insertion order. Duplicate codes are allowed, which is why
/// [`Student::remove_course`] and [`Student::update_course`] differ in how many
/// entries they touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "student_id")]
    pub id: String,
    pub name: String,
    pub age: i64,
    pub courses: Vec<Course>,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            courses: Vec::new(),
        }
    }

    /// Append a course to the end of the list.
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Remove every course with the given code. Returns how many were removed.
    pub fn remove_course(&mut self, code: &str) -> usize {
        let before = self.courses.len();
        self.courses.retain(|c| c.code != code);
        before - self.courses.len()
    }

    /// Set the instructor of the first course with the given code.
    ///
    /// Returns `false` if no course matched.
    pub fn update_course(&mut self, code: &str, new_instructor: impl Into<String>) -> bool {
        match self.courses.iter_mut().find(|c| c.code == code) {
            Some(course) => {
                course.instructor = new_instructor.into();
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Student ID: {}, Name: {}, Age: {}",
            self.id, self.name, self.age
        )?;
        writeln!(f, "Courses:")?;
        // Course lines are newline-separated, not newline-terminated.
        for (i, course) in self.courses.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", course)?;
        }
        Ok(())
    }
}
