//! Interactive numbered menu over a [`Roster`].
//!
//! The driver is generic over its input and output so the same loop runs
//! against stdin/stdout in the binary and against in-memory buffers in tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::{Course, Student};
use crate::roster::Roster;

const MENU: &str = "\nCourse Management System Menu:
1. Add New Student
2. Add Course for a Student
3. Remove Course
4. Update Course Instructor
5. View Students
6. Save & Exit
";

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    AddCourse,
    RemoveCourse,
    UpdateInstructor,
    ViewStudents,
    SaveAndExit,
}

impl MenuChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::AddStudent),
            "2" => Some(Self::AddCourse),
            "3" => Some(Self::RemoveCourse),
            "4" => Some(Self::UpdateInstructor),
            "5" => Some(Self::ViewStudents),
            "6" => Some(Self::SaveAndExit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Line-oriented prompt/response channel.
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Print `message` and read one line. `None` means end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    fn say(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

/// Reads a value or leaves the calling operation when input runs out.
macro_rules! ask {
    ($console:expr, $message:expr) => {
        match $console.prompt($message)? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

/// The session driver. Owns the roster for the lifetime of the menu loop.
pub struct Menu<R, W> {
    roster: Roster,
    data_path: PathBuf,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(roster: Roster, data_path: impl Into<PathBuf>, input: R, output: W) -> Self {
        Self {
            roster,
            data_path: data_path.into(),
            console: Console { input, output },
        }
    }

    /// Run until the user saves and exits or input ends.
    ///
    /// Ending input without choosing "Save & Exit" does not write the file.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.console.output, "{}", MENU)?;
            let Some(line) = self.console.prompt("Enter your choice: ")? else {
                tracing::warn!("Input closed before save; changes were not written");
                return Ok(());
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::AddStudent) => self.add_student()?,
                Some(MenuChoice::AddCourse) => self.add_course()?,
                Some(MenuChoice::RemoveCourse) => self.remove_course()?,
                Some(MenuChoice::UpdateInstructor) => self.update_instructor()?,
                Some(MenuChoice::ViewStudents) => {
                    write!(self.console.output, "{}", self.roster)?;
                    Flow::Continue
                }
                Some(MenuChoice::SaveAndExit) => {
                    self.roster.save(&self.data_path)?;
                    self.console.say("Data saved. Exiting...")?;
                    return Ok(());
                }
                None => {
                    tracing::debug!(choice = %line, "Rejected menu choice");
                    self.console.say("Invalid choice! Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                tracing::warn!("Input closed before save; changes were not written");
                return Ok(());
            }
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    fn add_student(&mut self) -> Result<Flow> {
        let id = ask!(self.console, "Enter student ID: ");
        let name = ask!(self.console, "Enter student name: ");
        let age = loop {
            let raw = ask!(self.console, "Enter student age: ");
            match raw.trim().parse::<i64>() {
                Ok(age) => break age,
                Err(_) => self
                    .console
                    .say("Invalid age! Please enter a whole number.")?,
            }
        };

        self.roster.add_student(Student::new(id, name.as_str(), age));
        self.console.say(format!("Student {} added.", name))?;
        Ok(Flow::Continue)
    }

    fn add_course(&mut self) -> Result<Flow> {
        let id = ask!(self.console, "Enter student ID: ");
        if self.roster.find_student(&id).is_none() {
            return self.student_not_found(&id);
        }

        let name = ask!(self.console, "Enter course name: ");
        let code = ask!(self.console, "Enter course code: ");
        let instructor = ask!(self.console, "Enter course instructor: ");

        if let Some(student) = self.roster.find_student_mut(&id) {
            student.add_course(Course::new(name.as_str(), code, instructor));
            let message = format!("Course {} added to student {}.", name, student.name);
            self.console.say(message)?;
        }
        Ok(Flow::Continue)
    }

    fn remove_course(&mut self) -> Result<Flow> {
        let id = ask!(self.console, "Enter student ID: ");
        if self.roster.find_student(&id).is_none() {
            return self.student_not_found(&id);
        }

        let code = ask!(self.console, "Enter course code to remove: ");

        if let Some(student) = self.roster.find_student_mut(&id) {
            let removed = student.remove_course(&code);
            tracing::debug!(student_id = %id, code = %code, removed, "Removed courses");
            let message = format!("Course {} removed from student {}.", code, student.name);
            self.console.say(message)?;
        }
        Ok(Flow::Continue)
    }

    fn update_instructor(&mut self) -> Result<Flow> {
        let id = ask!(self.console, "Enter student ID: ");
        if self.roster.find_student(&id).is_none() {
            return self.student_not_found(&id);
        }

        let code = ask!(self.console, "Enter course code to update: ");
        let instructor = ask!(self.console, "Enter new instructor name: ");

        if let Some(student) = self.roster.find_student_mut(&id) {
            let updated = student.update_course(&code, instructor.as_str());
            tracing::debug!(student_id = %id, code = %code, updated, "Updated instructor");
            self.console.say(format!(
                "Instructor for course {} updated to {}.",
                code, instructor
            ))?;
        }
        Ok(Flow::Continue)
    }

    fn student_not_found(&mut self, id: &str) -> Result<Flow> {
        tracing::warn!(student_id = %id, "Student not found");
        self.console.say("Student not found.")?;
        Ok(Flow::Continue)
    }
}
