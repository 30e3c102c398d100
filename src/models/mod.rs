//! Domain models for the course roster.
//!
//! - [`Student`]: a person enrolled in zero or more courses, keyed by an
//!   externally supplied identifier that is assumed but never checked to be unique.
//! - [`Course`]: a course entry owned by exactly one student. Codes are not
//!   unique within a student's list.

mod course;
mod student;

pub use course::*;
pub use student::*;
