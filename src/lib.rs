//! Student and course roster persisted to a flat JSON file.
//!
//! [`Roster`] holds the students in memory and reads/writes the whole file at
//! once. [`menu::Menu`] is the interactive driver used by the `roster` binary.

pub mod menu;
pub mod models;
pub mod roster;

pub use models::{Course, Student};
pub use roster::{LoadOutcome, Roster, RosterError, DEFAULT_DATA_FILE};
