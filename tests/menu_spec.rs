use std::fs;
use std::path::Path;

use course_roster::menu::Menu;
use course_roster::{Course, Roster, Student};
use speculate2::speculate;

/// Drive a menu session with scripted input lines. Returns the roster and everything printed.
fn run_session(roster: Roster, path: &Path, lines: &[&str]) -> (Roster, String) {
    let input = lines.iter().map(|l| format!("{}\n", l)).collect::<String>();
    let mut output = Vec::new();

    let mut menu = Menu::new(roster, path, input.as_bytes(), &mut output);
    menu.run().expect("Menu session failed");
    let roster = menu.into_roster();

    (roster, String::from_utf8(output).expect("Output was not UTF-8"))
}

fn roster_with_alice() -> Roster {
    let mut roster = Roster::new();
    let mut alice = Student::new("S1", "Alice", 20);
    alice.add_course(Course::new("Math", "C1", "Dr. X"));
    roster.add_student(alice);
    roster
}

speculate! {
    before {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("student_data.json");
    }

    describe "menu loop" {
        it "prints the numbered menu and prompt" {
            let (_, out) = run_session(Roster::new(), &path, &["6"]);

            assert!(out.starts_with("\nCourse Management System Menu:\n1. Add New Student\n"));
            assert!(out.contains("6. Save & Exit\nEnter your choice: "));
        }

        it "rejects an unknown choice and shows the menu again" {
            let (_, out) = run_session(Roster::new(), &path, &["9", "6"]);

            assert!(out.contains("Invalid choice! Please try again."));
            assert_eq!(out.matches("Course Management System Menu:").count(), 2);
        }

        it "stops without saving when input ends" {
            let (roster, _) = run_session(Roster::new(), &path, &["1", "S1", "Alice", "20"]);

            assert_eq!(roster.len(), 1);
            assert!(!path.exists());
        }

        it "stops without saving when input ends mid-operation" {
            let (roster, _) = run_session(Roster::new(), &path, &["1", "S1"]);

            assert!(roster.is_empty());
            assert!(!path.exists());
        }
    }

    describe "add student" {
        it "adds the student and confirms" {
            let (roster, out) = run_session(Roster::new(), &path, &["1", "S1", "Alice", "20", "6"]);

            assert!(out.contains("Student Alice added."));
            let alice = roster.find_student("S1").unwrap();
            assert_eq!(alice.name, "Alice");
            assert_eq!(alice.age, 20);
            assert!(alice.courses.is_empty());
        }

        it "asks again for an age that is not a number" {
            let (roster, out) =
                run_session(Roster::new(), &path, &["1", "S1", "Alice", "twenty", " 21 ", "6"]);

            assert!(out.contains("Invalid age! Please enter a whole number."));
            assert_eq!(roster.find_student("S1").unwrap().age, 21);
        }
    }

    describe "add course" {
        it "appends the course to the student" {
            let (roster, out) = run_session(
                roster_with_alice(),
                &path,
                &["2", "S1", "Art", "C2", "Dr. Y", "6"],
            );

            assert!(out.contains("Course Art added to student Alice."));
            let alice = roster.find_student("S1").unwrap();
            assert_eq!(alice.courses.len(), 2);
            assert_eq!(alice.courses[1], Course::new("Art", "C2", "Dr. Y"));
        }

        it "reports an unknown student and does not ask for course details" {
            let (roster, out) = run_session(roster_with_alice(), &path, &["2", "S9", "6"]);

            assert!(out.contains("Student not found."));
            assert!(!out.contains("Enter course name: "));
            assert_eq!(roster, roster_with_alice());
        }
    }

    describe "remove course" {
        it "removes the course by code" {
            let (roster, out) = run_session(roster_with_alice(), &path, &["3", "S1", "C1", "6"]);

            assert!(out.contains("Course C1 removed from student Alice."));
            assert!(roster.find_student("S1").unwrap().courses.is_empty());
        }

        it "reports an unknown student" {
            let (roster, out) = run_session(roster_with_alice(), &path, &["3", "S9", "6"]);

            assert!(out.contains("Student not found."));
            assert_eq!(roster, roster_with_alice());
        }
    }

    describe "update instructor" {
        it "replaces the instructor" {
            let (roster, out) =
                run_session(roster_with_alice(), &path, &["4", "S1", "C1", "Dr. Y", "6"]);

            assert!(out.contains("Instructor for course C1 updated to Dr. Y."));
            assert_eq!(roster.find_student("S1").unwrap().courses[0].instructor, "Dr. Y");
        }

        it "leaves courses alone for an unknown code" {
            let (roster, _) =
                run_session(roster_with_alice(), &path, &["4", "S1", "C7", "Dr. Y", "6"]);

            assert_eq!(roster, roster_with_alice());
        }
    }

    describe "view students" {
        it "prints each student with their courses" {
            let (_, out) = run_session(roster_with_alice(), &path, &["5", "6"]);

            assert!(out.contains(
                "Student ID: S1, Name: Alice, Age: 20\nCourses:\nMath (C1), Instructor: Dr. X\n"
            ));
        }
    }

    describe "save and exit" {
        it "writes the roster and stops reading input" {
            let (_, out) = run_session(roster_with_alice(), &path, &["6", "1", "S2"]);

            assert!(out.ends_with("Data saved. Exiting...\n"));

            let mut reloaded = Roster::new();
            reloaded.load(&path).expect("Failed to load");
            assert_eq!(reloaded, roster_with_alice());
        }

        it "persists changes made during the session" {
            run_session(Roster::new(), &path, &["1", "S1", "Alice", "20", "2", "S1", "Math", "C1", "Dr. X", "6"]);

            let content = fs::read_to_string(&path).unwrap();
            let mut reloaded = Roster::new();
            reloaded.load(&path).expect("Failed to load");

            assert!(content.contains("\"course_code\": \"C1\""));
            assert_eq!(reloaded, roster_with_alice());
        }
    }
}
