use std::io::Cursor;

use roster::menu::Menu;
use roster::models::*;
use roster::repository::Repository;
use speculate2::speculate;

/// Run the menu over a scripted input and return everything it printed.
fn run_script(repo: &mut Repository, script: &str) -> String {
    let mut output = Vec::new();
    Menu::new(repo, Cursor::new(script.as_bytes()), &mut output)
        .run()
        .expect("Menu failed");
    String::from_utf8(output).expect("Output was not UTF-8")
}

fn seed(repo: &mut Repository) {
    repo.add(Student::with_grades(Person::new("John", "Smith"), vec![80.0, 90.0]))
        .expect("Add failed");
    repo.add(Worker::new(Person::new("Anna", "Smithson"), 100.0, 4))
        .expect("Add failed");
}

speculate! {
    before {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("users.json");
        let mut repo = Repository::load(&path).expect("Load failed");
    }

    describe "add user" {
        it "adds a student with grades until a blank line" {
            let output = run_script(&mut repo, "1\n1\nJohn\nSmith\n80\nabc\n90\n\n3\n");

            assert!(output.contains("Invalid grade."));
            assert!(output.contains("Student added successfully!"));
            assert_eq!(
                repo.records(),
                &[Record::Student(Student::with_grades(
                    Person::new("John", "Smith"),
                    vec![80.0, 90.0],
                ))]
            );
            assert_eq!(Repository::load(&path).expect("Reload failed").len(), 1);
        }

        it "adds a worker after re-prompting bad numbers" {
            let output = run_script(&mut repo, "1\n2\nAnna\nSmithson\nlots\n100\nfour\n4\n3\n");

            assert_eq!(output.matches("Invalid number. Try again.").count(), 2);
            assert!(output.contains("Worker added successfully!"));
            assert_eq!(
                repo.records(),
                &[Record::Worker(Worker::new(Person::new("Anna", "Smithson"), 100.0, 4))]
            );
        }

        it "re-prompts blank names and trims them" {
            let output = run_script(&mut repo, "1\n1\n   \n  John \n\nSmith\n\n3\n");

            assert!(output.contains("First name cannot be empty."));
            assert!(output.contains("Last name cannot be empty."));
            assert_eq!(repo.records()[0].person(), &Person::new("John", "Smith"));
        }

        it "rejects unknown user types and allows cancelling" {
            let output = run_script(&mut repo, "1\n9\n3\n3\n");

            assert!(output.contains("Invalid selection. Please press 1, 2, or 3."));
            assert!(output.contains("Cancelled adding user."));
            assert!(repo.is_empty());
        }
    }

    describe "view user" {
        it "lists matches and shows the student GPA" {
            seed(&mut repo);
            let output = run_script(&mut repo, "2\nsmith\n1\n3\n");

            assert!(output.contains("1. John Smith\n2. Anna Smithson\n"));
            assert!(output.contains("Name: John Smith\nGPA: 85.00\n"));
        }

        it "shows the worker hourly wage" {
            seed(&mut repo);
            let output = run_script(&mut repo, "2\nANNA\n1\n3\n");

            assert!(output.contains("Name: Anna Smithson\nHourly Wage: $25.00\n"));
        }

        it "reports when nothing matches" {
            seed(&mut repo);
            let output = run_script(&mut repo, "2\nzzz\n3\n");

            assert!(output.contains("No users found."));
        }

        it "rejects an out of range selection" {
            seed(&mut repo);
            let output = run_script(&mut repo, "2\nsmith\n5\n3\n");

            assert!(output.contains("Invalid choice."));
            assert!(!output.contains("GPA:"));
        }
    }

    describe "exit" {
        it "stops at end of input" {
            let output = run_script(&mut repo, "");

            assert!(output.contains("==== Main Menu ===="));
            assert!(repo.is_empty());
        }

        it "stops when input ends mid-prompt without saving a partial record" {
            run_script(&mut repo, "1\n1\nJohn\n");

            assert!(repo.is_empty());
            assert!(!path.exists());
        }
    }
}
