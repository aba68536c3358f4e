//! Interactive text menu.
//!
//! The menu reads one line per answer, so it runs equally well against a
//! terminal or a scripted input stream. End of input behaves like choosing
//! "Exit" at whatever prompt is active.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::models::*;
use crate::render;
use crate::repository::Repository;

pub struct Menu<'a, R, W> {
    repo: &'a mut Repository,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(repo: &'a mut Repository, input: R, output: W) -> Self {
        Self {
            repo,
            input,
            output,
        }
    }

    /// Run the main menu until the user exits or input ends.
    ///
    /// Every add is saved as it happens, so nothing is written on exit.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "==== Main Menu ====")?;
            writeln!(self.output, "1. Add User")?;
            writeln!(self.output, "2. View User")?;
            writeln!(self.output, "3. Exit")?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };

            let finished = match choice.trim() {
                "1" => self.add_user()?.is_none(),
                "2" => self.view_user()?.is_none(),
                "3" => true,
                _ => {
                    writeln!(self.output, "Invalid option.")?;
                    false
                }
            };
            if finished {
                return Ok(());
            }
        }
    }

    // ============================================================
    // Add
    // ============================================================

    fn add_user(&mut self) -> Result<Option<()>> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Select User Type:")?;
            writeln!(self.output, "1. Student")?;
            writeln!(self.output, "2. Worker")?;
            writeln!(self.output, "3. Cancel")?;
            let Some(choice) = self.prompt("Press 1, 2, or 3: ")? else {
                return Ok(None);
            };

            match choice.trim() {
                "1" => return self.add_student(),
                "2" => return self.add_worker(),
                "3" => {
                    writeln!(self.output, "Cancelled adding user.")?;
                    return Ok(Some(()));
                }
                _ => writeln!(self.output, "Invalid selection. Please press 1, 2, or 3.")?,
            }
        }
    }

    fn add_student(&mut self) -> Result<Option<()>> {
        let Some(person) = self.prompt_person()? else {
            return Ok(None);
        };
        let mut student = Student::new(person);

        writeln!(self.output, "Enter grades, one per line. Leave blank to finish.")?;
        loop {
            let Some(line) = self.prompt("Grade: ")? else {
                return Ok(None);
            };
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            match line.parse::<f64>() {
                Ok(grade) if grade.is_finite() => student.add_grade(grade),
                _ => writeln!(self.output, "Invalid grade.")?,
            }
        }

        self.commit(student.into())?;
        Ok(Some(()))
    }

    fn add_worker(&mut self) -> Result<Option<()>> {
        let Some(person) = self.prompt_person()? else {
            return Ok(None);
        };
        let Some(wage) = self.prompt_number::<f64>("Enter total wage: ")? else {
            return Ok(None);
        };
        let Some(hours) = self.prompt_number::<i32>("Enter hours worked: ")? else {
            return Ok(None);
        };

        self.commit(Worker::new(person, wage, hours).into())?;
        Ok(Some(()))
    }

    fn commit(&mut self, record: Record) -> Result<()> {
        let label = match record.kind() {
            RecordKind::Student => "Student",
            RecordKind::Worker => "Worker",
            RecordKind::Person => "User",
        };

        match self.repo.add(record) {
            Ok(()) => writeln!(self.output, "{} added successfully!", label)?,
            Err(e) => {
                tracing::error!("Failed to save roster: {e}");
                writeln!(self.output, "Could not save: {}", e)?;
            }
        }
        Ok(())
    }

    // ============================================================
    // View
    // ============================================================

    fn view_user(&mut self) -> Result<Option<()>> {
        let Some(query) = self.prompt("Enter name to search: ")? else {
            return Ok(None);
        };

        let matches: Vec<Record> = self.repo.find(&query).into_iter().cloned().collect();
        if matches.is_empty() {
            writeln!(self.output, "No users found.")?;
            return Ok(Some(()));
        }

        writeln!(self.output)?;
        writeln!(self.output, "Select a user:")?;
        let choices: Vec<&Record> = matches.iter().collect();
        write!(self.output, "{}", render::render_choices(&choices))?;

        let Some(option) = self.prompt(": ")? else {
            return Ok(None);
        };
        match option.trim().parse::<usize>() {
            Ok(n) if (1..=matches.len()).contains(&n) => {
                writeln!(self.output)?;
                write!(self.output, "{}", render::render_record(&matches[n - 1]))?;
            }
            _ => writeln!(self.output, "Invalid choice.")?,
        }
        Ok(Some(()))
    }

    // ============================================================
    // Prompts
    // ============================================================

    /// Print `message` and read one line without its line ending.
    /// Returns `None` at end of input.
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
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn prompt_person(&mut self) -> Result<Option<Person>> {
        let Some(first_name) = self.prompt_name("First")? else {
            return Ok(None);
        };
        let Some(last_name) = self.prompt_name("Last")? else {
            return Ok(None);
        };
        Ok(Some(Person::new(first_name, last_name)))
    }

    /// Re-prompts until a non-blank name is given; the result is trimmed.
    fn prompt_name(&mut self, label: &str) -> Result<Option<String>> {
        loop {
            let Some(name) = self.prompt(&format!("Enter {} Name: ", label))? else {
                return Ok(None);
            };
            let name = name.trim();
            if !name.is_empty() {
                return Ok(Some(name.to_string()));
            }
            writeln!(self.output, "{} name cannot be empty.", label)?;
        }
    }

    fn prompt_number<T: FiniteNumber>(&mut self, message: &str) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) if value.is_finite_value() => return Ok(Some(value)),
                _ => writeln!(self.output, "Invalid number. Try again.")?,
            }
        }
    }
}

/// Numbers accepted at a prompt. NaN and infinities cannot be stored in JSON.
trait FiniteNumber: FromStr {
    fn is_finite_value(&self) -> bool;
}

impl FiniteNumber for f64 {
    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

impl FiniteNumber for i32 {
    fn is_finite_value(&self) -> bool {
        true
    }
}
