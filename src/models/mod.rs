//! Domain models for the roster.
//!
//! # Core Concepts
//!
//! - [`Person`]: The shared base of every record, a first and last name.
//! - [`Student`]: A person with an ordered list of grades and a derived GPA.
//! - [`Worker`]: A person with a total wage, hours worked and a derived hourly wage.
//! - [`Record`]: One entry of the roster, exactly one of the three variants above.
//!
//! Derived metrics are computed on demand and never stored.

mod person;
mod student;
mod worker;

pub use person::*;
pub use student::*;
pub use worker::*;

/// An insertion-ordered list of records, as held by the repository.
pub type Roster = Vec<Record>;

/// A single roster entry.
///
/// The on-disk format carries no type tag (see [`crate::codec`]), but in memory
/// the variant is always explicit.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Person(Person),
    Student(Student),
    Worker(Worker),
}

/// The variant of a [`Record`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Person,
    Student,
    Worker,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Student => "student",
            Self::Worker => "worker",
        }
    }
}

impl Record {
    /// The base fields shared by every variant.
    pub fn person(&self) -> &Person {
        match self {
            Self::Person(person) => person,
            Self::Student(student) => &student.person,
            Self::Worker(worker) => &worker.person,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Person(_) => RecordKind::Person,
            Self::Student(_) => RecordKind::Student,
            Self::Worker(_) => RecordKind::Worker,
        }
    }
}

impl From<Person> for Record {
    fn from(person: Person) -> Self {
        Self::Person(person)
    }
}

impl From<Student> for Record {
    fn from(student: Student) -> Self {
        Self::Student(student)
    }
}

impl From<Worker> for Record {
    fn from(worker: Worker) -> Self {
        Self::Worker(worker)
    }
}
