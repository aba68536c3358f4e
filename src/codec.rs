//! JSON encoding for the roster.
//!
//! The persisted form is a plain JSON array with no type tag on its elements:
//!
//! ```text
//! [
//!   { "FirstName": "John", "LastName": "Smith", "Grades": [80.0, 90.0] },
//!   { "FirstName": "Anna", "LastName": "Smithson", "Wage": 100.0, "HoursWorked": 4 },
//!   { "FirstName": "Ada", "LastName": "Lovelace" }
//! ]
//! ```
//!
//! On decode the variant is inferred from which keys are present. `Grades` is
//! checked before `Wage`, so an object carrying both is a student.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::*;

const GRADES: &str = "Grades";
const WAGE: &str = "Wage";

/// Errors raised while encoding or decoding a roster.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("expected a JSON array of records, found {0}")]
    NotAnArray(&'static str),

    #[error("record {index}: expected a JSON object, found {found}")]
    NotAnObject { index: usize, found: &'static str },

    #[error("record {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize roster: {0}")]
    Serialize(#[source] serde_json::Error),
}

// ============================================================
// Wire representations
// ============================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PersonDto {
    #[serde(default, deserialize_with = "null_as_default")]
    first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    last_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct StudentDto {
    #[serde(default, deserialize_with = "null_as_default")]
    first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    grades: Vec<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WorkerDto {
    #[serde(default, deserialize_with = "null_as_default")]
    first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    last_name: String,
    wage: f64,
    #[serde(default)]
    hours_worked: i32,
}

/// Untagged on purpose: each variant serializes as its bare field set.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RecordDto {
    Student(StudentDto),
    Worker(WorkerDto),
    Person(PersonDto),
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<&Record> for RecordDto {
    fn from(record: &Record) -> Self {
        match record {
            Record::Person(person) => Self::Person(PersonDto {
                first_name: person.first_name.clone(),
                last_name: person.last_name.clone(),
            }),
            Record::Student(student) => Self::Student(StudentDto {
                first_name: student.person.first_name.clone(),
                last_name: student.person.last_name.clone(),
                grades: student.grades().to_vec(),
            }),
            Record::Worker(worker) => Self::Worker(WorkerDto {
                first_name: worker.person.first_name.clone(),
                last_name: worker.person.last_name.clone(),
                wage: worker.wage,
                hours_worked: worker.hours_worked,
            }),
        }
    }
}

impl From<PersonDto> for Record {
    fn from(dto: PersonDto) -> Self {
        Record::Person(Person::new(dto.first_name, dto.last_name))
    }
}

impl From<StudentDto> for Record {
    fn from(dto: StudentDto) -> Self {
        Record::Student(Student::with_grades(
            Person::new(dto.first_name, dto.last_name),
            dto.grades,
        ))
    }
}

impl From<WorkerDto> for Record {
    fn from(dto: WorkerDto) -> Self {
        Record::Worker(Worker::new(
            Person::new(dto.first_name, dto.last_name),
            dto.wage,
            dto.hours_worked,
        ))
    }
}

// ============================================================
// Encode
// ============================================================

/// Encode a roster as a JSON array value.
pub fn encode(records: &[Record]) -> Result<Value, CodecError> {
    serde_json::to_value(to_wire(records)).map_err(CodecError::Serialize)
}

/// Encode a roster as indented JSON text, the form written to disk.
///
/// Keys keep their declared order (`FirstName`, `LastName`, then the variant's
/// own fields), which [`encode`] cannot guarantee once the output is a `Value`.
pub fn encode_pretty(records: &[Record]) -> Result<String, CodecError> {
    serde_json::to_string_pretty(&to_wire(records)).map_err(CodecError::Serialize)
}

fn to_wire(records: &[Record]) -> Vec<RecordDto> {
    records.iter().map(RecordDto::from).collect()
}

// ============================================================
// Decode
// ============================================================

/// Decode JSON text into a roster.
///
/// A top-level `null` is treated as an empty roster. Anything else that is
/// not an array of objects is an error.
pub fn decode(json: &str) -> Result<Roster, CodecError> {
    let value: Value = serde_json::from_str(json).map_err(CodecError::Syntax)?;
    decode_value(value)
}

/// Decode an already parsed JSON value into a roster.
fn decode_value(value: Value) -> Result<Roster, CodecError> {
    let elements = match value {
        Value::Array(elements) => elements,
        Value::Null => return Ok(Vec::new()),
        other => return Err(CodecError::NotAnArray(json_type(&other))),
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| decode_record(index, element))
        .collect()
}

fn decode_record(index: usize, value: Value) -> Result<Record, CodecError> {
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(CodecError::NotAnObject {
                index,
                found: json_type(&other),
            })
        }
    };

    let wrap = |source| CodecError::Element { index, source };

    if object.contains_key(GRADES) {
        serde_json::from_value::<StudentDto>(Value::Object(object))
            .map(Record::from)
            .map_err(wrap)
    } else if object.contains_key(WAGE) {
        serde_json::from_value::<WorkerDto>(Value::Object(object))
            .map(Record::from)
            .map_err(wrap)
    } else {
        serde_json::from_value::<PersonDto>(Value::Object(object))
            .map(Record::from)
            .map_err(wrap)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
