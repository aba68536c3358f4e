//! Text rendering of records for the console.

use crate::models::Record;

/// Render one record with its derived metric.
///
/// Example output:
/// ```text
/// Name: John Smith
/// GPA: 85.00
/// ```
pub fn render_record(record: &Record) -> String {
    let mut output = record.person().to_string();
    output.push('\n');
    match record {
        Record::Person(_) => {}
        Record::Student(student) => {
            output.push_str(&format!("GPA: {:.2}\n", student.calculate_gpa()));
        }
        Record::Worker(worker) => {
            output.push_str(&format!(
                "Hourly Wage: ${:.2}\n",
                worker.calculate_hourly_wage()
            ));
        }
    }
    output
}

/// Render a numbered selection list, starting at 1.
///
/// Example output:
/// ```text
/// 1. John Smith
/// 2. Anna Smithson
/// ```
pub fn render_choices(records: &[&Record]) -> String {
    let mut output = String::new();
    for (i, record) in records.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, record.person().full_name()));
    }
    output
}

/// Render every record, separated by blank lines.
pub fn render_all<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    records
        .into_iter()
        .map(render_record)
        .collect::<Vec<_>>()
        .join("\n")
}
