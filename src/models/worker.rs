use super::Person;

/// A person paid a total wage for a number of hours worked.
#[derive(Debug, Clone, PartialEq)]
pub struct Worker {
    pub person: Person,
    /// Total wage for all hours worked.
    pub wage: f64,
    pub hours_worked: i32,
}

impl Worker {
    pub fn new(person: Person, wage: f64, hours_worked: i32) -> Self {
        Self {
            person,
            wage,
            hours_worked,
        }
    }

    /// `wage / hours_worked`, or `0.0` when no hours were worked.
    pub fn calculate_hourly_wage(&self) -> f64 {
        if self.hours_worked <= 0 {
            return 0.0;
        }
        self.wage / f64::from(self.hours_worked)
    }
}
