use super::Person;

/// A person with an ordered list of grades.
///
/// Grades are entered once, when the student is created. There is no way to
/// remove one.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub person: Person,
    grades: Vec<f64>,
}

impl Student {
    pub fn new(person: Person) -> Self {
        Self {
            person,
            grades: Vec::new(),
        }
    }

    pub fn with_grades(person: Person, grades: Vec<f64>) -> Self {
        Self { person, grades }
    }

    pub fn add_grade(&mut self, grade: f64) {
        self.grades.push(grade);
    }

    /// Grades in the order they were entered.
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    /// Arithmetic mean of the grades, `0.0` when there are none.
    pub fn calculate_gpa(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(grades: &[f64]) -> Student {
        Student::with_grades(Person::new("Alan", "Turing"), grades.to_vec())
    }

    #[test]
    fn test_gpa_without_grades_is_zero() {
        assert_eq!(student(&[]).calculate_gpa(), 0.0);
    }

    #[test]
    fn test_gpa_is_mean() {
        assert_eq!(student(&[80.0, 90.0]).calculate_gpa(), 85.0);
        assert_eq!(student(&[3.0]).calculate_gpa(), 3.0);
    }

    #[test]
    fn test_add_grade_preserves_order() {
        let mut s = Student::new(Person::new("Alan", "Turing"));
        s.add_grade(70.0);
        s.add_grade(95.5);
        s.add_grade(60.0);
        assert_eq!(s.grades(), &[70.0, 95.5, 60.0]);
    }
}
