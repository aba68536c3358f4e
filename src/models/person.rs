use std::fmt;

/// The base identity shared by every record: a first and last name.
///
/// Names are expected to be non-empty, but that rule belongs to whoever
/// collects the input. Records loaded from disk are taken as they are, so
/// either name may be empty here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Full name as `<first> <last>`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match against either name.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.first_name.to_lowercase().contains(&needle)
            || self.last_name.to_lowercase().contains(&needle)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Person::new("John", "Smith").to_string(), "Name: John Smith");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let person = Person::new("John", "Smith");
        assert!(person.matches("smith"));
        assert!(person.matches("JOHN"));
        assert!(person.matches("mit"));
        assert!(!person.matches("zzz"));
    }

    #[test]
    fn test_empty_query_matches_everyone() {
        assert!(Person::new("John", "Smith").matches(""));
    }
}
