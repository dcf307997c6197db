//! Record types used by the demonstration pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A person waiting to get into the bar.
///
/// Deserializes from JSON objects and CSV rows with the columns `first_name`, `last_name`, `age`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: i64,
}

impl Person {
    /// Create a new person.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: i64) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }

    /// `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person({}, {}, {})", self.first_name, self.last_name, self.age)
    }
}
