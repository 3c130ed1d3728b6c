use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Sex {
    pub fn code(&self) -> char {
        match self {
            Sex::Female => 'F',
            Sex::Male => 'M',
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One employee entry.
///
/// Records are only built from validated fields, see [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub sex: Sex,
    pub age: u32,
    pub job: String,
}

impl Record {
    pub fn new(name: impl Into<String>, sex: Sex, age: u32, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sex,
            age,
            job: job.into(),
        }
    }
}
