//! # Field Validation
//!
//! Every record in a store passes through these checks, whether it was typed at
//! the menu or read from a database file.
//!
//! - **Text** (name, job): non-empty, and not a number. A string counts as a
//!   number only if it is an integer literal with a non-zero value, so `"0"`,
//!   `"-0"` and `"000"` are accepted as text. Text fields have always behaved
//!   this way and existing files rely on it.
//! - **Sex**: one of `F`, `f`, `M`, `m`, normalized to uppercase.
//! - **Age**: a whole number above zero, and at most [`ValidationRules::max_age`]
//!   when a cap is configured.
//!
//! Length limits are enforced by truncation in [`crate::input`], not here;
//! [`validate_record`] only rejects over-long fields on records that bypassed
//! the line reader.

use crate::error::{Result, StaffError};
use crate::model::{Record, Sex};

/// Field limits shared by interactive entry and bulk load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub max_age: Option<u32>,
    pub max_field_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            max_age: Some(120),
            max_field_len: 100,
        }
    }
}

pub fn validate_text(field: &'static str, s: &str) -> Result<String> {
    if s.is_empty() {
        return Err(StaffError::validation(field, "must not be empty"));
    }
    if is_nonzero_integer(s) {
        return Err(StaffError::validation(field, "must not be a number"));
    }
    Ok(s.to_string())
}

pub fn validate_sex(s: &str) -> Result<Sex> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some('F' | 'f'), None) => Ok(Sex::Female),
        (Some('M' | 'm'), None) => Ok(Sex::Male),
        _ => Err(StaffError::validation("sex", "enter F or M")),
    }
}

pub fn validate_age(s: &str, max_age: Option<u32>) -> Result<u32> {
    let age: i64 = s
        .trim()
        .parse()
        .map_err(|_| StaffError::validation("age", format!("'{}' is not a whole number", s)))?;

    if age <= 0 {
        return Err(StaffError::validation("age", "must be greater than zero"));
    }
    if let Some(max) = max_age {
        if age > i64::from(max) {
            return Err(StaffError::validation(
                "age",
                format!("must be at most {}", max),
            ));
        }
    }
    u32::try_from(age).map_err(|_| StaffError::validation("age", "out of range"))
}

pub fn validate_record(record: &Record, rules: &ValidationRules) -> Result<()> {
    for (field, value) in [("name", &record.name), ("job", &record.job)] {
        validate_text(field, value)?;
        if value.len() > rules.max_field_len {
            return Err(StaffError::validation(
                field,
                format!("longer than {} bytes", rules.max_field_len),
            ));
        }
    }
    validate_age(&record.age.to_string(), rules.max_age)?;
    Ok(())
}

fn is_nonzero_integer(s: &str) -> bool {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix(&['+', '-'][..])
        .unwrap_or(trimmed);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && digits.bytes().any(|b| b != b'0')
}
