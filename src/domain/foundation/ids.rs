//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Number of digits in a case reference.
const CASE_ID_DIGITS: usize = 16;

/// Case reference issued by the case-management platform.
///
/// Always 16 digits. Displays in the dashed form used on letters,
/// e.g. `1616-5914-0147-3378`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(u64);

impl CaseId {
    /// Creates a CaseId, rejecting values that are not exactly 16 digits.
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        let digits = value.to_string().len();
        if digits != CASE_ID_DIGITS {
            return Err(ValidationError::wrong_length("case_id", CASE_ID_DIGITS, digits));
        }
        Ok(Self(value))
    }

    /// Returns the raw numeric reference.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns the reference grouped into blocks of four digits.
    pub fn formatted(&self) -> String {
        let raw = self.0.to_string();
        raw.as_bytes()
            .chunks(4)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CaseId {
    type Err = ValidationError;

    /// Accepts both `1616591401473378` and `1616-5914-0147-3378`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.trim().chars().filter(|c| *c != '-').collect();
        if digits.is_empty() {
            return Err(ValidationError::empty_field("case_id"));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "case_id",
                "must contain only digits and dashes",
            ));
        }
        if digits.len() != CASE_ID_DIGITS {
            return Err(ValidationError::wrong_length(
                "case_id",
                CASE_ID_DIGITS,
                digits.len(),
            ));
        }
        let value = digits
            .parse::<u64>()
            .map_err(|e| ValidationError::invalid_format("case_id", e.to_string()))?;
        Self::new(value)
    }
}

/// Unique identifier for a generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Creates a new random DocumentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
