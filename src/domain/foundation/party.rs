//! Parties to a case.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two parties named on the case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Party {
    #[default]
    Applicant1,
    Applicant2,
}

impl Party {
    /// The other party on the case.
    pub fn other(&self) -> Party {
        match self {
            Party::Applicant1 => Party::Applicant2,
            Party::Applicant2 => Party::Applicant1,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Applicant1 => write!(f, "applicant1"),
            Party::Applicant2 => write!(f, "applicant2"),
        }
    }
}

impl std::str::FromStr for Party {
    type Err = super::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "applicant1" | "applicant" => Ok(Party::Applicant1),
            "applicant2" | "respondent" => Ok(Party::Applicant2),
            other => Err(super::ValidationError::invalid_format(
                "party",
                format!("unknown party '{}'", other),
            )),
        }
    }
}

/// Gender recorded for an applicant; drives husband/wife wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
}
