//! Requests for further information sent to the parties.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Recipients of a request on a sole case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoleParties {
    Applicant,
    Other,
}

/// Recipients of a request on a joint case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JointParties {
    Applicant1,
    Applicant2,
    Both,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestForInformation {
    pub sole_parties: Option<SoleParties>,
    pub joint_parties: Option<JointParties>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub details: Option<String>,
    pub date_time: Option<NaiveDateTime>,
}

impl RequestForInformation {
    pub fn is_for_both_applicants(&self) -> bool {
        matches!(self.joint_parties, Some(JointParties::Both))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestForInformationList {
    pub requests: Vec<RequestForInformation>,
}

impl RequestForInformationList {
    /// The most recently added request.
    pub fn latest(&self) -> Option<&RequestForInformation> {
        self.requests.last()
    }
}
