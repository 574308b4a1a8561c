//! Free-text letters sent by caseworkers.

use serde::{Deserialize, Serialize};

use super::AddressGlobalUk;

/// Who a general letter is addressed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GeneralParties {
    #[default]
    Applicant,
    Respondent,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralLetter {
    pub recipient: GeneralParties,
    pub other_recipient_name: Option<String>,
    pub other_recipient_address: Option<AddressGlobalUk>,
    pub details: Option<String>,
}
