//! Courts and Tribunals Service Centre contact block.

use serde::{Deserialize, Serialize};

/// Contact details printed at the foot of most letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtscContactDetails {
    pub centre_name: String,
    pub service_centre: String,
    pub po_box: String,
    pub town: String,
    pub postcode: String,
    pub email_address: String,
    pub phone_number: String,
    pub opening_hours: String,
}
