//! Postal and contact details of the courts that pronounce conditional orders.

use serde::{Deserialize, Serialize};

use crate::domain::case::ConditionalOrderCourt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalOrderCourtDetails {
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub town: String,
    pub postcode: String,
    pub email: String,
    pub phone: String,
}

impl ConditionalOrderCourtDetails {
    /// Details for the given court.
    pub fn for_court(court: ConditionalOrderCourt) -> Self {
        match court {
            ConditionalOrderCourt::Birmingham => Self {
                name: "Birmingham Civil and Family Justice Centre".into(),
                address_line1: "Priory Courts".into(),
                address_line2: "33 Bull Street".into(),
                town: "Birmingham".into(),
                postcode: "B4 6DS".into(),
                email: "contactdivorce@justice.gov.uk".into(),
                phone: "0300 303 0642".into(),
            },
            ConditionalOrderCourt::BuryStEdmunds => Self {
                name: "Bury St. Edmunds Regional Divorce Centre".into(),
                address_line1: "2nd Floor".into(),
                address_line2: "Triton House, St. Andrews Street North".into(),
                town: "Bury St. Edmunds".into(),
                postcode: "IP33 1TR".into(),
                email: "contactdivorce@justice.gov.uk".into(),
                phone: "0300 303 0642".into(),
            },
        }
    }
}
