//! Final order progress.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinalOrder {
    pub date_final_order_submitted: Option<NaiveDateTime>,
    pub granted_date: Option<NaiveDateTime>,
    pub date_final_order_eligible_from: Option<NaiveDate>,
    pub date_final_order_no_longer_eligible: Option<NaiveDate>,
}

impl FinalOrder {
    pub fn granted_on(&self) -> Option<NaiveDate> {
        self.granted_date.map(|dt| dt.date())
    }
}
