//! Applications to serve the respondent by another route.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{is_yes, YesOrNo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlternativeServiceType {
    Deemed,
    Dispensed,
    Bailiff,
    AlternativeService,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bailiff {
    pub local_court_name: Option<String>,
    pub local_court_email: Option<String>,
    pub certificate_of_service_date: Option<NaiveDate>,
    pub successful_service_date: Option<NaiveDate>,
    pub reason_failed_to_serve: Option<String>,
}

impl Bailiff {
    /// Served successfully when a successful service date was recorded.
    pub fn is_successful(&self) -> bool {
        self.successful_service_date.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlternativeService {
    pub service_type: Option<AlternativeServiceType>,
    pub received_service_application_date: Option<NaiveDate>,
    pub service_application_granted: Option<YesOrNo>,
    pub service_application_refusal_reason: Option<String>,
    pub service_application_decision_date: Option<NaiveDate>,
    pub deemed_service_date: Option<NaiveDate>,
    pub bailiff: Option<Bailiff>,
}

impl AlternativeService {
    pub fn is_granted(&self) -> bool {
        is_yes(self.service_application_granted)
    }
}
