//! CaseData - the read-only aggregate every template is built from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ApplicationType, CaseKind, DivorceOrDissolution, Party, SupplementaryCaseType,
};

use super::{
    AlternativeService, Applicant, Application, ConditionalOrder, FinalOrder, GeneralLetter,
    RequestForInformationList,
};

/// Invitation sent to the second party to link to the case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseInvite {
    pub access_code: Option<String>,
    pub applicant2_invite_email_address: Option<String>,
}

/// Everything known about one divorce, dissolution or separation case.
///
/// Built fresh for each case event and never mutated by template mappers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseData {
    pub application_type: ApplicationType,
    pub divorce_or_dissolution: DivorceOrDissolution,
    pub supplementary_case_type: SupplementaryCaseType,
    pub applicant1: Applicant,
    pub applicant2: Applicant,
    pub application: Application,
    pub conditional_order: ConditionalOrder,
    pub final_order: FinalOrder,
    pub alternative_service: AlternativeService,
    pub general_letter: Option<GeneralLetter>,
    pub request_for_information_list: RequestForInformationList,
    pub case_invite: CaseInvite,
    pub due_date: Option<NaiveDate>,
}

impl CaseData {
    pub fn case_kind(&self) -> CaseKind {
        CaseKind::from_flags(self.divorce_or_dissolution, self.supplementary_case_type)
    }

    pub fn is_sole(&self) -> bool {
        self.application_type.is_sole()
    }

    pub fn is_divorce(&self) -> bool {
        self.divorce_or_dissolution.is_divorce()
    }

    pub fn is_judicial_separation(&self) -> bool {
        self.supplementary_case_type.is_separation()
    }

    pub fn applicant(&self, party: Party) -> &Applicant {
        match party {
            Party::Applicant1 => &self.applicant1,
            Party::Applicant2 => &self.applicant2,
        }
    }
}
