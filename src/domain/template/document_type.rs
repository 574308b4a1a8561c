//! DocumentType - every document this crate can produce content for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    ApplicationSole,
    ApplicationJoint,
    NoticeOfProceedingsApplicant,
    NoticeOfProceedingsSolicitor,
    RespondentAosInvitation,
    AosOverdueLetter,
    SwitchToSoleConditionalOrder,
    CertificateOfEntitlement,
    ConditionalOrderPronounced,
    ConditionalOrderRefusal,
    FinalOrderGranted,
    FinalOrderCanApply,
    ServiceOrder,
    BailiffServiceOutcome,
    GeneralLetter,
    RequestForInformation,
    Coversheet,
}

impl DocumentType {
    /// Returns every document type.
    pub fn all() -> &'static [DocumentType] {
        &[
            DocumentType::ApplicationSole,
            DocumentType::ApplicationJoint,
            DocumentType::NoticeOfProceedingsApplicant,
            DocumentType::NoticeOfProceedingsSolicitor,
            DocumentType::RespondentAosInvitation,
            DocumentType::AosOverdueLetter,
            DocumentType::SwitchToSoleConditionalOrder,
            DocumentType::CertificateOfEntitlement,
            DocumentType::ConditionalOrderPronounced,
            DocumentType::ConditionalOrderRefusal,
            DocumentType::FinalOrderGranted,
            DocumentType::FinalOrderCanApply,
            DocumentType::ServiceOrder,
            DocumentType::BailiffServiceOutcome,
            DocumentType::GeneralLetter,
            DocumentType::RequestForInformation,
            DocumentType::Coversheet,
        ]
    }

    /// Identifier used in snake_case contexts (CLI, logs).
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::ApplicationSole => "application_sole",
            DocumentType::ApplicationJoint => "application_joint",
            DocumentType::NoticeOfProceedingsApplicant => "notice_of_proceedings_applicant",
            DocumentType::NoticeOfProceedingsSolicitor => "notice_of_proceedings_solicitor",
            DocumentType::RespondentAosInvitation => "respondent_aos_invitation",
            DocumentType::AosOverdueLetter => "aos_overdue_letter",
            DocumentType::SwitchToSoleConditionalOrder => "switch_to_sole_conditional_order",
            DocumentType::CertificateOfEntitlement => "certificate_of_entitlement",
            DocumentType::ConditionalOrderPronounced => "conditional_order_pronounced",
            DocumentType::ConditionalOrderRefusal => "conditional_order_refusal",
            DocumentType::FinalOrderGranted => "final_order_granted",
            DocumentType::FinalOrderCanApply => "final_order_can_apply",
            DocumentType::ServiceOrder => "service_order",
            DocumentType::BailiffServiceOutcome => "bailiff_service_outcome",
            DocumentType::GeneralLetter => "general_letter",
            DocumentType::RequestForInformation => "request_for_information",
            DocumentType::Coversheet => "coversheet",
        }
    }

    /// Stem of the template file name, shared by the English and Welsh variants.
    pub fn template_stem(&self) -> &'static str {
        match self {
            DocumentType::ApplicationSole => "APP-SOLE",
            DocumentType::ApplicationJoint => "APP-JOINT",
            DocumentType::NoticeOfProceedingsApplicant => "NOP-APPLICANT",
            DocumentType::NoticeOfProceedingsSolicitor => "NOP-SOLICITOR",
            DocumentType::RespondentAosInvitation => "AOS-INVITE",
            DocumentType::AosOverdueLetter => "AOS-OVERDUE",
            DocumentType::SwitchToSoleConditionalOrder => "CO-SWITCH-SOLE",
            DocumentType::CertificateOfEntitlement => "CO-ENTITLEMENT",
            DocumentType::ConditionalOrderPronounced => "CO-PRONOUNCED",
            DocumentType::ConditionalOrderRefusal => "CO-REFUSAL",
            DocumentType::FinalOrderGranted => "FO-GRANTED",
            DocumentType::FinalOrderCanApply => "FO-CAN-APPLY",
            DocumentType::ServiceOrder => "SERVICE-ORDER",
            DocumentType::BailiffServiceOutcome => "BAILIFF-OUTCOME",
            DocumentType::GeneralLetter => "GENERAL-LETTER",
            DocumentType::RequestForInformation => "RFI",
            DocumentType::Coversheet => "COVERSHEET",
        }
    }

    /// Prefix of the generated document's file name.
    pub fn name_prefix(&self) -> &'static str {
        match self {
            DocumentType::ApplicationSole | DocumentType::ApplicationJoint => "application",
            DocumentType::NoticeOfProceedingsApplicant
            | DocumentType::NoticeOfProceedingsSolicitor => "noticeOfProceedings",
            DocumentType::RespondentAosInvitation => "aosInvitation",
            DocumentType::AosOverdueLetter => "aosOverdueLetter",
            DocumentType::SwitchToSoleConditionalOrder => "switchToSoleCoLetter",
            DocumentType::CertificateOfEntitlement => "certificateOfEntitlement",
            DocumentType::ConditionalOrderPronounced => "conditionalOrderGranted",
            DocumentType::ConditionalOrderRefusal => "conditionalOrderRefusal",
            DocumentType::FinalOrderGranted => "finalOrderGranted",
            DocumentType::FinalOrderCanApply => "finalOrderCanApply",
            DocumentType::ServiceOrder => "serviceOrder",
            DocumentType::BailiffServiceOutcome => "bailiffService",
            DocumentType::GeneralLetter => "generalLetter",
            DocumentType::RequestForInformation => "requestForInformation",
            DocumentType::Coversheet => "coversheet",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ValidationError;

    /// Accepts snake_case or kebab-case names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        DocumentType::all()
            .iter()
            .find(|doc| doc.as_str() == normalized)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "document_type",
                    format!("unknown document '{}'", s),
                )
            })
    }
}
