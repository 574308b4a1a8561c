//! One mapper per document type.
//!
//! Mappers are grouped by stage of the case: application, notice of
//! proceedings, acknowledgement of service, conditional order, final order,
//! alternative service and general correspondence.

mod aos;
mod application;
mod conditional_order;
mod correspondence;
mod final_order;
mod notice_of_proceedings;
mod service;

pub use aos::{AosOverdueContent, RespondentInvitationContent};
pub use application::{ApplicationJointContent, ApplicationSoleContent};
pub use conditional_order::{
    CertificateOfEntitlementContent, ConditionalOrderPronouncedContent,
    ConditionalOrderRefusalContent, SwitchToSoleCoContent,
};
pub use correspondence::{CoversheetContent, GeneralLetterContent, RequestForInformationContent};
pub use final_order::{ApplyForFinalOrderContent, FinalOrderGrantedContent};
pub use notice_of_proceedings::{NoticeOfProceedingContent, NoticeOfProceedingSolicitorContent};
pub use service::{BailiffServiceContent, ServiceOrderContent};

use crate::domain::case::CaseData;
use crate::domain::template::{keys, TemplateContent};

/// Full names of both parties.
pub(super) fn party_names(case: &CaseData) -> TemplateContent {
    let mut content = TemplateContent::new();
    content
        .put(keys::APPLICANT_1_FULL_NAME, case.applicant1.full_name())
        .put(keys::APPLICANT_2_FULL_NAME, case.applicant2.full_name());
    content
}
