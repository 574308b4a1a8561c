//! Case module - the case aggregate and its parts.
//!
//! Everything here is plain data read by the template mappers. Optional
//! answers are `Option`s so that absent data is representable without
//! sentinel values.

mod address;
mod alternative_service;
mod applicant;
mod application;
mod case_data;
mod conditional_order;
mod final_order;
mod general_letter;
mod request_for_information;
mod solicitor;

pub use address::AddressGlobalUk;
pub use alternative_service::{AlternativeService, AlternativeServiceType, Bailiff};
pub use applicant::{Applicant, ContactDetailsType, FinancialOrderFor};
pub use application::{
    Application, Jurisdiction, JurisdictionConnection, MarriageDetails, ServiceMethod,
};
pub use case_data::{CaseData, CaseInvite};
pub use conditional_order::{
    ClarificationReason, ConditionalOrder, ConditionalOrderCourt, RefusalOption,
};
pub use final_order::FinalOrder;
pub use general_letter::{GeneralLetter, GeneralParties};
pub use request_for_information::{
    JointParties, RequestForInformation, RequestForInformationList, SoleParties,
};
pub use solicitor::{OrganisationPolicy, Solicitor};
