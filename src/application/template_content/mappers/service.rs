//! Outcomes of applications to serve the respondent another way.

use tracing::debug;

use crate::application::template_content::{CommonContent, ContentRequest, TemplateContentMapper};
use crate::domain::case::AlternativeServiceType;
use crate::domain::foundation::format_optional_date;
use crate::domain::template::{keys, DocumentType, TemplateContent};

use super::party_names;

/// Order on a deemed, dispensed or alternative service application.
#[derive(Debug, Clone)]
pub struct ServiceOrderContent {
    common: CommonContent,
}

impl ServiceOrderContent {
    pub fn new(common: CommonContent) -> Self {
        Self { common }
    }
}

impl TemplateContentMapper for ServiceOrderContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::ServiceOrder
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let language = request.language();
        let service = &case.alternative_service;
        let granted = service.is_granted();

        let refusal_reason = if granted {
            None
        } else {
            Some(
                service
                    .service_application_refusal_reason
                    .clone()
                    .unwrap_or_else(|| keys::NOT_GIVEN.to_string()),
            )
        };

        let mut content = self.common.letter_content(request);
        content
            .merge(self.common.recipient(request.recipient_applicant()))
            .merge(party_names(case))
            .put(
                keys::SERVICE_APPLICATION_RECEIVED_DATE,
                format_optional_date(service.received_service_application_date, language),
            )
            .put(
                keys::SERVICE_APPLICATION_DECISION_DATE,
                format_optional_date(service.service_application_decision_date, language),
            )
            .put(keys::SERVICE_APPLICATION_GRANTED, granted)
            .put(
                keys::IS_DEEMED_SERVICE,
                service.service_type == Some(AlternativeServiceType::Deemed),
            )
            .put(
                keys::IS_DISPENSED_SERVICE,
                service.service_type == Some(AlternativeServiceType::Dispensed),
            )
            .put(
                keys::IS_ALTERNATIVE_SERVICE,
                service.service_type == Some(AlternativeServiceType::AlternativeService),
            )
            .put(keys::REFUSAL_REASON, refusal_reason)
            .put(
                keys::DEEMED_SERVICE_DATE,
                format_optional_date(service.deemed_service_date, language),
            )
            .put(
                keys::PARTNER,
                self.common.partner(case, request.partner(), language),
            );
        content
    }
}

/// Result of a bailiff's attempt to serve the respondent.
#[derive(Debug, Clone)]
pub struct BailiffServiceContent {
    common: CommonContent,
}

impl BailiffServiceContent {
    pub fn new(common: CommonContent) -> Self {
        Self { common }
    }
}

impl TemplateContentMapper for BailiffServiceContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::BailiffServiceOutcome
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let language = request.language();
        let bailiff = case.alternative_service.bailiff.clone().unwrap_or_default();
        if case.alternative_service.bailiff.is_none() {
            debug!(case_id = %request.case_id, "No bailiff record on case");
        }

        let successful = bailiff.is_successful();
        let failure_reason = if successful {
            None
        } else {
            Some(
                bailiff
                    .reason_failed_to_serve
                    .clone()
                    .unwrap_or_else(|| keys::NOT_GIVEN.to_string()),
            )
        };

        let mut content = self.common.letter_content(request);
        content
            .merge(self.common.recipient(request.recipient_applicant()))
            .merge(party_names(case))
            .put_or(keys::LOCAL_COURT_NAME, bailiff.local_court_name, keys::NOT_PROVIDED)
            .put_or(keys::LOCAL_COURT_EMAIL, bailiff.local_court_email, keys::NOT_PROVIDED)
            .put(
                keys::CERTIFICATE_OF_SERVICE_DATE,
                format_optional_date(bailiff.certificate_of_service_date, language),
            )
            .put(keys::BAILIFF_SERVICE_SUCCESSFUL, successful)
            .put(keys::REASON_FAILED_TO_SERVE, failure_reason)
            .put(
                keys::PARTNER,
                self.common.partner(case, request.partner(), language),
            );
        content
    }
}
