//! Conditional order letters: switching to sole, entitlement,
//! pronouncement and refusal.

use crate::application::template_content::{
    CommonContent, ContentRequest, HoldingPeriodService, TemplateContentMapper,
};
use crate::domain::foundation::{format_optional_date, format_time};
use crate::domain::template::{
    keys, ConditionalOrderCourtDetails, DocumentType, TemplateContent,
};

use super::party_names;

/// Letter telling the other applicant that a joint case continues as sole.
#[derive(Debug, Clone)]
pub struct SwitchToSoleCoContent {
    common: CommonContent,
}

impl SwitchToSoleCoContent {
    pub fn new(common: CommonContent) -> Self {
        Self { common }
    }
}

impl TemplateContentMapper for SwitchToSoleCoContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::SwitchToSoleConditionalOrder
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let mut content = self.common.letter_content(request);
        content
            .merge(self.common.recipient(request.recipient_applicant()))
            .merge(party_names(case))
            .put(
                keys::PARTNER,
                self.common.partner(case, request.partner(), request.language()),
            );
        content
    }
}

/// Certificate of entitlement to a conditional order, with hearing details.
#[derive(Debug, Clone)]
pub struct CertificateOfEntitlementContent {
    common: CommonContent,
    holding: HoldingPeriodService,
}

impl CertificateOfEntitlementContent {
    pub fn new(common: CommonContent, holding: HoldingPeriodService) -> Self {
        Self { common, holding }
    }
}

impl TemplateContentMapper for CertificateOfEntitlementContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::CertificateOfEntitlement
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let language = request.language();
        let order = &case.conditional_order;
        let hearing_date = order.hearing_date();

        let costs_information = if order.costs_granted() {
            Some(
                order
                    .claims_costs_order_information
                    .clone()
                    .unwrap_or_else(|| keys::NOT_GIVEN.to_string()),
            )
        } else {
            None
        };

        let mut content = self.common.letter_content(request);
        content
            .merge(self.common.recipient(request.recipient_applicant()))
            .merge(party_names(case))
            .put(keys::IS_SOLE, case.is_sole())
            .put(
                keys::COURT_DETAILS,
                order.court.map(ConditionalOrderCourtDetails::for_court),
            )
            .put(keys::DATE_OF_HEARING, format_optional_date(hearing_date, language))
            .put(
                keys::TIME_OF_HEARING,
                order.date_and_time_of_hearing.map(format_time),
            )
            .put(
                keys::BEFORE_DATE_OF_HEARING,
                format_optional_date(
                    hearing_date.map(|date| self.holding.hearing_contact_deadline(date)),
                    language,
                ),
            )
            .put(keys::COSTS_GRANTED, order.costs_granted())
            .put(keys::COSTS_ORDER_INFORMATION, costs_information)
            .put(
                keys::PARTNER,
                self.common.partner(case, request.partner(), language),
            );
        content
    }
}

/// Conditional order pronounced: when the final order can be applied for.
#[derive(Debug, Clone)]
pub struct ConditionalOrderPronouncedContent {
    common: CommonContent,
    holding: HoldingPeriodService,
}

impl ConditionalOrderPronouncedContent {
    pub fn new(common: CommonContent, holding: HoldingPeriodService) -> Self {
        Self { common, holding }
    }
}

impl TemplateContentMapper for ConditionalOrderPronouncedContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::ConditionalOrderPronounced
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let language = request.language();
        let order = &case.conditional_order;

        let eligible_from = case.final_order.date_final_order_eligible_from.or_else(|| {
            order
                .granted_date
                .map(|granted| self.holding.final_order_eligible_from(granted))
        });

        let mut content = self.common.letter_content(request);
        content
            .merge(self.common.recipient(request.recipient_applicant()))
            .merge(party_names(case))
            .put(keys::IS_SOLE, case.is_sole())
            .put(
                keys::CO_PRONOUNCED_DATE,
                format_optional_date(order.granted_date, language),
            )
            .put(
                keys::COURT_DETAILS,
                order.court.map(ConditionalOrderCourtDetails::for_court),
            )
            .put(
                keys::DATE_FINAL_ORDER_ELIGIBLE_FROM,
                format_optional_date(eligible_from, language),
            )
            .put(keys::COSTS_GRANTED, order.costs_granted())
            .put(
                keys::MARRIAGE_DATE,
                format_optional_date(case.application.marriage_details.date, language),
            )
            .put(
                keys::PARTNER,
                self.common.partner(case, request.partner(), language),
            );
        content
    }
}

/// Refusal of a conditional order, with the legal adviser's comments.
#[derive(Debug, Clone)]
pub struct ConditionalOrderRefusalContent {
    common: CommonContent,
}

impl ConditionalOrderRefusalContent {
    pub fn new(common: CommonContent) -> Self {
        Self { common }
    }
}

impl TemplateContentMapper for ConditionalOrderRefusalContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::ConditionalOrderRefusal
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let language = request.language();
        let order = &case.conditional_order;

        let mut content = self.common.letter_content(request);
        content
            .merge(self.common.recipient(request.recipient_applicant()))
            .merge(party_names(case))
            .put(keys::IS_SOLE, case.is_sole())
            .put(keys::IS_CLARIFICATION, order.is_clarification())
            .put(keys::IS_AMENDED_APPLICATION, order.is_amended_application())
            .put(
                keys::LEGAL_ADVISER_COMMENTS,
                order.legal_adviser_comments(language),
            )
            .put(
                keys::REFUSAL_DATE,
                format_optional_date(order.decision_date, language),
            )
            .put(
                keys::PARTNER,
                self.common.partner(case, request.partner(), language),
            );
        content
    }
}
