//! Application summaries sent to the parties once a case is issued.

use crate::application::template_content::{
    CommonContent, ContentRequest, TemplateContentMapper, APPLICANT_1_SOLICITOR_KEYS,
    APPLICANT_2_SOLICITOR_KEYS,
};
use crate::domain::case::{Applicant, FinancialOrderFor};
use crate::domain::foundation::{format_optional_date, LanguagePreference};
use crate::domain::template::{keys, DocumentType, TemplateContent};

/// Placeholder names for one party's personal details.
struct ApplicantKeys {
    first_name: &'static str,
    middle_name: &'static str,
    last_name: &'static str,
    full_name: &'static str,
    address: &'static str,
    email: &'static str,
    is_represented: &'static str,
}

const APPLICANT_1: ApplicantKeys = ApplicantKeys {
    first_name: keys::APPLICANT_1_FIRST_NAME,
    middle_name: keys::APPLICANT_1_MIDDLE_NAME,
    last_name: keys::APPLICANT_1_LAST_NAME,
    full_name: keys::APPLICANT_1_FULL_NAME,
    address: keys::APPLICANT_1_ADDRESS,
    email: keys::APPLICANT_1_EMAIL,
    is_represented: keys::APPLICANT_1_IS_REPRESENTED,
};

const APPLICANT_2: ApplicantKeys = ApplicantKeys {
    first_name: keys::APPLICANT_2_FIRST_NAME,
    middle_name: keys::APPLICANT_2_MIDDLE_NAME,
    last_name: keys::APPLICANT_2_LAST_NAME,
    full_name: keys::APPLICANT_2_FULL_NAME,
    address: keys::APPLICANT_2_ADDRESS,
    email: keys::APPLICANT_2_EMAIL,
    is_represented: keys::APPLICANT_2_IS_REPRESENTED,
};

fn applicant_details(applicant: &Applicant, names: &ApplicantKeys) -> TemplateContent {
    let mut content = TemplateContent::new();
    content
        .put(names.first_name, applicant.first_name.clone())
        .put(names.middle_name, applicant.middle_name.clone())
        .put(names.last_name, applicant.last_name.clone())
        .put(names.full_name, applicant.full_name())
        .put(names.is_represented, applicant.is_represented());

    // Confidential contact details stay off the application.
    if applicant.is_confidential() {
        content.put(names.address, None::<String>).put(names.email, None::<String>);
    } else {
        content
            .put_or(names.address, applicant.home_address_lines(), keys::NOT_PROVIDED)
            .put_or(names.email, applicant.email.clone(), keys::NOT_PROVIDED);
    }
    content
}

fn financial_order_label(party: FinancialOrderFor, language: LanguagePreference) -> &'static str {
    match (party, language) {
        (FinancialOrderFor::Applicant, LanguagePreference::English) => "the applicant",
        (FinancialOrderFor::Children, LanguagePreference::English) => "the children",
        (FinancialOrderFor::Applicant, LanguagePreference::Welsh) => "y ceisydd",
        (FinancialOrderFor::Children, LanguagePreference::Welsh) => "y plant",
    }
}

/// Who a financial order is sought for, e.g. "the applicant and the children".
fn financial_order_for(applicant: &Applicant, language: LanguagePreference) -> Option<String> {
    if !applicant.applied_for_financial_order() || applicant.financial_order_for.is_empty() {
        return None;
    }
    let conjunction = match language {
        LanguagePreference::English => " and ",
        LanguagePreference::Welsh => " a ",
    };
    Some(
        applicant
            .financial_order_for
            .iter()
            .map(|party| financial_order_label(*party, language))
            .collect::<Vec<_>>()
            .join(conjunction),
    )
}

fn application_content(
    common: &CommonContent,
    request: &ContentRequest<'_>,
    include_applicant2_financial_order: bool,
) -> TemplateContent {
    let case = request.case_data;
    let language = request.language();
    let marriage = &case.application.marriage_details;

    let mut content = common.vocabulary(case, language);
    content
        .put(keys::CCD_CASE_REFERENCE, request.case_id.formatted())
        .put(keys::IS_SOLE, case.is_sole())
        .put(keys::IS_JOINT, !case.is_sole())
        .put(
            keys::ISSUE_DATE,
            format_optional_date(case.application.issue_date, language),
        )
        .merge(applicant_details(&case.applicant1, &APPLICANT_1))
        .merge(applicant_details(&case.applicant2, &APPLICANT_2))
        .merge(common.solicitor_or_placeholder(&case.applicant1, APPLICANT_1_SOLICITOR_KEYS))
        .merge(common.solicitor_or_placeholder(&case.applicant2, APPLICANT_2_SOLICITOR_KEYS))
        .put(
            keys::APPLICANT_1_FINANCIAL_ORDER,
            case.applicant1.applied_for_financial_order(),
        )
        .put(
            keys::APPLICANT_1_FINANCIAL_ORDER_FOR,
            financial_order_for(&case.applicant1, language),
        )
        .put(keys::MARRIAGE_DATE, format_optional_date(marriage.date, language))
        .put_or(
            keys::PLACE_OF_MARRIAGE,
            marriage.place_of_marriage.clone(),
            keys::NOT_PROVIDED,
        )
        .put_or(
            keys::COUNTRY_OF_MARRIAGE,
            marriage.country_of_marriage.clone(),
            keys::NOT_PROVIDED,
        )
        .put(keys::MARRIAGE_APPLICANT_1_NAME, marriage.applicant1_name.clone())
        .put(keys::MARRIAGE_APPLICANT_2_NAME, marriage.applicant2_name.clone())
        .put(
            keys::JURISDICTIONS,
            case.application
                .jurisdiction
                .descriptions(language, case.is_sole()),
        );

    if include_applicant2_financial_order {
        content
            .put(
                keys::APPLICANT_2_FINANCIAL_ORDER,
                case.applicant2.applied_for_financial_order(),
            )
            .put(
                keys::APPLICANT_2_FINANCIAL_ORDER_FOR,
                financial_order_for(&case.applicant2, language),
            );
    }
    content
}

/// The issued application as the applicant made it.
#[derive(Debug, Clone)]
pub struct ApplicationSoleContent {
    common: CommonContent,
}

impl ApplicationSoleContent {
    pub fn new(common: CommonContent) -> Self {
        Self { common }
    }
}

impl TemplateContentMapper for ApplicationSoleContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::ApplicationSole
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        application_content(&self.common, request, false)
    }
}

/// The issued joint application, with both applicants' financial orders.
#[derive(Debug, Clone)]
pub struct ApplicationJointContent {
    common: CommonContent,
}

impl ApplicationJointContent {
    pub fn new(common: CommonContent) -> Self {
        Self { common }
    }
}

impl TemplateContentMapper for ApplicationJointContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::ApplicationJoint
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        application_content(&self.common, request, true)
    }
}
