//! Free-form correspondence: general letters, requests for information and
//! postal coversheets.

use tracing::warn;

use crate::application::template_content::{CommonContent, ContentRequest, TemplateContentMapper};
use crate::domain::case::{AddressGlobalUk, GeneralParties, JointParties, SoleParties};
use crate::domain::foundation::{format_date, LanguagePreference, Party};
use crate::domain::template::{keys, DocumentType, TemplateContent};

use super::party_names;

/// Caseworker letter to a party or to a third party.
///
/// The recipient comes from the letter itself, not from the request.
#[derive(Debug, Clone)]
pub struct GeneralLetterContent {
    common: CommonContent,
}

impl GeneralLetterContent {
    pub fn new(common: CommonContent) -> Self {
        Self { common }
    }

    fn addressee(request: &ContentRequest<'_>) -> GeneralParties {
        request
            .case_data
            .general_letter
            .as_ref()
            .map(|letter| letter.recipient)
            .unwrap_or_default()
    }
}

impl TemplateContentMapper for GeneralLetterContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::GeneralLetter
    }

    fn language(&self, request: &ContentRequest<'_>) -> LanguagePreference {
        let case = request.case_data;
        match Self::addressee(request) {
            GeneralParties::Applicant => case.applicant1.language_preference(),
            GeneralParties::Respondent => case.applicant2.language_preference(),
            GeneralParties::Other => LanguagePreference::English,
        }
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let letter = case.general_letter.as_ref();
        let language = self.language(request);

        let mut content = self.common.letter_content_in(request, language);
        match Self::addressee(request) {
            GeneralParties::Applicant => {
                content.merge(self.common.recipient(case.applicant(Party::Applicant1)));
            }
            GeneralParties::Respondent => {
                content.merge(self.common.recipient(case.applicant(Party::Applicant2)));
            }
            GeneralParties::Other => {
                let name = letter.and_then(|l| l.other_recipient_name.clone());
                let address = letter
                    .and_then(|l| l.other_recipient_address.as_ref())
                    .filter(|address| !address.is_blank())
                    .map(AddressGlobalUk::to_lines);
                if address.is_none() {
                    warn!(
                        case_id = %request.case_id,
                        "General letter to other recipient has no address"
                    );
                }
                content
                    .put_or(keys::RECIPIENT_NAME, name, keys::NOT_PROVIDED)
                    .put(keys::RECIPIENT_ADDRESS, address);
            }
        }
        content
            .merge(party_names(case))
            .put(keys::IS_SOLE, case.is_sole())
            .put(
                keys::GENERAL_LETTER_DETAILS,
                letter.and_then(|l| l.details.clone()),
            );
        content
    }
}

/// Request from the court for further information.
#[derive(Debug, Clone)]
pub struct RequestForInformationContent {
    common: CommonContent,
}

impl RequestForInformationContent {
    pub fn new(common: CommonContent) -> Self {
        Self { common }
    }

    /// Whether the latest request went to someone other than the applicants.
    fn to_third_party(request: &ContentRequest<'_>) -> bool {
        request
            .case_data
            .request_for_information_list
            .latest()
            .map_or(false, |rfi| {
                rfi.sole_parties == Some(SoleParties::Other)
                    || rfi.joint_parties == Some(JointParties::Other)
            })
    }
}

impl TemplateContentMapper for RequestForInformationContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::RequestForInformation
    }

    fn language(&self, request: &ContentRequest<'_>) -> LanguagePreference {
        if Self::to_third_party(request) {
            LanguagePreference::English
        } else {
            request.language()
        }
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let latest = case.request_for_information_list.latest();
        let to_third_party = Self::to_third_party(request);

        let mut content = self.common.letter_content_in(request, self.language(request));
        if to_third_party {
            content
                .put_or(
                    keys::RECIPIENT_NAME,
                    latest.and_then(|rfi| rfi.name.clone()),
                    keys::NOT_PROVIDED,
                )
                .put(keys::RECIPIENT_ADDRESS, None::<String>);
        } else {
            content.merge(self.common.recipient(request.recipient_applicant()));
        }
        content
            .merge(party_names(case))
            .put(keys::IS_JOINT, !case.is_sole())
            .put(
                keys::REQUEST_FOR_INFORMATION_DETAILS,
                latest.and_then(|rfi| rfi.details.clone()),
            )
            .put(
                keys::SENT_TO_BOTH_APPLICANTS,
                latest.map_or(false, |rfi| rfi.is_for_both_applicants()),
            );
        content
    }
}

/// Coversheet for documents posted to a party.
#[derive(Debug, Clone)]
pub struct CoversheetContent {
    common: CommonContent,
}

impl CoversheetContent {
    pub fn new(common: CommonContent) -> Self {
        Self { common }
    }
}

impl TemplateContentMapper for CoversheetContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::Coversheet
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let mut content = self.common.recipient(request.recipient_applicant());
        content
            .put(keys::CCD_CASE_REFERENCE, request.case_id.formatted())
            .put(keys::DATE, format_date(request.today, request.language()));
        content
    }
}
