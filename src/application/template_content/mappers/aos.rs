//! Acknowledgement of service: the respondent's invitation and the
//! reminder sent when no response arrives.

use crate::application::template_content::{
    CommonContent, ContentRequest, HoldingPeriodService, TemplateContentMapper,
};
use crate::domain::foundation::format_optional_date;
use crate::domain::template::{keys, DocumentType, TemplateContent};

use super::party_names;

/// Invitation for the respondent to respond online.
#[derive(Debug, Clone)]
pub struct RespondentInvitationContent {
    common: CommonContent,
    holding: HoldingPeriodService,
}

impl RespondentInvitationContent {
    pub fn new(common: CommonContent, holding: HoldingPeriodService) -> Self {
        Self { common, holding }
    }
}

impl TemplateContentMapper for RespondentInvitationContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::RespondentAosInvitation
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let language = request.language();
        let application = &case.application;

        // A reissued application restarts the response period.
        let served_on = application.reissue_date.or(application.issue_date);
        let respond_by = served_on.map(|date| self.holding.aos_due_date(date));

        let mut content = self.common.letter_content(request);
        content
            .merge(self.common.recipient(request.recipient_applicant()))
            .merge(party_names(case))
            .put(keys::IS_SOLE, case.is_sole())
            .put(keys::ISSUE_DATE, format_optional_date(application.issue_date, language))
            .put(keys::IS_REISSUED, application.is_reissued())
            .put(
                keys::REISSUE_DATE,
                format_optional_date(application.reissue_date, language),
            )
            .put(keys::DUE_DATE, format_optional_date(respond_by, language))
            .put(keys::ACCESS_CODE, case.case_invite.access_code.clone())
            .put(keys::SIGN_IN_URL, self.common.sign_in_url(case))
            .put(
                keys::PARTNER,
                self.common.partner(case, request.partner(), language),
            );
        content
    }
}

/// Letter to the applicant when the respondent has not acknowledged service.
///
/// Sets guidance flags for the next steps open to the applicant: deemed
/// service when the respondent lives in the UK, and alternative service
/// when an email address for the respondent is known.
#[derive(Debug, Clone)]
pub struct AosOverdueContent {
    common: CommonContent,
    holding: HoldingPeriodService,
}

impl AosOverdueContent {
    pub fn new(common: CommonContent, holding: HoldingPeriodService) -> Self {
        Self { common, holding }
    }
}

impl TemplateContentMapper for AosOverdueContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::AosOverdueLetter
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let language = request.language();
        let issue_date = case.application.issue_date;
        let served_on = case.application.reissue_date.or(issue_date);
        let respondent = &case.applicant2;
        let respondent_email_known = respondent
            .email
            .as_deref()
            .map(str::trim)
            .map_or(false, |email| !email.is_empty());

        let mut content = self.common.letter_content(request);
        content
            .merge(self.common.recipient(request.recipient_applicant()))
            .merge(party_names(case))
            .put(keys::ISSUE_DATE, format_optional_date(issue_date, language))
            .put(
                keys::DUE_DATE,
                format_optional_date(
                    served_on.map(|date| self.holding.aos_due_date(date)),
                    language,
                ),
            )
            .put(
                keys::PARTNER,
                self.common.partner(case, request.partner(), language),
            )
            .put(keys::APPLICANT_2_IS_OVERSEAS, respondent.is_based_overseas())
            .put(keys::IS_DEEMED_SERVICE, !respondent.is_based_overseas())
            .put(keys::IS_ALTERNATIVE_SERVICE, respondent_email_known);
        content
    }
}
