//! Notices of proceedings sent when an application is issued.

use crate::application::template_content::{
    CommonContent, ContentRequest, HoldingPeriodService, TemplateContentMapper,
};
use crate::domain::case::CaseData;
use crate::domain::foundation::{format_optional_date, LanguagePreference};
use crate::domain::template::{keys, DocumentType, TemplateContent};

use super::party_names;

/// Due date printed on a notice: the stored one, or derived from the issue date.
fn due_date(
    case: &CaseData,
    holding: &HoldingPeriodService,
    language: LanguagePreference,
) -> Option<String> {
    let due = case.due_date.or_else(|| {
        case.application
            .issue_date
            .map(|issued| holding.due_date_for(issued))
    });
    format_optional_date(due, language)
}

/// Notice of proceedings for a party acting in person.
#[derive(Debug, Clone)]
pub struct NoticeOfProceedingContent {
    common: CommonContent,
    holding: HoldingPeriodService,
}

impl NoticeOfProceedingContent {
    pub fn new(common: CommonContent, holding: HoldingPeriodService) -> Self {
        Self { common, holding }
    }
}

impl TemplateContentMapper for NoticeOfProceedingContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::NoticeOfProceedingsApplicant
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let language = request.language();

        let mut content = self.common.letter_content(request);
        content
            .merge(self.common.recipient(request.recipient_applicant()))
            .merge(party_names(case))
            .put(keys::IS_SOLE, case.is_sole())
            .put(
                keys::ISSUE_DATE,
                format_optional_date(case.application.issue_date, language),
            )
            .put(keys::DUE_DATE, due_date(case, &self.holding, language))
            .put(keys::APPLICANT_2_IS_OVERSEAS, case.applicant2.is_based_overseas())
            .put(keys::IS_PERSONAL_SERVICE, case.application.is_personal_service())
            .put(
                keys::PARTNER,
                self.common.partner(case, request.partner(), language),
            )
            .put(keys::SIGN_IN_URL, self.common.sign_in_url(case));
        content
    }
}

/// Notice of proceedings for a party's solicitor.
#[derive(Debug, Clone)]
pub struct NoticeOfProceedingSolicitorContent {
    common: CommonContent,
    holding: HoldingPeriodService,
}

impl NoticeOfProceedingSolicitorContent {
    pub fn new(common: CommonContent, holding: HoldingPeriodService) -> Self {
        Self { common, holding }
    }
}

impl TemplateContentMapper for NoticeOfProceedingSolicitorContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::NoticeOfProceedingsSolicitor
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let language = request.language();

        let mut content = self.common.letter_content(request);
        match request.recipient_applicant().representing_solicitor() {
            Some(solicitor) => {
                content
                    .put_or(keys::SOLICITOR_NAME, solicitor.name.clone(), keys::NOT_PROVIDED)
                    .put_or(
                        keys::SOLICITOR_FIRM,
                        solicitor.firm().map(str::to_string),
                        keys::NOT_PROVIDED,
                    )
                    .put_or(keys::SOLICITOR_ADDRESS, solicitor.address_lines(), keys::NOT_PROVIDED)
                    .put_or(
                        keys::SOLICITOR_REFERENCE,
                        solicitor.reference.clone(),
                        keys::NOT_PROVIDED,
                    );
            }
            None => {
                content
                    .put(keys::SOLICITOR_NAME, keys::NOT_REPRESENTED)
                    .put(keys::SOLICITOR_FIRM, keys::NOT_PROVIDED)
                    .put(keys::SOLICITOR_ADDRESS, keys::NOT_PROVIDED)
                    .put(keys::SOLICITOR_REFERENCE, keys::NOT_PROVIDED);
            }
        }
        content
            .merge(party_names(case))
            .put(keys::IS_SOLE, case.is_sole())
            .put(
                keys::ISSUE_DATE,
                format_optional_date(case.application.issue_date, language),
            )
            .put(keys::DUE_DATE, due_date(case, &self.holding, language));
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::case::{AddressGlobalUk, Solicitor};
    use crate::domain::foundation::{CaseId, DivorceOrDissolution, Gender, Party, YesOrNo};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn case() -> CaseData {
        let mut case = CaseData::default();
        case.applicant1.first_name = Some("John".into());
        case.applicant1.last_name = Some("Smith".into());
        case.applicant2.first_name = Some("Jane".into());
        case.applicant2.last_name = Some("Smith".into());
        case.applicant2.gender = Some(Gender::Female);
        case.application.issue_date = Some(date(2021, 4, 28));
        case
    }

    fn request(case: &CaseData) -> ContentRequest<'_> {
        ContentRequest::new(case, CaseId::new(1616591401473378).unwrap(), date(2021, 4, 28))
    }

    fn mapper() -> NoticeOfProceedingContent {
        NoticeOfProceedingContent::new(CommonContent::default(), HoldingPeriodService::default())
    }

    #[test]
    fn derives_due_date_from_issue_date() {
        let case = case();
        let content = mapper().apply(&request(&case));

        assert_eq!(content.text(keys::ISSUE_DATE), Some("28 April 2021"));
        assert_eq!(content.text(keys::DUE_DATE), Some("16 September 2021"));
    }

    #[test]
    fn stored_due_date_wins() {
        let mut case = case();
        case.due_date = Some(date(2021, 10, 1));
        let content = mapper().apply(&request(&case));
        assert_eq!(content.text(keys::DUE_DATE), Some("1 October 2021"));
    }

    #[test]
    fn partner_is_the_other_party() {
        let case = case();
        let content = mapper().apply(&request(&case));
        assert_eq!(content.text(keys::PARTNER), Some("wife"));

        let to_respondent = request(&case).for_recipient(Party::Applicant2);
        let content = mapper().apply(&to_respondent);
        assert_eq!(content.text(keys::PARTNER), Some("spouse"));
        assert_eq!(content.text(keys::RECIPIENT_NAME), Some("Jane Smith"));
    }

    #[test]
    fn overseas_respondent_flagged() {
        let mut case = case();
        case.applicant2.address = Some(AddressGlobalUk {
            address_line1: Some("1 Rue de Paris".into()),
            country: Some("France".into()),
            ..Default::default()
        });
        let content = mapper().apply(&request(&case));
        assert_eq!(content.flag(keys::APPLICANT_2_IS_OVERSEAS), Some(true));
    }

    #[test]
    fn dissolution_sign_in_url() {
        let mut case = case();
        case.divorce_or_dissolution = DivorceOrDissolution::Dissolution;
        let content = mapper().apply(&request(&case));
        assert_eq!(
            content.text(keys::SIGN_IN_URL),
            Some("https://www.end-civil-partnership.service.gov.uk")
        );
        assert_eq!(content.text(keys::PARTNER), Some("civil partner"));
    }

    #[test]
    fn key_set_is_stable_without_issue_date() {
        let full = mapper().apply(&request(&case()));
        let empty_case = CaseData::default();
        let empty = mapper().apply(&request(&empty_case));

        assert_eq!(full.keys().collect::<Vec<_>>(), empty.keys().collect::<Vec<_>>());
        assert!(empty.get(keys::DUE_DATE).unwrap().is_null());
    }

    #[test]
    fn solicitor_notice_uses_recipients_solicitor() {
        let mut case = case();
        case.applicant1.solicitor_represented = Some(YesOrNo::Yes);
        case.applicant1.solicitor = Some(Solicitor {
            name: Some("Sol Name".into()),
            reference: Some("REF-1".into()),
            ..Default::default()
        });
        let content = NoticeOfProceedingSolicitorContent::new(
            CommonContent::default(),
            HoldingPeriodService::default(),
        )
        .apply(&request(&case));

        assert_eq!(content.text(keys::SOLICITOR_NAME), Some("Sol Name"));
        assert_eq!(content.text(keys::SOLICITOR_REFERENCE), Some("REF-1"));
        assert_eq!(content.text(keys::SOLICITOR_FIRM), Some("Not provided"));
    }

    #[test]
    fn solicitor_notice_for_unrepresented_party() {
        let case = case();
        let content = NoticeOfProceedingSolicitorContent::new(
            CommonContent::default(),
            HoldingPeriodService::default(),
        )
        .apply(&request(&case));

        assert_eq!(content.text(keys::SOLICITOR_NAME), Some("Not represented"));
    }
}
