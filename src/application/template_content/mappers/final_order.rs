//! Final order letters.

use crate::application::template_content::{
    CommonContent, ContentRequest, HoldingPeriodService, TemplateContentMapper,
};
use crate::domain::foundation::format_optional_date;
use crate::domain::template::{keys, DocumentType, TemplateContent};

use super::party_names;

/// Final order granted: the marriage or civil partnership has ended.
#[derive(Debug, Clone)]
pub struct FinalOrderGrantedContent {
    common: CommonContent,
}

impl FinalOrderGrantedContent {
    pub fn new(common: CommonContent) -> Self {
        Self { common }
    }
}

impl TemplateContentMapper for FinalOrderGrantedContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::FinalOrderGranted
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let language = request.language();
        let marriage = &case.application.marriage_details;

        let mut content = self.common.letter_content(request);
        content
            .merge(self.common.recipient(request.recipient_applicant()))
            .merge(party_names(case))
            .put(keys::IS_SOLE, case.is_sole())
            .put(
                keys::FINAL_ORDER_GRANTED_DATE,
                format_optional_date(case.final_order.granted_on(), language),
            )
            .put(
                keys::CO_PRONOUNCED_DATE,
                format_optional_date(case.conditional_order.granted_date, language),
            )
            .put(keys::MARRIAGE_DATE, format_optional_date(marriage.date, language))
            .put_or(
                keys::PLACE_OF_MARRIAGE,
                marriage.place_of_marriage.clone(),
                keys::NOT_PROVIDED,
            );
        content
    }
}

/// Reminder that the final order can now be applied for.
#[derive(Debug, Clone)]
pub struct ApplyForFinalOrderContent {
    common: CommonContent,
    holding: HoldingPeriodService,
}

impl ApplyForFinalOrderContent {
    pub fn new(common: CommonContent, holding: HoldingPeriodService) -> Self {
        Self { common, holding }
    }
}

impl TemplateContentMapper for ApplyForFinalOrderContent {
    fn document_type(&self) -> DocumentType {
        DocumentType::FinalOrderCanApply
    }

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent {
        let case = request.case_data;
        let language = request.language();
        let final_order = &case.final_order;

        let eligible_from = final_order.date_final_order_eligible_from.or_else(|| {
            case.conditional_order
                .granted_date
                .map(|granted| self.holding.final_order_eligible_from(granted))
        });
        let respondent_from =
            eligible_from.map(|date| self.holding.respondent_can_apply_from(date));
        let no_longer_eligible = final_order
            .date_final_order_no_longer_eligible
            .or_else(|| {
                eligible_from.map(|date| self.holding.final_order_no_longer_eligible(date))
            });

        let mut content = self.common.letter_content(request);
        content
            .merge(self.common.recipient(request.recipient_applicant()))
            .merge(party_names(case))
            .put(keys::IS_SOLE, case.is_sole())
            .put(
                keys::DATE_FINAL_ORDER_ELIGIBLE_FROM,
                format_optional_date(eligible_from, language),
            )
            .put(
                keys::DATE_RESPONDENT_CAN_APPLY_FROM,
                format_optional_date(respondent_from, language),
            )
            .put(
                keys::DATE_FINAL_ORDER_NO_LONGER_ELIGIBLE,
                format_optional_date(no_longer_eligible, language),
            )
            .put(keys::SIGN_IN_URL, self.common.sign_in_url(case))
            .put(
                keys::PARTNER,
                self.common.partner(case, request.partner(), language),
            );
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::case::CaseData;
    use crate::domain::foundation::{CaseId, YesOrNo};
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(case: &CaseData) -> ContentRequest<'_> {
        ContentRequest::new(case, CaseId::new(1616591401473378).unwrap(), date(2022, 6, 1))
    }

    #[test]
    fn granted_letter_formats_dates() {
        let mut case = CaseData::default();
        case.final_order.granted_date =
            Some(date(2022, 5, 20).and_time(NaiveTime::from_hms_opt(14, 5, 0).unwrap()));
        case.conditional_order.granted_date = Some(date(2022, 1, 1));
        case.application.marriage_details.place_of_marriage = Some("Cardiff".into());

        let content =
            FinalOrderGrantedContent::new(CommonContent::default()).apply(&request(&case));

        assert_eq!(content.text(keys::FINAL_ORDER_GRANTED_DATE), Some("20 May 2022"));
        assert_eq!(content.text(keys::CO_PRONOUNCED_DATE), Some("1 January 2022"));
        assert_eq!(content.text(keys::PLACE_OF_MARRIAGE), Some("Cardiff"));
        assert!(content.get(keys::MARRIAGE_DATE).unwrap().is_null());
    }

    #[test]
    fn can_apply_letter_derives_dates_from_conditional_order() {
        let mut case = CaseData::default();
        case.conditional_order.granted_date = Some(date(2022, 1, 1));

        let content = ApplyForFinalOrderContent::new(
            CommonContent::default(),
            HoldingPeriodService::default(),
        )
        .apply(&request(&case));

        assert_eq!(
            content.text(keys::DATE_FINAL_ORDER_ELIGIBLE_FROM),
            Some("13 February 2022")
        );
        assert_eq!(
            content.text(keys::DATE_RESPONDENT_CAN_APPLY_FROM),
            Some("13 May 2022")
        );
        assert_eq!(
            content.text(keys::DATE_FINAL_ORDER_NO_LONGER_ELIGIBLE),
            Some("13 February 2023")
        );
    }

    #[test]
    fn can_apply_letter_prefers_stored_dates() {
        let mut case = CaseData::default();
        case.conditional_order.granted_date = Some(date(2022, 1, 1));
        case.final_order.date_final_order_eligible_from = Some(date(2022, 2, 20));
        case.applicant1.language_preference_welsh = Some(YesOrNo::Yes);

        let content = ApplyForFinalOrderContent::new(
            CommonContent::default(),
            HoldingPeriodService::default(),
        )
        .apply(&request(&case));

        assert_eq!(
            content.text(keys::DATE_FINAL_ORDER_ELIGIBLE_FROM),
            Some("20 Chwefror 2022")
        );
        assert_eq!(
            content.text(keys::DATE_RESPONDENT_CAN_APPLY_FROM),
            Some("20 Mai 2022")
        );
    }
}
