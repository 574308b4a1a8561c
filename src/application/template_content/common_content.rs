//! Content shared by most letters: headers, contact details, vocabulary,
//! relationship words and recipient or solicitor blocks.

use std::sync::Arc;

use crate::config::ContactConfig;
use crate::domain::case::{Applicant, CaseData};
use crate::domain::foundation::{format_date, CaseKind, LanguagePreference, Party};
use crate::domain::template::{
    keys, partner_word, terminology, CtscContactDetails, TemplateContent,
};

use super::ContentRequest;

const HEADER_ENGLISH: &str = "Divorce and Dissolution";
const HEADER_WELSH: &str = "Ysgariad a Diddymu";

/// Placeholder names for one party's solicitor block.
#[derive(Debug, Clone, Copy)]
pub struct SolicitorKeys {
    pub name: &'static str,
    pub firm: &'static str,
    pub address: &'static str,
    pub email: &'static str,
    pub reference: &'static str,
}

pub const APPLICANT_1_SOLICITOR_KEYS: SolicitorKeys = SolicitorKeys {
    name: keys::APPLICANT_1_SOLICITOR_NAME,
    firm: keys::APPLICANT_1_SOLICITOR_FIRM,
    address: keys::APPLICANT_1_SOLICITOR_ADDRESS,
    email: keys::APPLICANT_1_SOLICITOR_EMAIL,
    reference: keys::APPLICANT_1_SOLICITOR_REFERENCE,
};

pub const APPLICANT_2_SOLICITOR_KEYS: SolicitorKeys = SolicitorKeys {
    name: keys::APPLICANT_2_SOLICITOR_NAME,
    firm: keys::APPLICANT_2_SOLICITOR_FIRM,
    address: keys::APPLICANT_2_SOLICITOR_ADDRESS,
    email: keys::APPLICANT_2_SOLICITOR_EMAIL,
    reference: keys::APPLICANT_2_SOLICITOR_REFERENCE,
};

/// Helpers injected into mappers.
#[derive(Debug, Clone, Default)]
pub struct CommonContent {
    contact: Arc<ContactConfig>,
}

impl CommonContent {
    pub fn new(contact: ContactConfig) -> Self {
        Self {
            contact: Arc::new(contact),
        }
    }

    /// Service centre contact block for the language and kind of case.
    pub fn ctsc_contact_details(
        &self,
        language: LanguagePreference,
        kind: CaseKind,
    ) -> CtscContactDetails {
        let contact = &self.contact;
        match language {
            LanguagePreference::English => CtscContactDetails {
                centre_name: contact.centre_name.clone(),
                service_centre: contact.service_centre.clone(),
                po_box: contact.po_box.clone(),
                town: contact.town.clone(),
                postcode: contact.postcode.clone(),
                email_address: self.contact_email(language, kind).to_string(),
                phone_number: contact.phone.clone(),
                opening_hours: contact.opening_hours.clone(),
            },
            LanguagePreference::Welsh => CtscContactDetails {
                centre_name: contact.centre_name_welsh.clone(),
                service_centre: contact.service_centre_welsh.clone(),
                po_box: contact.po_box.clone(),
                town: contact.town.clone(),
                postcode: contact.postcode.clone(),
                email_address: self.contact_email(language, kind).to_string(),
                phone_number: contact.welsh_phone.clone(),
                opening_hours: contact.opening_hours_welsh.clone(),
            },
        }
    }

    fn contact_email(&self, language: LanguagePreference, kind: CaseKind) -> &str {
        match language {
            LanguagePreference::Welsh => &self.contact.welsh_email,
            LanguagePreference::English if kind.is_marriage() => &self.contact.email,
            LanguagePreference::English => &self.contact.dissolution_email,
        }
    }

    /// Header block printed on every letter.
    pub fn basic_template_content(
        &self,
        language: LanguagePreference,
        kind: CaseKind,
    ) -> TemplateContent {
        let (header, service_header, phone_and_hours) = match language {
            LanguagePreference::English => (
                HEADER_ENGLISH,
                self.contact.service_centre.as_str(),
                format!(
                    "Phone: {} ({})",
                    self.contact.phone, self.contact.opening_hours
                ),
            ),
            LanguagePreference::Welsh => (
                HEADER_WELSH,
                self.contact.service_centre_welsh.as_str(),
                format!(
                    "Ffôn: {} ({})",
                    self.contact.welsh_phone, self.contact.opening_hours_welsh
                ),
            ),
        };

        let mut content = TemplateContent::new();
        content
            .put(keys::DIVORCE_AND_DISSOLUTION_HEADER, header)
            .put(keys::COURTS_AND_TRIBUNALS_SERVICE_HEADER, service_header)
            .put(keys::CONTACT_EMAIL, self.contact_email(language, kind))
            .put(keys::PHONE_AND_OPENING_TIMES, phone_and_hours)
            .put(
                keys::CTSC_CONTACT_DETAILS,
                self.ctsc_contact_details(language, kind),
            );
        content
    }

    /// Divorce, dissolution or separation wording for the case.
    pub fn vocabulary(&self, case: &CaseData, language: LanguagePreference) -> TemplateContent {
        let terms = terminology(language, case.case_kind());
        let mut content = TemplateContent::new();
        content
            .put(keys::IS_DIVORCE, case.is_divorce())
            .put(keys::IS_JUDICIAL_SEPARATION, case.is_judicial_separation())
            .put(keys::DIVORCE_OR_DISSOLUTION, terms.application)
            .put(keys::MARRIAGE_OR_CIVIL_PARTNERSHIP, terms.union)
            .put(keys::DIVORCE_OR_CIVIL_PARTNERSHIP_PROCESS, terms.process)
            .put(keys::DIVORCE_OR_END_CIVIL_PARTNERSHIP, terms.ending);
        content
    }

    /// Everything a letter starts with: header, vocabulary, reference and date.
    pub fn letter_content(&self, request: &ContentRequest<'_>) -> TemplateContent {
        self.letter_content_in(request, request.language())
    }

    /// As [`letter_content`](Self::letter_content) in an explicit language.
    pub fn letter_content_in(
        &self,
        request: &ContentRequest<'_>,
        language: LanguagePreference,
    ) -> TemplateContent {
        let case = request.case_data;
        let mut content = self.basic_template_content(language, case.case_kind());
        content
            .merge(self.vocabulary(case, language))
            .put(keys::CCD_CASE_REFERENCE, request.case_id.formatted())
            .put(keys::DATE, format_date(request.today, language));
        content
    }

    /// Relationship word for `partner`, as seen by the other party.
    pub fn partner(
        &self,
        case: &CaseData,
        partner: Party,
        language: LanguagePreference,
    ) -> &'static str {
        partner_word(case.case_kind(), case.applicant(partner).gender, language)
    }

    /// Online service the parties sign in to.
    pub fn sign_in_url(&self, case: &CaseData) -> String {
        if case.case_kind().is_marriage() {
            self.contact.divorce_sign_in_url.clone()
        } else {
            self.contact.dissolution_sign_in_url.clone()
        }
    }

    /// Name and address a letter to `applicant` is sent to.
    ///
    /// Represented parties are written to care of their solicitor. A
    /// confidential home address is never disclosed.
    pub fn recipient(&self, applicant: &Applicant) -> TemplateContent {
        let mut content = TemplateContent::new();
        match applicant.representing_solicitor() {
            Some(solicitor) => {
                content.put_or(keys::RECIPIENT_NAME, solicitor.name.clone(), keys::NOT_PROVIDED);
                content.put(keys::RECIPIENT_ADDRESS, solicitor.address_lines());
            }
            None => {
                content.put(keys::RECIPIENT_NAME, applicant.full_name());
                content.put(keys::RECIPIENT_ADDRESS, applicant.home_address_lines());
            }
        }
        content
    }

    /// Solicitor details under `keys`, or placeholders when unrepresented.
    pub fn solicitor_or_placeholder(
        &self,
        applicant: &Applicant,
        names: SolicitorKeys,
    ) -> TemplateContent {
        let mut content = TemplateContent::new();
        match applicant.representing_solicitor() {
            Some(solicitor) => {
                content
                    .put_or(names.name, solicitor.name.clone(), keys::NOT_PROVIDED)
                    .put_or(
                        names.firm,
                        solicitor.firm().map(str::to_string),
                        keys::NOT_PROVIDED,
                    )
                    .put_or(names.address, solicitor.address_lines(), keys::NOT_PROVIDED)
                    .put_or(names.email, solicitor.email.clone(), keys::NOT_PROVIDED)
                    .put_or(names.reference, solicitor.reference.clone(), keys::NOT_PROVIDED);
            }
            None => {
                content
                    .put(names.name, keys::NOT_REPRESENTED)
                    .put(names.firm, keys::NOT_REPRESENTED)
                    .put(names.address, keys::NOT_REPRESENTED)
                    .put(names.email, keys::NOT_REPRESENTED)
                    .put(names.reference, keys::NOT_REPRESENTED);
            }
        }
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::case::{AddressGlobalUk, ContactDetailsType, Solicitor};
    use crate::domain::foundation::{
        CaseId, DivorceOrDissolution, Gender, SupplementaryCaseType, YesOrNo,
    };
    use crate::domain::template::TemplateValue;
    use chrono::NaiveDate;

    fn common() -> CommonContent {
        CommonContent::default()
    }

    fn represented() -> Applicant {
        Applicant {
            first_name: Some("John".into()),
            last_name: Some("Smith".into()),
            solicitor_represented: Some(YesOrNo::Yes),
            solicitor: Some(Solicitor {
                name: Some("Sol Name".into()),
                firm_name: Some("Sol Firm".into()),
                address: Some(AddressGlobalUk {
                    address_line1: Some("5 Law Lane".into()),
                    post_town: Some("London".into()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn basic_content_has_five_header_keys() {
        let content =
            common().basic_template_content(LanguagePreference::English, CaseKind::Divorce);
        assert_eq!(content.len(), 5);
        assert_eq!(
            content.text(keys::CONTACT_EMAIL),
            Some("contactdivorce@justice.gov.uk")
        );
        assert_eq!(
            content.text(keys::PHONE_AND_OPENING_TIMES),
            Some("Phone: 0300 303 0642 (Monday to Friday, 8am to 6pm)")
        );
    }

    #[test]
    fn dissolution_uses_civil_partnership_email() {
        let content =
            common().basic_template_content(LanguagePreference::English, CaseKind::Dissolution);
        assert_eq!(
            content.text(keys::CONTACT_EMAIL),
            Some("civilpartnership.case@justice.gov.uk")
        );
    }

    #[test]
    fn welsh_header_block() {
        let content = common().basic_template_content(LanguagePreference::Welsh, CaseKind::Divorce);
        assert_eq!(content.text(keys::DIVORCE_AND_DISSOLUTION_HEADER), Some("Ysgariad a Diddymu"));
        assert_eq!(
            content.text(keys::CONTACT_EMAIL),
            Some("ymholiadaucymraeg@justice.gov.uk")
        );
        match content.get(keys::CTSC_CONTACT_DETAILS) {
            Some(TemplateValue::Contact(details)) => {
                assert_eq!(details.phone_number, "0300 303 5171");
            }
            other => panic!("unexpected contact details: {:?}", other),
        }
    }

    #[test]
    fn vocabulary_for_judicial_separation_of_marriage() {
        let case = CaseData {
            supplementary_case_type: SupplementaryCaseType::JudicialSeparation,
            ..Default::default()
        };
        let content = common().vocabulary(&case, LanguagePreference::English);
        assert_eq!(content.flag(keys::IS_DIVORCE), Some(true));
        assert_eq!(content.flag(keys::IS_JUDICIAL_SEPARATION), Some(true));
        assert_eq!(
            content.text(keys::DIVORCE_OR_DISSOLUTION),
            Some("judicial separation application")
        );
    }

    #[test]
    fn letter_content_formats_reference_and_date() {
        let case = CaseData::default();
        let request = ContentRequest::new(
            &case,
            CaseId::new(1616591401473378).unwrap(),
            NaiveDate::from_ymd_opt(2021, 4, 28).unwrap(),
        );
        let content = common().letter_content(&request);
        assert_eq!(content.len(), 13);
        assert_eq!(content.text(keys::CCD_CASE_REFERENCE), Some("1616-5914-0147-3378"));
        assert_eq!(content.text(keys::DATE), Some("28 April 2021"));
    }

    #[test]
    fn partner_word_uses_partner_gender() {
        let mut case = CaseData::default();
        case.applicant2.gender = Some(Gender::Female);
        assert_eq!(
            common().partner(&case, Party::Applicant2, LanguagePreference::English),
            "wife"
        );

        case.divorce_or_dissolution = DivorceOrDissolution::Dissolution;
        assert_eq!(
            common().partner(&case, Party::Applicant2, LanguagePreference::Welsh),
            "partner sifil"
        );
    }

    #[test]
    fn sign_in_url_depends_on_union() {
        let mut case = CaseData::default();
        assert_eq!(
            common().sign_in_url(&case),
            "https://www.apply-divorce.service.gov.uk"
        );
        case.divorce_or_dissolution = DivorceOrDissolution::Dissolution;
        assert_eq!(
            common().sign_in_url(&case),
            "https://www.end-civil-partnership.service.gov.uk"
        );
    }

    #[test]
    fn unrepresented_party_gets_placeholders() {
        let content =
            common().solicitor_or_placeholder(&Applicant::default(), APPLICANT_1_SOLICITOR_KEYS);
        assert_eq!(content.len(), 5);
        assert_eq!(
            content.text(keys::APPLICANT_1_SOLICITOR_NAME),
            Some("Not represented")
        );
    }

    #[test]
    fn represented_party_missing_details_are_not_provided() {
        let content = common().solicitor_or_placeholder(&represented(), APPLICANT_2_SOLICITOR_KEYS);
        assert_eq!(content.text(keys::APPLICANT_2_SOLICITOR_NAME), Some("Sol Name"));
        assert_eq!(content.text(keys::APPLICANT_2_SOLICITOR_FIRM), Some("Sol Firm"));
        assert_eq!(
            content.text(keys::APPLICANT_2_SOLICITOR_EMAIL),
            Some("Not provided")
        );
    }

    #[test]
    fn recipient_care_of_solicitor() {
        let content = common().recipient(&represented());
        assert_eq!(content.text(keys::RECIPIENT_NAME), Some("Sol Name"));
        assert_eq!(content.text(keys::RECIPIENT_ADDRESS), Some("5 Law Lane\nLondon"));
    }

    #[test]
    fn confidential_recipient_address_is_null() {
        let applicant = Applicant {
            first_name: Some("Jane".into()),
            contact_details_type: ContactDetailsType::Private,
            address: Some(AddressGlobalUk {
                address_line1: Some("1 Secret Road".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let content = common().recipient(&applicant);
        assert_eq!(content.text(keys::RECIPIENT_NAME), Some("Jane"));
        assert!(content.get(keys::RECIPIENT_ADDRESS).unwrap().is_null());
    }
}
