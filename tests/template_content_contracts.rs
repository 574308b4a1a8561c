//! Integration tests for template content mappers.
//!
//! Each document type has a fixed placeholder vocabulary: the same keys come
//! out whether the case is sparse or fully filled in, and absent data turns
//! into `null` or a named placeholder rather than an error.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use divorce_templates::application::template_content::{
    CommonContent, ContentRequest, HoldingPeriodService, MapperRegistry,
};
use divorce_templates::domain::case::{
    AlternativeServiceType, Bailiff, CaseData, ConditionalOrderCourt, GeneralLetter,
    GeneralParties, RequestForInformation, SoleParties,
};
use divorce_templates::domain::foundation::{
    CaseId, DivorceOrDissolution, LanguagePreference, Party, YesOrNo,
};
use divorce_templates::domain::template::{keys, DocumentType, TemplateContent};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn registry() -> MapperRegistry {
    MapperRegistry::standard(CommonContent::default(), HoldingPeriodService::default())
}

fn case_id() -> CaseId {
    CaseId::new(1616591401473378).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()
}

fn fixture_case() -> CaseData {
    serde_json::from_str(include_str!("fixtures/sole_divorce_case.json")).unwrap()
}

/// The fixture case with every later stage of the case filled in too.
fn fully_populated_case() -> CaseData {
    let mut case = fixture_case();
    case.due_date = NaiveDate::from_ymd_opt(2021, 9, 16);
    case.application.reissue_date = NaiveDate::from_ymd_opt(2021, 5, 3);

    let order = &mut case.conditional_order;
    order.granted_date = NaiveDate::from_ymd_opt(2022, 1, 4);
    order.decision_date = NaiveDate::from_ymd_opt(2021, 12, 1);
    order.court = Some(ConditionalOrderCourt::Birmingham);
    order.date_and_time_of_hearing =
        NaiveDateTime::parse_from_str("2022-01-04 10:30:00", "%Y-%m-%d %H:%M:%S").ok();
    order.claims_granted = Some(YesOrNo::Yes);
    order.claims_costs_order_information = Some("Respondent pays costs".into());

    case.final_order.date_final_order_eligible_from = NaiveDate::from_ymd_opt(2022, 2, 16);
    case.final_order.granted_date =
        NaiveDateTime::parse_from_str("2022-03-01 09:00:00", "%Y-%m-%d %H:%M:%S").ok();

    case.alternative_service.service_type = Some(AlternativeServiceType::Bailiff);
    case.alternative_service.service_application_granted = Some(YesOrNo::Yes);
    case.alternative_service.received_service_application_date =
        NaiveDate::from_ymd_opt(2021, 7, 1);
    case.alternative_service.bailiff = Some(Bailiff {
        local_court_name: Some("Cardiff Civil and Family Justice Centre".into()),
        local_court_email: Some("cardiff@justice.example.com".into()),
        certificate_of_service_date: NaiveDate::from_ymd_opt(2021, 7, 20),
        successful_service_date: NaiveDate::from_ymd_opt(2021, 7, 19),
        reason_failed_to_serve: None,
    });

    case.general_letter = Some(GeneralLetter {
        recipient: GeneralParties::Applicant,
        details: Some("Please send your marriage certificate.".into()),
        ..Default::default()
    });
    case.request_for_information_list
        .requests
        .push(RequestForInformation {
            sole_parties: Some(SoleParties::Applicant),
            details: Some("Provide a translation.".into()),
            ..Default::default()
        });
    case
}

fn content_for(case: &CaseData, document_type: DocumentType, recipient: Party) -> TemplateContent {
    let mapper = registry().get(document_type).unwrap();
    mapper.apply(&ContentRequest::new(case, case_id(), today()).for_recipient(recipient))
}

fn key_set(content: &TemplateContent) -> BTreeSet<String> {
    content.keys().map(str::to_string).collect()
}

// =============================================================================
// Placeholder vocabulary
// =============================================================================

#[test]
fn key_set_does_not_depend_on_optional_data() {
    let sparse = CaseData::default();
    let full = fully_populated_case();

    for document_type in DocumentType::all() {
        for recipient in [Party::Applicant1, Party::Applicant2] {
            let sparse_keys = key_set(&content_for(&sparse, *document_type, recipient));
            let full_keys = key_set(&content_for(&full, *document_type, recipient));
            assert_eq!(
                sparse_keys, full_keys,
                "{} keys differ for {}",
                document_type, recipient
            );
        }
    }
}

const LETTER_KEYS: &[&str] = &[
    keys::DIVORCE_AND_DISSOLUTION_HEADER,
    keys::COURTS_AND_TRIBUNALS_SERVICE_HEADER,
    keys::CONTACT_EMAIL,
    keys::PHONE_AND_OPENING_TIMES,
    keys::CTSC_CONTACT_DETAILS,
    keys::IS_DIVORCE,
    keys::IS_JUDICIAL_SEPARATION,
    keys::DIVORCE_OR_DISSOLUTION,
    keys::MARRIAGE_OR_CIVIL_PARTNERSHIP,
    keys::DIVORCE_OR_CIVIL_PARTNERSHIP_PROCESS,
    keys::DIVORCE_OR_END_CIVIL_PARTNERSHIP,
    keys::CCD_CASE_REFERENCE,
    keys::DATE,
];

fn expected(letter: bool, extra: &[&str]) -> BTreeSet<String> {
    let base: &[&str] = if letter { LETTER_KEYS } else { &[] };
    base.iter().chain(extra).map(|key| key.to_string()).collect()
}

const ADDRESSED: &[&str] = &[
    keys::RECIPIENT_NAME,
    keys::RECIPIENT_ADDRESS,
    keys::APPLICANT_1_FULL_NAME,
    keys::APPLICANT_2_FULL_NAME,
];

const APPLICATION_KEYS: &[&str] = &[
    keys::IS_DIVORCE,
    keys::IS_JUDICIAL_SEPARATION,
    keys::DIVORCE_OR_DISSOLUTION,
    keys::MARRIAGE_OR_CIVIL_PARTNERSHIP,
    keys::DIVORCE_OR_CIVIL_PARTNERSHIP_PROCESS,
    keys::DIVORCE_OR_END_CIVIL_PARTNERSHIP,
    keys::CCD_CASE_REFERENCE,
    keys::IS_SOLE,
    keys::IS_JOINT,
    keys::ISSUE_DATE,
    keys::APPLICANT_1_FIRST_NAME,
    keys::APPLICANT_1_MIDDLE_NAME,
    keys::APPLICANT_1_LAST_NAME,
    keys::APPLICANT_1_FULL_NAME,
    keys::APPLICANT_1_ADDRESS,
    keys::APPLICANT_1_EMAIL,
    keys::APPLICANT_1_IS_REPRESENTED,
    keys::APPLICANT_2_FIRST_NAME,
    keys::APPLICANT_2_MIDDLE_NAME,
    keys::APPLICANT_2_LAST_NAME,
    keys::APPLICANT_2_FULL_NAME,
    keys::APPLICANT_2_ADDRESS,
    keys::APPLICANT_2_EMAIL,
    keys::APPLICANT_2_IS_REPRESENTED,
    keys::APPLICANT_1_SOLICITOR_NAME,
    keys::APPLICANT_1_SOLICITOR_FIRM,
    keys::APPLICANT_1_SOLICITOR_ADDRESS,
    keys::APPLICANT_1_SOLICITOR_EMAIL,
    keys::APPLICANT_1_SOLICITOR_REFERENCE,
    keys::APPLICANT_2_SOLICITOR_NAME,
    keys::APPLICANT_2_SOLICITOR_FIRM,
    keys::APPLICANT_2_SOLICITOR_ADDRESS,
    keys::APPLICANT_2_SOLICITOR_EMAIL,
    keys::APPLICANT_2_SOLICITOR_REFERENCE,
    keys::APPLICANT_1_FINANCIAL_ORDER,
    keys::APPLICANT_1_FINANCIAL_ORDER_FOR,
    keys::MARRIAGE_DATE,
    keys::PLACE_OF_MARRIAGE,
    keys::COUNTRY_OF_MARRIAGE,
    keys::MARRIAGE_APPLICANT_1_NAME,
    keys::MARRIAGE_APPLICANT_2_NAME,
    keys::JURISDICTIONS,
];

fn addressed_letter(extra: &[&str]) -> BTreeSet<String> {
    LETTER_KEYS
        .iter()
        .chain(ADDRESSED)
        .chain(extra)
        .map(|key| key.to_string())
        .collect()
}

/// The full placeholder vocabulary of each document.
fn expected_keys(document_type: DocumentType) -> BTreeSet<String> {
    match document_type {
        DocumentType::ApplicationSole => expected(false, APPLICATION_KEYS),
        DocumentType::ApplicationJoint => {
            let mut joint = expected(false, APPLICATION_KEYS);
            joint.insert(keys::APPLICANT_2_FINANCIAL_ORDER.to_string());
            joint.insert(keys::APPLICANT_2_FINANCIAL_ORDER_FOR.to_string());
            joint
        }
        DocumentType::NoticeOfProceedingsApplicant => addressed_letter(&[
            keys::IS_SOLE,
            keys::ISSUE_DATE,
            keys::DUE_DATE,
            keys::APPLICANT_2_IS_OVERSEAS,
            keys::IS_PERSONAL_SERVICE,
            keys::PARTNER,
            keys::SIGN_IN_URL,
        ]),
        DocumentType::NoticeOfProceedingsSolicitor => expected(
            true,
            &[
                keys::SOLICITOR_NAME,
                keys::SOLICITOR_FIRM,
                keys::SOLICITOR_ADDRESS,
                keys::SOLICITOR_REFERENCE,
                keys::APPLICANT_1_FULL_NAME,
                keys::APPLICANT_2_FULL_NAME,
                keys::IS_SOLE,
                keys::ISSUE_DATE,
                keys::DUE_DATE,
            ],
        ),
        DocumentType::RespondentAosInvitation => addressed_letter(&[
            keys::IS_SOLE,
            keys::ISSUE_DATE,
            keys::IS_REISSUED,
            keys::REISSUE_DATE,
            keys::DUE_DATE,
            keys::ACCESS_CODE,
            keys::SIGN_IN_URL,
            keys::PARTNER,
        ]),
        DocumentType::AosOverdueLetter => addressed_letter(&[
            keys::ISSUE_DATE,
            keys::DUE_DATE,
            keys::PARTNER,
            keys::APPLICANT_2_IS_OVERSEAS,
            keys::IS_DEEMED_SERVICE,
            keys::IS_ALTERNATIVE_SERVICE,
        ]),
        DocumentType::SwitchToSoleConditionalOrder => addressed_letter(&[keys::PARTNER]),
        DocumentType::CertificateOfEntitlement => addressed_letter(&[
            keys::IS_SOLE,
            keys::COURT_DETAILS,
            keys::DATE_OF_HEARING,
            keys::TIME_OF_HEARING,
            keys::BEFORE_DATE_OF_HEARING,
            keys::COSTS_GRANTED,
            keys::COSTS_ORDER_INFORMATION,
            keys::PARTNER,
        ]),
        DocumentType::ConditionalOrderPronounced => addressed_letter(&[
            keys::IS_SOLE,
            keys::CO_PRONOUNCED_DATE,
            keys::COURT_DETAILS,
            keys::DATE_FINAL_ORDER_ELIGIBLE_FROM,
            keys::COSTS_GRANTED,
            keys::MARRIAGE_DATE,
            keys::PARTNER,
        ]),
        DocumentType::ConditionalOrderRefusal => addressed_letter(&[
            keys::IS_SOLE,
            keys::IS_CLARIFICATION,
            keys::IS_AMENDED_APPLICATION,
            keys::LEGAL_ADVISER_COMMENTS,
            keys::REFUSAL_DATE,
            keys::PARTNER,
        ]),
        DocumentType::FinalOrderGranted => addressed_letter(&[
            keys::IS_SOLE,
            keys::FINAL_ORDER_GRANTED_DATE,
            keys::CO_PRONOUNCED_DATE,
            keys::MARRIAGE_DATE,
            keys::PLACE_OF_MARRIAGE,
        ]),
        DocumentType::FinalOrderCanApply => addressed_letter(&[
            keys::IS_SOLE,
            keys::DATE_FINAL_ORDER_ELIGIBLE_FROM,
            keys::DATE_RESPONDENT_CAN_APPLY_FROM,
            keys::DATE_FINAL_ORDER_NO_LONGER_ELIGIBLE,
            keys::SIGN_IN_URL,
            keys::PARTNER,
        ]),
        DocumentType::ServiceOrder => addressed_letter(&[
            keys::SERVICE_APPLICATION_RECEIVED_DATE,
            keys::SERVICE_APPLICATION_DECISION_DATE,
            keys::SERVICE_APPLICATION_GRANTED,
            keys::IS_DEEMED_SERVICE,
            keys::IS_DISPENSED_SERVICE,
            keys::IS_ALTERNATIVE_SERVICE,
            keys::REFUSAL_REASON,
            keys::DEEMED_SERVICE_DATE,
            keys::PARTNER,
        ]),
        DocumentType::BailiffServiceOutcome => addressed_letter(&[
            keys::LOCAL_COURT_NAME,
            keys::LOCAL_COURT_EMAIL,
            keys::CERTIFICATE_OF_SERVICE_DATE,
            keys::BAILIFF_SERVICE_SUCCESSFUL,
            keys::REASON_FAILED_TO_SERVE,
            keys::PARTNER,
        ]),
        DocumentType::GeneralLetter => {
            addressed_letter(&[keys::IS_SOLE, keys::GENERAL_LETTER_DETAILS])
        }
        DocumentType::RequestForInformation => addressed_letter(&[
            keys::IS_JOINT,
            keys::REQUEST_FOR_INFORMATION_DETAILS,
            keys::SENT_TO_BOTH_APPLICANTS,
        ]),
        DocumentType::Coversheet => expected(
            false,
            &[
                keys::CCD_CASE_REFERENCE,
                keys::DATE,
                keys::RECIPIENT_NAME,
                keys::RECIPIENT_ADDRESS,
            ],
        ),
    }
}

#[test]
fn every_document_key_set_is_pinned() {
    let cases = [CaseData::default(), fixture_case(), fully_populated_case()];

    for document_type in DocumentType::all() {
        let want = expected_keys(*document_type);
        for case in &cases {
            for recipient in [Party::Applicant1, Party::Applicant2] {
                let got = key_set(&content_for(case, *document_type, recipient));
                assert_eq!(
                    got,
                    want,
                    "{} for {}: unexpected {:?}, missing {:?}",
                    document_type,
                    recipient,
                    got.difference(&want).collect::<Vec<_>>(),
                    want.difference(&got).collect::<Vec<_>>()
                );
            }
        }
    }
}

#[test]
fn third_party_letters_keep_the_addressed_key_set() {
    let mut case = fixture_case();
    case.general_letter = Some(GeneralLetter {
        recipient: GeneralParties::Other,
        ..Default::default()
    });
    case.request_for_information_list
        .requests
        .push(RequestForInformation {
            sole_parties: Some(SoleParties::Other),
            ..Default::default()
        });

    for document_type in [DocumentType::GeneralLetter, DocumentType::RequestForInformation] {
        let content = content_for(&case, document_type, Party::Applicant1);
        assert_eq!(key_set(&content), expected_keys(document_type), "{}", document_type);
    }
}

#[test]
fn solicitor_notice_for_represented_party() {
    let content = content_for(
        &fixture_case(),
        DocumentType::NoticeOfProceedingsSolicitor,
        Party::Applicant2,
    );
    assert_eq!(content.text(keys::SOLICITOR_FIRM), Some("Jones and Co"));
    assert_eq!(content.text(keys::SOLICITOR_REFERENCE), Some("JC-1234"));
}

#[test]
fn every_document_carries_some_content() {
    let case = fixture_case();
    for document_type in DocumentType::all() {
        let content = content_for(&case, *document_type, Party::Applicant1);
        assert!(!content.is_empty(), "{} produced no content", document_type);
    }
}

#[test]
fn letters_carry_formatted_case_reference() {
    let case = fixture_case();
    for document_type in DocumentType::all() {
        let content = content_for(&case, *document_type, Party::Applicant1);
        if let Some(reference) = content.text(keys::CCD_CASE_REFERENCE) {
            assert_eq!(reference, "1616-5914-0147-3378", "{}", document_type);
        }
    }
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn sole_divorce_application_in_english() {
    let content = content_for(&fixture_case(), DocumentType::ApplicationSole, Party::Applicant1);

    assert_eq!(content.text(keys::ISSUE_DATE), Some("28 April 2021"));
    assert_eq!(content.text(keys::DIVORCE_OR_DISSOLUTION), Some("divorce application"));
    assert_eq!(content.text(keys::MARRIAGE_OR_CIVIL_PARTNERSHIP), Some("marriage"));
    assert_eq!(content.text(keys::APPLICANT_1_FULL_NAME), Some("John Smith"));
    assert_eq!(content.flag(keys::IS_SOLE), Some(true));
}

#[test]
fn welsh_preference_switches_vocabulary() {
    let mut case = fixture_case();
    case.applicant1.language_preference_welsh = Some(YesOrNo::Yes);

    let content = content_for(&case, DocumentType::ApplicationSole, Party::Applicant1);

    assert_eq!(content.text(keys::MARRIAGE_OR_CIVIL_PARTNERSHIP), Some("priodas"));
    assert_eq!(content.text(keys::ISSUE_DATE), Some("28 Ebrill 2021"));
}

#[test]
fn dissolution_uses_civil_partnership_vocabulary() {
    let mut case = fixture_case();
    case.divorce_or_dissolution = DivorceOrDissolution::Dissolution;

    let content = content_for(&case, DocumentType::ApplicationSole, Party::Applicant1);

    assert_eq!(content.text(keys::MARRIAGE_OR_CIVIL_PARTNERSHIP), Some("civil partnership"));
    assert_eq!(content.flag(keys::IS_DIVORCE), Some(false));
}

// =============================================================================
// Absent data
// =============================================================================

#[test]
fn unrepresented_applicant_gets_not_represented() {
    let content = content_for(&fixture_case(), DocumentType::ApplicationSole, Party::Applicant1);
    assert_eq!(content.text(keys::APPLICANT_1_SOLICITOR_NAME), Some("Not represented"));
}

#[test]
fn represented_respondent_is_written_to_care_of_solicitor() {
    let content = content_for(&fixture_case(), DocumentType::Coversheet, Party::Applicant2);

    assert_eq!(content.text(keys::RECIPIENT_NAME), Some("Sol Jones"));
    assert_eq!(
        content.text(keys::RECIPIENT_ADDRESS),
        Some("5 Chancery Lane\nLondon\nWC2A 1AA")
    );
}

#[test]
fn solicitor_notice_for_unrepresented_party() {
    let content = content_for(
        &fixture_case(),
        DocumentType::NoticeOfProceedingsSolicitor,
        Party::Applicant1,
    );
    assert_eq!(content.text(keys::SOLICITOR_NAME), Some("Not represented"));
}

#[test]
fn empty_case_maps_without_panicking() {
    let case = CaseData::default();
    for document_type in DocumentType::all() {
        let content = content_for(&case, *document_type, Party::Applicant1);
        if let Some(value) = content.get(keys::ISSUE_DATE) {
            assert!(value.is_null(), "{}", document_type);
        }
    }
}

#[test]
fn mapping_leaves_case_unchanged() {
    let case = fully_populated_case();
    let before = case.clone();
    for document_type in DocumentType::all() {
        let _ = content_for(&case, *document_type, Party::Applicant2);
    }
    assert_eq!(case, before);
}

#[test]
fn content_serializes_to_json_object() {
    let content = content_for(&fixture_case(), DocumentType::ApplicationSole, Party::Applicant1);
    let json = content.to_json().unwrap();

    assert_eq!(json["issueDate"], "28 April 2021");
    assert!(json.as_object().unwrap().len() == content.len());
}

#[test]
fn general_letter_language_is_not_the_request_recipient() {
    let mut case = fixture_case();
    case.applicant2.language_preference_welsh = Some(YesOrNo::Yes);
    case.general_letter = Some(GeneralLetter {
        recipient: GeneralParties::Respondent,
        ..Default::default()
    });

    let mapper = registry().get(DocumentType::GeneralLetter).unwrap();
    let request = ContentRequest::new(&case, case_id(), today());

    assert_eq!(request.recipient, Party::Applicant1);
    assert_eq!(mapper.language(&request), LanguagePreference::Welsh);
}
