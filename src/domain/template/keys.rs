//! Placeholder names referenced by the document templates.
//!
//! These strings are the contract with the rendering service: a key that is
//! renamed here must be renamed in every template that uses it.

// Case identity
pub const CCD_CASE_REFERENCE: &str = "ccdCaseReference";
pub const DATE: &str = "date";
pub const IS_SOLE: &str = "isSole";
pub const IS_JOINT: &str = "isJoint";
pub const IS_DIVORCE: &str = "isDivorce";
pub const IS_JUDICIAL_SEPARATION: &str = "isJudicialSeparation";

// Terminology
pub const DIVORCE_OR_DISSOLUTION: &str = "divorceOrDissolution";
pub const MARRIAGE_OR_CIVIL_PARTNERSHIP: &str = "marriageOrCivilPartnership";
pub const DIVORCE_OR_CIVIL_PARTNERSHIP_PROCESS: &str = "divorceOrCivilPartnershipProcess";
pub const DIVORCE_OR_END_CIVIL_PARTNERSHIP: &str = "divorceOrEndCivilPartnership";
pub const PARTNER: &str = "partner";

// Applicant 1
pub const APPLICANT_1_FIRST_NAME: &str = "applicant1FirstName";
pub const APPLICANT_1_MIDDLE_NAME: &str = "applicant1MiddleName";
pub const APPLICANT_1_LAST_NAME: &str = "applicant1LastName";
pub const APPLICANT_1_FULL_NAME: &str = "applicant1FullName";
pub const APPLICANT_1_ADDRESS: &str = "applicant1Address";
pub const APPLICANT_1_EMAIL: &str = "applicant1Email";
pub const APPLICANT_1_FINANCIAL_ORDER: &str = "applicant1FinancialOrder";
pub const APPLICANT_1_FINANCIAL_ORDER_FOR: &str = "applicant1FinancialOrderFor";
pub const APPLICANT_1_IS_REPRESENTED: &str = "applicant1IsRepresented";
pub const APPLICANT_1_SOLICITOR_NAME: &str = "applicant1SolicitorName";
pub const APPLICANT_1_SOLICITOR_FIRM: &str = "applicant1SolicitorFirmName";
pub const APPLICANT_1_SOLICITOR_ADDRESS: &str = "applicant1SolicitorAddress";
pub const APPLICANT_1_SOLICITOR_EMAIL: &str = "applicant1SolicitorEmail";
pub const APPLICANT_1_SOLICITOR_REFERENCE: &str = "applicant1SolicitorReference";

// Applicant 2
pub const APPLICANT_2_FIRST_NAME: &str = "applicant2FirstName";
pub const APPLICANT_2_MIDDLE_NAME: &str = "applicant2MiddleName";
pub const APPLICANT_2_LAST_NAME: &str = "applicant2LastName";
pub const APPLICANT_2_FULL_NAME: &str = "applicant2FullName";
pub const APPLICANT_2_ADDRESS: &str = "applicant2Address";
pub const APPLICANT_2_EMAIL: &str = "applicant2Email";
pub const APPLICANT_2_FINANCIAL_ORDER: &str = "applicant2FinancialOrder";
pub const APPLICANT_2_FINANCIAL_ORDER_FOR: &str = "applicant2FinancialOrderFor";
pub const APPLICANT_2_IS_REPRESENTED: &str = "applicant2IsRepresented";
pub const APPLICANT_2_SOLICITOR_NAME: &str = "applicant2SolicitorName";
pub const APPLICANT_2_SOLICITOR_FIRM: &str = "applicant2SolicitorFirmName";
pub const APPLICANT_2_SOLICITOR_ADDRESS: &str = "applicant2SolicitorAddress";
pub const APPLICANT_2_SOLICITOR_EMAIL: &str = "applicant2SolicitorEmail";
pub const APPLICANT_2_SOLICITOR_REFERENCE: &str = "applicant2SolicitorReference";
pub const APPLICANT_2_IS_OVERSEAS: &str = "applicant2IsOverseas";

// Recipient of a letter
pub const RECIPIENT_NAME: &str = "recipientName";
pub const RECIPIENT_ADDRESS: &str = "recipientAddress";
pub const SOLICITOR_NAME: &str = "solicitorName";
pub const SOLICITOR_FIRM: &str = "solicitorFirmName";
pub const SOLICITOR_ADDRESS: &str = "solicitorAddress";
pub const SOLICITOR_REFERENCE: &str = "solicitorReference";

// Application
pub const ISSUE_DATE: &str = "issueDate";
pub const REISSUE_DATE: &str = "reissueDate";
pub const IS_REISSUED: &str = "isReissued";
pub const DUE_DATE: &str = "dueDate";
pub const MARRIAGE_DATE: &str = "marriageDate";
pub const PLACE_OF_MARRIAGE: &str = "placeOfMarriage";
pub const COUNTRY_OF_MARRIAGE: &str = "countryOfMarriage";
pub const MARRIAGE_APPLICANT_1_NAME: &str = "marriageApplicant1Name";
pub const MARRIAGE_APPLICANT_2_NAME: &str = "marriageApplicant2Name";
pub const JURISDICTIONS: &str = "jurisdictions";
pub const IS_PERSONAL_SERVICE: &str = "isPersonalService";
pub const ACCESS_CODE: &str = "accessCode";
pub const SIGN_IN_URL: &str = "signInUrl";

// Common header block
pub const DIVORCE_AND_DISSOLUTION_HEADER: &str = "divorceAndDissolutionHeader";
pub const COURTS_AND_TRIBUNALS_SERVICE_HEADER: &str = "courtsAndTribunalsServiceHeader";
pub const CONTACT_EMAIL: &str = "contactEmail";
pub const PHONE_AND_OPENING_TIMES: &str = "phoneAndOpeningTimes";
pub const CTSC_CONTACT_DETAILS: &str = "ctscContactDetails";

// Conditional order
pub const COURT_DETAILS: &str = "courtDetails";
pub const DATE_OF_HEARING: &str = "dateOfHearing";
pub const TIME_OF_HEARING: &str = "timeOfHearing";
pub const BEFORE_DATE_OF_HEARING: &str = "beforeDateOfHearing";
pub const COSTS_GRANTED: &str = "costsGranted";
pub const COSTS_ORDER_INFORMATION: &str = "costsOrderInformation";
pub const CO_PRONOUNCED_DATE: &str = "coPronouncedDate";
pub const DATE_FINAL_ORDER_ELIGIBLE_FROM: &str = "dateFinalOrderEligibleFrom";
pub const IS_CLARIFICATION: &str = "isClarification";
pub const IS_AMENDED_APPLICATION: &str = "isAmendedApplication";
pub const LEGAL_ADVISER_COMMENTS: &str = "legalAdviserComments";
pub const REFUSAL_DATE: &str = "refusalDate";

// Final order
pub const FINAL_ORDER_GRANTED_DATE: &str = "finalOrderGrantedDate";
pub const DATE_RESPONDENT_CAN_APPLY_FROM: &str = "dateRespondentCanApplyFrom";
pub const DATE_FINAL_ORDER_NO_LONGER_ELIGIBLE: &str = "dateFinalOrderNoLongerEligible";

// Service applications
pub const SERVICE_APPLICATION_RECEIVED_DATE: &str = "serviceApplicationReceivedDate";
pub const SERVICE_APPLICATION_DECISION_DATE: &str = "serviceApplicationDecisionDate";
pub const SERVICE_APPLICATION_GRANTED: &str = "serviceApplicationGranted";
pub const IS_DEEMED_SERVICE: &str = "isDeemedService";
pub const IS_DISPENSED_SERVICE: &str = "isDispensedService";
pub const IS_ALTERNATIVE_SERVICE: &str = "isAlternativeService";
pub const REFUSAL_REASON: &str = "refusalReason";
pub const DEEMED_SERVICE_DATE: &str = "deemedServiceDate";
pub const LOCAL_COURT_NAME: &str = "localCourtName";
pub const LOCAL_COURT_EMAIL: &str = "localCourtEmail";
pub const CERTIFICATE_OF_SERVICE_DATE: &str = "certificateOfServiceDate";
pub const BAILIFF_SERVICE_SUCCESSFUL: &str = "bailiffServiceSuccessful";
pub const REASON_FAILED_TO_SERVE: &str = "reasonFailedToServe";

// Caseworker correspondence
pub const GENERAL_LETTER_DETAILS: &str = "generalLetterDetails";
pub const REQUEST_FOR_INFORMATION_DETAILS: &str = "requestForInformationDetails";
pub const SENT_TO_BOTH_APPLICANTS: &str = "sentToBothApplicants";

/// Shown where an optional answer was not given.
pub const NOT_PROVIDED: &str = "Not provided";
/// Shown where a party has no solicitor.
pub const NOT_REPRESENTED: &str = "Not represented";
/// Shown where a free-text reason was left blank.
pub const NOT_GIVEN: &str = "Not given";
