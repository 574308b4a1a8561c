//! Application metadata: dates, marriage details, jurisdiction and service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{LanguagePreference, YesOrNo};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarriageDetails {
    pub applicant1_name: Option<String>,
    pub applicant2_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub place_of_marriage: Option<String>,
    pub country_of_marriage: Option<String>,
    pub married_in_uk: Option<YesOrNo>,
}

/// How the application is served on the respondent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceMethod {
    #[default]
    CourtService,
    PersonalService,
    SolicitorService,
}

/// Legal connections giving the courts of England and Wales jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JurisdictionConnection {
    /// Both parties habitually resident.
    A,
    /// Both last habitually resident, one still resident.
    B,
    /// Respondent habitually resident.
    C,
    /// Applicant resident for twelve months.
    D,
    /// Applicant domiciled and resident for six months.
    E,
    /// Both parties domiciled.
    F,
    /// Applicant domiciled.
    G,
    /// Respondent domiciled.
    H,
    /// Residual jurisdiction.
    I,
}

impl JurisdictionConnection {
    /// Describes the connection for the applicant-facing documents.
    ///
    /// Sole cases refer to "the applicant" and "the respondent"; joint cases
    /// to "applicant 1" and "applicant 2".
    pub fn description(&self, language: LanguagePreference, is_sole: bool) -> String {
        let (first, second) = match (language, is_sole) {
            (LanguagePreference::English, true) => ("the applicant", "the respondent"),
            (LanguagePreference::English, false) => ("applicant 1", "applicant 2"),
            (LanguagePreference::Welsh, true) => ("y ceisydd", "yr atebydd"),
            (LanguagePreference::Welsh, false) => ("ceisydd 1", "ceisydd 2"),
        };
        let template = match language {
            LanguagePreference::English => self.english_template(),
            LanguagePreference::Welsh => self.welsh_template(),
        };
        capitalise_first(&template.replace("{a1}", first).replace("{a2}", second))
    }

    fn english_template(&self) -> &'static str {
        match self {
            Self::A => "{a1} and {a2} are habitually resident in England and Wales.",
            Self::B => "{a1} and {a2} were last habitually resident in England and Wales and one of them still lives there.",
            Self::C => "{a2} is habitually resident in England and Wales.",
            Self::D => "{a1} is habitually resident in England and Wales and has lived there for at least one year immediately before making this application.",
            Self::E => "{a1} is domiciled and habitually resident in England and Wales and has lived there for at least six months immediately before making this application.",
            Self::F => "{a1} and {a2} are both domiciled in England and Wales.",
            Self::G => "{a1} is domiciled in England and Wales.",
            Self::H => "{a2} is domiciled in England and Wales.",
            Self::I => "The court has residual jurisdiction.",
        }
    }

    fn welsh_template(&self) -> &'static str {
        match self {
            Self::A => "Mae {a1} a {a2} yn preswylio’n arferol yng Nghymru a Lloegr.",
            Self::B => "Roedd {a1} a {a2} yn preswylio’n arferol ddiwethaf yng Nghymru a Lloegr ac mae un ohonynt yn dal i fyw yno.",
            Self::C => "Mae {a2} yn preswylio’n arferol yng Nghymru a Lloegr.",
            Self::D => "Mae {a1} yn preswylio’n arferol yng Nghymru a Lloegr ac wedi byw yno am o leiaf blwyddyn yn union cyn gwneud y cais hwn.",
            Self::E => "Mae domisil {a1} yng Nghymru a Lloegr, mae’n preswylio’n arferol yno ac wedi byw yno am o leiaf chwe mis yn union cyn gwneud y cais hwn.",
            Self::F => "Mae domisil {a1} a {a2} yng Nghymru a Lloegr.",
            Self::G => "Mae domisil {a1} yng Nghymru a Lloegr.",
            Self::H => "Mae domisil {a2} yng Nghymru a Lloegr.",
            Self::I => "Mae gan y llys awdurdodaeth weddilliol.",
        }
    }
}

fn capitalise_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Jurisdiction {
    pub connections: BTreeSet<JurisdictionConnection>,
}

impl Jurisdiction {
    /// Descriptions of every connection, in statutory order.
    pub fn descriptions(&self, language: LanguagePreference, is_sole: bool) -> Vec<String> {
        self.connections
            .iter()
            .map(|connection| connection.description(language, is_sole))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub issue_date: Option<NaiveDate>,
    pub date_submitted: Option<NaiveDate>,
    pub reissue_date: Option<NaiveDate>,
    pub marriage_details: MarriageDetails,
    pub jurisdiction: Jurisdiction,
    pub service_method: ServiceMethod,
}

impl Application {
    pub fn is_personal_service(&self) -> bool {
        matches!(self.service_method, ServiceMethod::PersonalService)
    }

    pub fn is_reissued(&self) -> bool {
        self.reissue_date.is_some()
    }
}
