//! One party to the case as captured on the application.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{is_yes, Gender, LanguagePreference, YesOrNo};

use super::{AddressGlobalUk, Solicitor};

/// Whether contact details may be shared with the other party.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactDetailsType {
    #[default]
    Public,
    Private,
}

/// Who a financial order is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FinancialOrderFor {
    Applicant,
    Children,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Applicant {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub address: Option<AddressGlobalUk>,
    pub contact_details_type: ContactDetailsType,
    pub email: Option<String>,
    pub language_preference_welsh: Option<YesOrNo>,
    pub solicitor_represented: Option<YesOrNo>,
    pub solicitor: Option<Solicitor>,
    pub financial_order: Option<YesOrNo>,
    pub financial_order_for: BTreeSet<FinancialOrderFor>,
    pub offline: Option<YesOrNo>,
}

impl Applicant {
    /// First, middle and last names joined by single spaces.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn language_preference(&self) -> LanguagePreference {
        LanguagePreference::from_welsh_answer(self.language_preference_welsh)
    }

    /// Represented means the flag is set and solicitor details exist.
    pub fn is_represented(&self) -> bool {
        is_yes(self.solicitor_represented) && self.solicitor.is_some()
    }

    /// The solicitor, only when the applicant is represented.
    pub fn representing_solicitor(&self) -> Option<&Solicitor> {
        if self.is_represented() {
            self.solicitor.as_ref()
        } else {
            None
        }
    }

    pub fn is_confidential(&self) -> bool {
        matches!(self.contact_details_type, ContactDetailsType::Private)
    }

    pub fn applied_for_financial_order(&self) -> bool {
        is_yes(self.financial_order)
    }

    /// Home address lines, withheld when contact details are private.
    pub fn home_address_lines(&self) -> Option<String> {
        if self.is_confidential() {
            return None;
        }
        self.address
            .as_ref()
            .map(AddressGlobalUk::to_lines)
            .filter(|lines| !lines.is_empty())
    }

    /// Where post for this applicant should go.
    ///
    /// The solicitor's address when represented, otherwise the home address
    /// unless it is confidential.
    pub fn correspondence_address(&self) -> Option<String> {
        match self.representing_solicitor() {
            Some(solicitor) => solicitor.address_lines(),
            None => self.home_address_lines(),
        }
    }

    /// True when the home address is outside the UK.
    pub fn is_based_overseas(&self) -> bool {
        self.address
            .as_ref()
            .map(AddressGlobalUk::is_overseas)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> AddressGlobalUk {
        AddressGlobalUk {
            address_line1: Some("1 High Street".into()),
            post_town: Some("Cardiff".into()),
            postcode: Some("CF10 1AA".into()),
            ..Default::default()
        }
    }

    fn applicant() -> Applicant {
        Applicant {
            first_name: Some("John".into()),
            middle_name: Some("".into()),
            last_name: Some("Smith".into()),
            address: Some(home()),
            ..Default::default()
        }
    }

    #[test]
    fn full_name_skips_blank_middle_name() {
        assert_eq!(applicant().full_name(), "John Smith");
    }

    #[test]
    fn full_name_includes_middle_name() {
        let applicant = Applicant {
            middle_name: Some("Paul".into()),
            ..applicant()
        };
        assert_eq!(applicant.full_name(), "John Paul Smith");
    }

    #[test]
    fn missing_names_give_empty_full_name() {
        assert_eq!(Applicant::default().full_name(), "");
    }

    #[test]
    fn flag_without_solicitor_is_not_represented() {
        let applicant = Applicant {
            solicitor_represented: Some(YesOrNo::Yes),
            ..applicant()
        };
        assert!(!applicant.is_represented());
        assert!(applicant.representing_solicitor().is_none());
    }

    #[test]
    fn correspondence_goes_to_solicitor_when_represented() {
        let applicant = Applicant {
            solicitor_represented: Some(YesOrNo::Yes),
            solicitor: Some(Solicitor {
                address: Some(AddressGlobalUk {
                    address_line1: Some("5 Law Lane".into()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..applicant()
        };
        assert_eq!(applicant.correspondence_address().as_deref(), Some("5 Law Lane"));
    }

    #[test]
    fn confidential_home_address_is_withheld() {
        let applicant = Applicant {
            contact_details_type: ContactDetailsType::Private,
            ..applicant()
        };
        assert_eq!(applicant.correspondence_address(), None);
        assert_eq!(applicant.home_address_lines(), None);
    }

    #[test]
    fn deserializes_from_platform_json() {
        let json = r#"{
            "firstName": "Jane",
            "lastName": "Doe",
            "gender": "female",
            "languagePreferenceWelsh": "Yes",
            "contactDetailsType": "private",
            "financialOrderFor": ["children", "applicant"]
        }"#;
        let applicant: Applicant = serde_json::from_str(json).unwrap();
        assert_eq!(applicant.full_name(), "Jane Doe");
        assert_eq!(applicant.language_preference(), LanguagePreference::Welsh);
        assert!(applicant.is_confidential());
        assert_eq!(applicant.financial_order_for.len(), 2);
    }
}
