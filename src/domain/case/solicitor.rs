//! Legal representative of an applicant.

use serde::{Deserialize, Serialize};

use super::AddressGlobalUk;

/// Organisation the solicitor is registered under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganisationPolicy {
    pub organisation_id: Option<String>,
    pub organisation_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Solicitor {
    pub name: Option<String>,
    pub firm_name: Option<String>,
    pub address: Option<AddressGlobalUk>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub reference: Option<String>,
    pub organisation_policy: Option<OrganisationPolicy>,
}

impl Solicitor {
    /// Firm name, preferring the registered organisation's name.
    pub fn firm(&self) -> Option<&str> {
        self.organisation_policy
            .as_ref()
            .and_then(|policy| policy.organisation_name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .or_else(|| {
                self.firm_name
                    .as_deref()
                    .filter(|name| !name.trim().is_empty())
            })
    }

    /// Address as newline-separated lines, if one was given.
    pub fn address_lines(&self) -> Option<String> {
        self.address
            .as_ref()
            .map(AddressGlobalUk::to_lines)
            .filter(|lines| !lines.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn firm_prefers_organisation_name() {
        let solicitor = Solicitor {
            firm_name: Some("Typed Firm".into()),
            organisation_policy: Some(OrganisationPolicy {
                organisation_id: Some("ORG1".into()),
                organisation_name: Some("Registered Firm LLP".into()),
            }),
            ..Default::default()
        };
        assert_eq!(solicitor.firm(), Some("Registered Firm LLP"));
    }

    #[test]
    fn firm_falls_back_to_typed_name() {
        let solicitor = Solicitor {
            firm_name: Some("Typed Firm".into()),
            ..Default::default()
        };
        assert_eq!(solicitor.firm(), Some("Typed Firm"));
    }

    #[test]
    fn blank_organisation_name_falls_back_to_typed_name() {
        let solicitor = Solicitor {
            firm_name: Some("Typed Firm".into()),
            organisation_policy: Some(OrganisationPolicy {
                organisation_id: Some("ORG1".into()),
                organisation_name: Some("  ".into()),
            }),
            ..Default::default()
        };
        assert_eq!(solicitor.firm(), Some("Typed Firm"));
    }

    #[test]
    fn blank_address_is_none() {
        let solicitor = Solicitor {
            address: Some(AddressGlobalUk::default()),
            ..Default::default()
        };
        assert_eq!(solicitor.address_lines(), None);
    }
}
