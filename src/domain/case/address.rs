//! Postal address as captured by the case forms.

use serde::{Deserialize, Serialize};

const UK_COUNTRY_NAMES: &[&str] = &["uk", "united kingdom", "england", "wales", "great britain"];

/// A UK or international postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressGlobalUk {
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub post_town: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
}

impl AddressGlobalUk {
    /// Joins the non-blank parts of the address with newlines.
    pub fn to_lines(&self) -> String {
        [
            &self.address_line1,
            &self.address_line2,
            &self.address_line3,
            &self.post_town,
            &self.county,
            &self.postcode,
            &self.country,
        ]
        .iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
    }

    /// True when no part of the address has been filled in.
    pub fn is_blank(&self) -> bool {
        self.to_lines().is_empty()
    }

    /// True when a country outside the UK has been given.
    pub fn is_overseas(&self) -> bool {
        match self.country.as_deref().map(str::trim) {
            Some(country) if !country.is_empty() => {
                !UK_COUNTRY_NAMES.contains(&country.to_lowercase().as_str())
            }
            _ => false,
        }
    }
}
