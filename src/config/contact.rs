//! Courts and Tribunals Service Centre contact configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Contact details printed on letters, in English and Welsh
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    #[serde(default = "default_centre_name")]
    pub centre_name: String,

    #[serde(default = "default_centre_name_welsh")]
    pub centre_name_welsh: String,

    #[serde(default = "default_service_centre")]
    pub service_centre: String,

    #[serde(default = "default_service_centre_welsh")]
    pub service_centre_welsh: String,

    #[serde(default = "default_po_box")]
    pub po_box: String,

    #[serde(default = "default_town")]
    pub town: String,

    #[serde(default = "default_postcode")]
    pub postcode: String,

    /// Contact email for divorce and judicial separation cases
    #[serde(default = "default_email")]
    pub email: String,

    /// Contact email for civil partnership cases
    #[serde(default = "default_dissolution_email")]
    pub dissolution_email: String,

    /// Contact email for Welsh speakers
    #[serde(default = "default_welsh_email")]
    pub welsh_email: String,

    #[serde(default = "default_phone")]
    pub phone: String,

    #[serde(default = "default_welsh_phone")]
    pub welsh_phone: String,

    #[serde(default = "default_opening_hours")]
    pub opening_hours: String,

    #[serde(default = "default_opening_hours_welsh")]
    pub opening_hours_welsh: String,

    /// Online service for marriages
    #[serde(default = "default_divorce_sign_in_url")]
    pub divorce_sign_in_url: String,

    /// Online service for civil partnerships
    #[serde(default = "default_dissolution_sign_in_url")]
    pub dissolution_sign_in_url: String,
}

fn default_centre_name() -> String {
    "HMCTS Digital Divorce and Dissolution".to_string()
}

fn default_centre_name_welsh() -> String {
    "GLlTEF Ysgariad a Diddymu Digidol".to_string()
}

fn default_service_centre() -> String {
    "Courts and Tribunals Service Centre".to_string()
}

fn default_service_centre_welsh() -> String {
    "Canolfan Gwasanaethau Llysoedd a Thribiwnlysoedd".to_string()
}

fn default_po_box() -> String {
    "PO Box 13226".to_string()
}

fn default_town() -> String {
    "Harlow".to_string()
}

fn default_postcode() -> String {
    "CM20 9UG".to_string()
}

fn default_email() -> String {
    "contactdivorce@justice.gov.uk".to_string()
}

fn default_dissolution_email() -> String {
    "civilpartnership.case@justice.gov.uk".to_string()
}

fn default_welsh_email() -> String {
    "ymholiadaucymraeg@justice.gov.uk".to_string()
}

fn default_phone() -> String {
    "0300 303 0642".to_string()
}

fn default_welsh_phone() -> String {
    "0300 303 5171".to_string()
}

fn default_opening_hours() -> String {
    "Monday to Friday, 8am to 6pm".to_string()
}

fn default_opening_hours_welsh() -> String {
    "dydd Llun i ddydd Gwener, 9am i 5pm".to_string()
}

fn default_divorce_sign_in_url() -> String {
    "https://www.apply-divorce.service.gov.uk".to_string()
}

fn default_dissolution_sign_in_url() -> String {
    "https://www.end-civil-partnership.service.gov.uk".to_string()
}

impl ContactConfig {
    /// Validate contact configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, email) in [
            ("email", &self.email),
            ("dissolution_email", &self.dissolution_email),
            ("welsh_email", &self.welsh_email),
        ] {
            if !email.contains('@') {
                return Err(ValidationError::InvalidEmail(name));
            }
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::MissingRequired("contact.phone"));
        }
        if self.welsh_phone.trim().is_empty() {
            return Err(ValidationError::MissingRequired("contact.welsh_phone"));
        }
        for (name, url) in [
            ("divorce_sign_in_url", &self.divorce_sign_in_url),
            ("dissolution_sign_in_url", &self.dissolution_sign_in_url),
        ] {
            if !url.starts_with("https://") {
                return Err(ValidationError::InvalidUrl(name));
            }
        }
        Ok(())
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            centre_name: default_centre_name(),
            centre_name_welsh: default_centre_name_welsh(),
            service_centre: default_service_centre(),
            service_centre_welsh: default_service_centre_welsh(),
            po_box: default_po_box(),
            town: default_town(),
            postcode: default_postcode(),
            email: default_email(),
            dissolution_email: default_dissolution_email(),
            welsh_email: default_welsh_email(),
            phone: default_phone(),
            welsh_phone: default_welsh_phone(),
            opening_hours: default_opening_hours(),
            opening_hours_welsh: default_opening_hours_welsh(),
            divorce_sign_in_url: default_divorce_sign_in_url(),
            dissolution_sign_in_url: default_dissolution_sign_in_url(),
        }
    }
}
