//! Template identifiers and generated document names.

use chrono::NaiveDate;

use crate::domain::foundation::{CaseId, LanguagePreference};
use crate::domain::template::DocumentType;

/// Resolves which template file renders a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    prefix: String,
}

impl TemplateCatalog {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// `{prefix}-{stem}-{ENG|WEL}.docx`
    pub fn template_id(&self, document_type: DocumentType, language: LanguagePreference) -> String {
        format!(
            "{}-{}-{}.docx",
            self.prefix,
            document_type.template_stem(),
            language.template_code()
        )
    }

    /// `{name prefix}-{case id}-{yyyy-mm-dd}`
    pub fn document_name(
        &self,
        document_type: DocumentType,
        case_id: CaseId,
        date: NaiveDate,
    ) -> String {
        format!(
            "{}-{}-{}",
            document_type.name_prefix(),
            case_id,
            date.format("%Y-%m-%d")
        )
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new("FL-NFD")
    }
}
