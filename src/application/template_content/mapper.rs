//! The template content mapper contract.

use chrono::NaiveDate;

use crate::domain::case::{Applicant, CaseData};
use crate::domain::foundation::{CaseId, LanguagePreference, Party};
use crate::domain::template::{terminology, DocumentType, TemplateContent, Terminology};

/// Input to a mapper: one case, seen from one recipient, on one day.
#[derive(Debug, Clone, Copy)]
pub struct ContentRequest<'a> {
    pub case_data: &'a CaseData,
    pub case_id: CaseId,
    /// Party the document is addressed to.
    pub recipient: Party,
    /// Date the document is produced on.
    pub today: NaiveDate,
}

impl<'a> ContentRequest<'a> {
    /// Request addressed to applicant 1.
    pub fn new(case_data: &'a CaseData, case_id: CaseId, today: NaiveDate) -> Self {
        Self {
            case_data,
            case_id,
            recipient: Party::Applicant1,
            today,
        }
    }

    pub fn for_recipient(self, recipient: Party) -> Self {
        Self { recipient, ..self }
    }

    pub fn recipient_applicant(&self) -> &'a Applicant {
        self.case_data.applicant(self.recipient)
    }

    /// The party on the other side from the recipient.
    pub fn partner(&self) -> Party {
        self.recipient.other()
    }

    /// Language the recipient asked to be written to in.
    pub fn language(&self) -> LanguagePreference {
        self.recipient_applicant().language_preference()
    }

    pub fn terminology(&self) -> Terminology {
        terminology(self.language(), self.case_data.case_kind())
    }
}

/// Projects a case into the placeholders of one document template.
///
/// Implementations are pure: the same request always yields the same
/// content, and absent case data becomes `Null` or a placeholder literal
/// rather than an error. The key set does not depend on which optional
/// fields are present.
pub trait TemplateContentMapper: Send + Sync {
    fn document_type(&self) -> DocumentType;

    fn apply(&self, request: &ContentRequest<'_>) -> TemplateContent;

    /// Language of the rendered document. Defaults to the recipient's.
    fn language(&self, request: &ContentRequest<'_>) -> LanguagePreference {
        request.language()
    }
}
