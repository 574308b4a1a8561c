//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, formatting and error types
//! that form the vocabulary of the case domain.

mod case_type;
mod date_format;
mod errors;
mod ids;
mod language;
mod party;
mod timestamp;
mod yes_or_no;

pub use case_type::{ApplicationType, CaseKind, DivorceOrDissolution, SupplementaryCaseType};
pub use date_format::{format_date, format_optional_date, format_time};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CaseId, DocumentId};
pub use language::LanguagePreference;
pub use party::{Gender, Party};
pub use timestamp::Timestamp;
pub use yes_or_no::{is_yes, YesOrNo};
