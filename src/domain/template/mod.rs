//! Template module - the vocabulary shared by all template content mappers.
//!
//! - `keys` - placeholder names the rendering templates reference
//! - `TemplateContent` / `TemplateValue` - the dictionary mappers produce
//! - `terminology` - divorce/dissolution/separation wording, English and Welsh
//! - `partner_word` - husband/wife/spouse/civil partner
//! - `CtscContactDetails`, `ConditionalOrderCourtDetails` - nested values
//! - `DocumentType` - catalogue of producible documents

pub mod keys;

mod contact;
mod court;
mod document_type;
mod relation;
mod terminology;
mod value;

pub use contact::CtscContactDetails;
pub use court::ConditionalOrderCourtDetails;
pub use document_type::DocumentType;
pub use relation::partner_word;
pub use terminology::{terminology, Terminology};
pub use value::{TemplateContent, TemplateValue};
