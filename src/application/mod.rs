//! Application layer - template content mapping and document handlers.
//!
//! Mappers read a case and produce placeholder content; handlers pick the
//! mapper and template for a document and hand the result to a renderer.

pub mod handlers;
pub mod template_content;

pub use handlers::{
    DocumentPreview, GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
    GeneratedDocument,
};
pub use template_content::{
    CommonContent, ContentRequest, HoldingPeriodService, MapperRegistry, TemplateCatalog,
    TemplateContentMapper,
};
