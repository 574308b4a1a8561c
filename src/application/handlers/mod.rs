//! Application handlers.
//!
//! Command handlers that orchestrate mappers, the template catalog and the
//! rendering port.

pub mod document;

pub use document::{
    DocumentPreview, GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
    GeneratedDocument,
};
