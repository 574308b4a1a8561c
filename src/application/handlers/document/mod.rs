//! Document handlers.

mod generate_document;

pub use generate_document::{
    DocumentPreview, GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
    GeneratedDocument,
};
