//! GenerateDocumentHandler - Command handler for producing a case document.
//!
//! Maps the case to template content, resolves the template and document
//! name, then hands the content to the rendering port.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::template_content::{ContentRequest, MapperRegistry, TemplateCatalog};
use crate::domain::case::CaseData;
use crate::domain::foundation::{
    CaseId, DocumentId, DomainError, ErrorCode, LanguagePreference, Party,
};
use crate::domain::template::{DocumentType, TemplateContent};
use crate::ports::{Clock, DocumentRenderer, RenderError, RenderRequest};

/// Command to generate one document for one case.
#[derive(Debug, Clone)]
pub struct GenerateDocumentCommand {
    /// Case the document belongs to.
    pub case_id: CaseId,
    /// Snapshot of the case data.
    pub case_data: CaseData,
    /// Document to produce.
    pub document_type: DocumentType,
    /// Party the document is addressed to.
    pub recipient: Party,
}

impl GenerateDocumentCommand {
    /// Creates a command addressed to the first applicant.
    pub fn new(case_id: CaseId, case_data: CaseData, document_type: DocumentType) -> Self {
        Self {
            case_id,
            case_data,
            document_type,
            recipient: Party::Applicant1,
        }
    }

    /// Addresses the document to `recipient` instead.
    pub fn to(mut self, recipient: Party) -> Self {
        self.recipient = recipient;
        self
    }
}

/// Content and template resolution without rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPreview {
    pub content: TemplateContent,
    pub template_id: String,
    pub document_name: String,
    pub language: LanguagePreference,
}

/// Result of successful document generation.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub document_id: DocumentId,
    pub case_id: CaseId,
    pub document_type: DocumentType,
    pub template_id: String,
    pub document_name: String,
    pub language: LanguagePreference,
    /// Where the renderer stored the document.
    pub location: String,
    pub checksum: Option<String>,
    /// Number of placeholders sent to the renderer.
    pub key_count: usize,
}

/// Error type for document generation.
#[derive(Debug, Clone)]
pub enum GenerateDocumentError {
    /// No mapper is registered for the document type.
    UnsupportedDocument(DocumentType),
    /// The rendering service rejected or failed the request.
    Rendering(RenderError),
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for GenerateDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateDocumentError::UnsupportedDocument(document_type) => {
                write!(f, "No content mapper for document type: {}", document_type)
            }
            GenerateDocumentError::Rendering(err) => write!(f, "Rendering failed: {}", err),
            GenerateDocumentError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GenerateDocumentError {}

impl From<GenerateDocumentError> for DomainError {
    fn from(err: GenerateDocumentError) -> Self {
        match err {
            GenerateDocumentError::UnsupportedDocument(document_type) => DomainError::new(
                ErrorCode::UnsupportedDocument,
                format!("No content mapper for document type: {}", document_type),
            )
            .with_detail("document_type", document_type.as_str()),
            GenerateDocumentError::Rendering(err) => err.into(),
            GenerateDocumentError::Domain(err) => err,
        }
    }
}

impl From<DomainError> for GenerateDocumentError {
    fn from(err: DomainError) -> Self {
        GenerateDocumentError::Domain(err)
    }
}

impl From<RenderError> for GenerateDocumentError {
    fn from(err: RenderError) -> Self {
        GenerateDocumentError::Rendering(err)
    }
}

/// Handler for generating case documents.
///
/// # Dependencies
///
/// - `MapperRegistry`: content mapper per document type
/// - `TemplateCatalog`: template ids and document names
/// - `DocumentRenderer`: fills the template
/// - `Clock`: the date documents are produced on
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateDocumentHandler::new(registry, catalog, renderer, clock);
/// let cmd = GenerateDocumentCommand::new(case_id, case_data, DocumentType::Coversheet);
/// let generated = handler.handle(cmd).await?;
/// println!("{}", generated.location);
/// ```
pub struct GenerateDocumentHandler {
    registry: Arc<MapperRegistry>,
    catalog: TemplateCatalog,
    renderer: Arc<dyn DocumentRenderer>,
    clock: Arc<dyn Clock>,
}

impl GenerateDocumentHandler {
    pub fn new(
        registry: Arc<MapperRegistry>,
        catalog: TemplateCatalog,
        renderer: Arc<dyn DocumentRenderer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            catalog,
            renderer,
            clock,
        }
    }

    /// Produces the content and template resolution for `cmd` without rendering.
    pub fn preview(
        &self,
        cmd: &GenerateDocumentCommand,
    ) -> Result<DocumentPreview, GenerateDocumentError> {
        let mapper = self
            .registry
            .get(cmd.document_type)
            .ok_or(GenerateDocumentError::UnsupportedDocument(cmd.document_type))?;

        let today = self.clock.today();
        let request =
            ContentRequest::new(&cmd.case_data, cmd.case_id, today).for_recipient(cmd.recipient);
        let language = mapper.language(&request);
        let content = mapper.apply(&request);

        debug!(
            case_id = %cmd.case_id,
            document_type = cmd.document_type.as_str(),
            %language,
            keys = content.len(),
            "Mapped template content"
        );

        Ok(DocumentPreview {
            content,
            template_id: self.catalog.template_id(cmd.document_type, language),
            document_name: self.catalog.document_name(cmd.document_type, cmd.case_id, today),
            language,
        })
    }

    pub async fn handle(
        &self,
        cmd: GenerateDocumentCommand,
    ) -> Result<GeneratedDocument, GenerateDocumentError> {
        // 1. Map content and resolve the template
        let preview = self.preview(&cmd)?;
        let key_count = preview.content.len();

        // 2. Render
        let request = RenderRequest {
            case_id: cmd.case_id,
            document_type: cmd.document_type,
            content: preview.content,
            template_id: preview.template_id.clone(),
            language: preview.language,
            document_name: preview.document_name.clone(),
        };
        let rendered = self.renderer.render(request).await?;

        info!(
            case_id = %cmd.case_id,
            document_type = cmd.document_type.as_str(),
            template_id = %rendered.template_id,
            location = %rendered.location,
            "Generated document"
        );

        Ok(GeneratedDocument {
            document_id: rendered.document_id,
            case_id: cmd.case_id,
            document_type: cmd.document_type,
            template_id: rendered.template_id,
            document_name: rendered.document_name,
            language: preview.language,
            location: rendered.location,
            checksum: rendered.checksum,
            key_count,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
