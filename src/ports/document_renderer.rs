//! Document Renderer Port - hand-off to the document rendering service.
//!
//! The mapping layer produces a flat placeholder dictionary; turning it into
//! a letter is the job of an external rendering service. The application
//! depends on this trait, while adapters (like `LocalFileRenderer`) provide
//! the implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{
    CaseId, DocumentId, DomainError, ErrorCode, LanguagePreference, Timestamp,
};
use crate::domain::template::{DocumentType, TemplateContent};

/// Port for rendering template content into a document.
///
/// # Contract
///
/// Implementations must:
/// - Treat `content` as read-only; the keys are the template's placeholders
/// - Use `template_id` verbatim to select the template
/// - Report `TemplateNotFound` rather than rendering with a fallback template
///
/// # Usage
///
/// ```rust,ignore
/// let renderer: &dyn DocumentRenderer = get_renderer();
/// let rendered = renderer.render(request).await?;
/// println!("{} -> {}", rendered.document_name, rendered.location);
/// ```
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// Render one document.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the template is unknown or rendering fails.
    async fn render(&self, request: RenderRequest) -> Result<RenderedDocument, RenderError>;

    /// Check whether the renderer can currently accept work.
    async fn is_available(&self) -> bool;
}

/// Everything the rendering service needs for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub case_id: CaseId,
    pub document_type: DocumentType,
    pub content: TemplateContent,
    pub template_id: String,
    pub language: LanguagePreference,
    pub document_name: String,
}

/// Outcome of a successful render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub document_id: DocumentId,
    pub document_name: String,
    pub template_id: String,
    /// Where the renderer put the output (file path or URI).
    pub location: String,
    /// SHA-256 of the rendered payload, when the renderer computes one.
    pub checksum: Option<String>,
    pub size_bytes: u64,
    pub rendered_at: Timestamp,
}

/// Errors that can occur while rendering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// No template exists for the requested id.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// The rendering service cannot be reached.
    #[error("Renderer unavailable: {0}")]
    Unavailable(String),

    /// The content could not be encoded for the template.
    #[error("Invalid template content: {0}")]
    InvalidContent(String),

    /// I/O failure while writing output.
    #[error("I/O error during rendering: {0}")]
    Io(String),
}

impl RenderError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    pub fn invalid_content(reason: impl Into<String>) -> Self {
        Self::InvalidContent(reason.into())
    }

    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }
}

impl From<RenderError> for DomainError {
    fn from(err: RenderError) -> Self {
        let code = match &err {
            RenderError::TemplateNotFound(_) => ErrorCode::TemplateNotFound,
            RenderError::Unavailable(_) => ErrorCode::RendererUnavailable,
            RenderError::InvalidContent(_) => ErrorCode::RenderingFailed,
            RenderError::Io(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}
