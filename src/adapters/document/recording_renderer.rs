//! Recording renderer - keeps every request in memory.
//!
//! Used by tests and by dry runs that only need to see what would have been
//! sent to the rendering service.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DocumentId, Timestamp};
use crate::ports::{DocumentRenderer, RenderError, RenderRequest, RenderedDocument};

/// In-memory `DocumentRenderer`.
///
/// # Example
///
/// ```ignore
/// let renderer = Arc::new(RecordingDocumentRenderer::new());
/// handler.handle(command).await?;
/// assert_eq!(renderer.request_count().await, 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingDocumentRenderer {
    requests: RwLock<Vec<RenderRequest>>,
    failure: Option<RenderError>,
}

impl RecordingDocumentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer that rejects every request with `error`.
    pub fn failing_with(error: RenderError) -> Self {
        Self {
            requests: RwLock::new(Vec::new()),
            failure: Some(error),
        }
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<RenderRequest> {
        self.requests.read().await.clone()
    }

    pub async fn last_request(&self) -> Option<RenderRequest> {
        self.requests.read().await.last().cloned()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }

    pub async fn clear(&self) {
        self.requests.write().await.clear();
    }
}

#[async_trait]
impl DocumentRenderer for RecordingDocumentRenderer {
    async fn render(&self, request: RenderRequest) -> Result<RenderedDocument, RenderError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let size_bytes = request
            .content
            .to_json()
            .map(|json| json.to_string().len() as u64)
            .map_err(|e| RenderError::invalid_content(e.to_string()))?;

        let rendered = RenderedDocument {
            document_id: DocumentId::new(),
            document_name: request.document_name.clone(),
            template_id: request.template_id.clone(),
            location: format!("memory://{}/{}", request.case_id, request.document_name),
            checksum: None,
            size_bytes,
            rendered_at: Timestamp::now(),
        };

        self.requests.write().await.push(request);
        Ok(rendered)
    }

    async fn is_available(&self) -> bool {
        self.failure.is_none()
    }
}
