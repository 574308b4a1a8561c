//! Local file renderer - writes rendering-service payloads to disk.
//!
//! Each document becomes the JSON body the rendering service expects,
//! stored under a per-case directory. Uses atomic writes and SHA-256
//! checksums for integrity.

use async_trait::async_trait;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

use crate::domain::foundation::{CaseId, DocumentId, Timestamp};
use crate::domain::template::TemplateContent;
use crate::ports::{DocumentRenderer, RenderError, RenderRequest, RenderedDocument};

/// Maximum payload size allowed (10 MB).
const MAX_PAYLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Body the rendering service accepts.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Payload<'a> {
    template_name: &'a str,
    data: &'a TemplateContent,
}

/// Filesystem-backed `DocumentRenderer`.
///
/// # Directory Structure
///
/// ```text
/// {base_path}/
/// ├── 1616591401473378/
/// │   ├── application-1616591401473378-2021-04-28.json
/// │   └── noticeOfProceedings-1616591401473378-2021-04-28.json
/// └── 1234567812345678/
///     └── coversheet-1234567812345678-2023-01-01.json
/// ```
///
/// # Atomic Writes
///
/// 1. Write the payload to `{document_name}.json.tmp`
/// 2. Sync to disk
/// 3. Rename to `{document_name}.json`
#[derive(Debug, Clone)]
pub struct LocalFileRenderer {
    base_path: PathBuf,
}

impl LocalFileRenderer {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn case_dir(&self, case_id: &CaseId) -> PathBuf {
        self.base_path.join(case_id.to_string())
    }

    /// Path the payload for `document_name` is written to.
    pub fn payload_path(&self, case_id: &CaseId, document_name: &str) -> PathBuf {
        self.case_dir(case_id).join(format!("{}.json", document_name))
    }

    fn temp_path(&self, case_id: &CaseId, document_name: &str) -> PathBuf {
        self.case_dir(case_id)
            .join(format!("{}.json.tmp", document_name))
    }

    fn compute_checksum(bytes: &[u8]) -> String {
        let digest = Sha256::digest(bytes);
        format!("{:x}", digest)
    }

    fn encode_payload(request: &RenderRequest) -> Result<Vec<u8>, RenderError> {
        let payload = Payload {
            template_name: &request.template_id,
            data: &request.content,
        };
        serde_json::to_vec_pretty(&payload).map_err(|e| RenderError::invalid_content(e.to_string()))
    }
}

fn io_failure(action: &str, path: &Path, err: std::io::Error) -> RenderError {
    error!(path = %path.display(), error = %err, "Failed to {}", action);
    RenderError::io(format!("Failed to {} {}: {}", action, path.display(), err))
}

#[async_trait]
impl DocumentRenderer for LocalFileRenderer {
    async fn render(&self, request: RenderRequest) -> Result<RenderedDocument, RenderError> {
        let bytes = Self::encode_payload(&request)?;
        let size = bytes.len() as u64;
        if size > MAX_PAYLOAD_BYTES {
            return Err(RenderError::invalid_content(format!(
                "payload is {} bytes, limit is {}",
                size, MAX_PAYLOAD_BYTES
            )));
        }

        let dir = self.case_dir(&request.case_id);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| io_failure("create case directory", &dir, e))?;

        let temp_path = self.temp_path(&request.case_id, &request.document_name);
        let final_path = self.payload_path(&request.case_id, &request.document_name);

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| io_failure("create temp file", &temp_path, e))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| io_failure("write temp file", &temp_path, e))?;
        file.sync_all()
            .await
            .map_err(|e| io_failure("sync temp file", &temp_path, e))?;

        fs::rename(&temp_path, &final_path)
            .await
            .map_err(|e| io_failure("rename temp file", &final_path, e))?;

        let checksum = Self::compute_checksum(&bytes);
        debug!(
            path = %final_path.display(),
            size_bytes = size,
            checksum = %checksum,
            "Wrote template payload"
        );

        Ok(RenderedDocument {
            document_id: DocumentId::new(),
            document_name: request.document_name,
            template_id: request.template_id,
            location: final_path.display().to_string(),
            checksum: Some(checksum),
            size_bytes: size,
            rendered_at: Timestamp::now(),
        })
    }

    async fn is_available(&self) -> bool {
        fs::create_dir_all(&self.base_path).await.is_ok()
    }
}
