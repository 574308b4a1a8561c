//! Document adapters - implementations of the `DocumentRenderer` port.
//!
//! - `LocalFileRenderer` - writes rendering payloads to the local filesystem
//! - `RecordingDocumentRenderer` - keeps requests in memory

mod local_file_renderer;
mod recording_renderer;

pub use local_file_renderer::LocalFileRenderer;
pub use recording_renderer::RecordingDocumentRenderer;
