//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `DocumentRenderer` - the external document rendering service
//! - `Clock` - current date and time

mod clock;
mod document_renderer;

pub use clock::Clock;
pub use document_renderer::{DocumentRenderer, RenderError, RenderRequest, RenderedDocument};
