//! Adapters - Implementations of port interfaces.
//!
//! - `clock` - system and fixed clocks
//! - `document` - document renderers (filesystem, in-memory)

pub mod clock;
pub mod document;

pub use clock::{FixedClock, SystemClock};
pub use document::{LocalFileRenderer, RecordingDocumentRenderer};
