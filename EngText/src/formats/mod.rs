//! File format handlers
//!
//! Only the grouped text resource XML format lives here for now.

pub mod text;

// Re-export main document types
pub use text::{TextGroup, TextResource, read_text_xml, write_text_xml};
