//! Format conversion utilities
//!
//! Whole-file conversions built on the text resource reader and writer:
//! - XML → JSON export
//! - XML → XML normalisation (re-indented, canonical layout)

mod normalize;
mod xml_to_json;

pub use normalize::{normalize_xml, normalize_xml_with_progress};
pub use xml_to_json::{convert_xml_to_json, convert_xml_to_json_with_progress, to_json};

/// Stage of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    ReadingSource,
    Converting,
    WritingOutput,
    Complete,
}

/// Progress report passed to a [`ConvertProgressCallback`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertProgress {
    pub phase: ConvertPhase,
    pub current: usize,
    pub total: usize,
    pub message: Option<String>,
}

impl ConvertProgress {
    pub fn new(phase: ConvertPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            message: None,
        }
    }

    /// Progress with a human-readable description of the step
    pub fn with_message(
        phase: ConvertPhase,
        current: usize,
        total: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            message: Some(message.into()),
        }
    }
}

/// Progress callback type for conversion operations.
pub type ConvertProgressCallback<'a> = &'a dyn Fn(&ConvertProgress);
