//! Text resource XML to JSON conversion

use crate::error::Result;
use crate::formats::text::{self, TextResource};

use std::path::Path;

/// Convert a text resource XML file to pretty-printed JSON
///
/// # Errors
/// Returns an error if reading, parsing, or writing fails.
pub fn convert_xml_to_json<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    convert_xml_to_json_with_progress(source, dest, &|_| {})
}

/// Convert a text resource XML file to JSON with progress callback
///
/// # Errors
/// Returns an error if reading, parsing, or writing fails.
pub fn convert_xml_to_json_with_progress<P: AsRef<Path>>(
    source: P,
    dest: P,
    progress: crate::converter::ConvertProgressCallback,
) -> Result<()> {
    use crate::converter::{ConvertPhase, ConvertProgress};

    tracing::info!(
        "Converting XML→JSON: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    progress(&ConvertProgress::with_message(
        ConvertPhase::ReadingSource,
        1,
        3,
        "Reading XML file...",
    ));
    let resource = text::read_text_xml(&source)?;

    progress(&ConvertProgress::with_message(
        ConvertPhase::Converting,
        2,
        3,
        format!("Converting {} groups to JSON...", resource.len()),
    ));
    let json = to_json(&resource)?;

    progress(&ConvertProgress::with_message(
        ConvertPhase::WritingOutput,
        3,
        3,
        "Writing JSON file...",
    ));
    std::fs::write(dest, json)?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, 3, 3));
    tracing::info!("Conversion complete");
    Ok(())
}

/// Convert `TextResource` to a JSON string
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn to_json(resource: &TextResource) -> Result<String> {
    let mut json = serde_json::to_string_pretty(resource)?;
    json.push('\n');
    Ok(json)
}
