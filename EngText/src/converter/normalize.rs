//! Text resource XML normalisation
//!
//! Reads a document with full validation and writes it back in the
//! canonical layout.

use crate::error::Result;
use crate::formats::text::{self, WriteOptions};

use std::path::Path;

/// Rewrite a text resource XML file in canonical form
///
/// # Errors
/// Returns an error if the source fails validation or the output cannot be written.
pub fn normalize_xml<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    normalize_xml_with_progress(source, dest, WriteOptions::default(), &|_| {})
}

/// Rewrite a text resource XML file with custom formatting and progress callback
///
/// # Errors
/// Returns an error if the source fails validation or the output cannot be written.
pub fn normalize_xml_with_progress<P: AsRef<Path>>(
    source: P,
    dest: P,
    options: WriteOptions,
    progress: crate::converter::ConvertProgressCallback,
) -> Result<()> {
    use crate::converter::{ConvertPhase, ConvertProgress};

    tracing::info!(
        "Normalizing XML: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    progress(&ConvertProgress::with_message(
        ConvertPhase::ReadingSource,
        1,
        2,
        "Reading XML file...",
    ));
    let resource = text::read_text_xml(&source)?;

    progress(&ConvertProgress::with_message(
        ConvertPhase::WritingOutput,
        2,
        2,
        format!(
            "Writing {} groups ({} strings)...",
            resource.len(),
            resource.string_count()
        ),
    ));
    text::write_text_xml_with_options(dest, &resource, options)?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, 2, 2));
    tracing::info!("Normalization complete");
    Ok(())
}
