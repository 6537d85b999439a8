//! CLI interface for whole-file conversions
use std::path::Path;

use crate::converter::{self, ConvertProgress};
use crate::formats::text::WriteOptions;

fn report(progress: &ConvertProgress) {
    if let Some(message) = &progress.message {
        println!("[{}/{}] {}", progress.current, progress.total, message);
    }
}

pub fn normalize(source: &Path, destination: &Path, tabs: bool) -> anyhow::Result<()> {
    let options = if tabs {
        WriteOptions {
            indent_char: b'\t',
            indent_size: 1,
        }
    } else {
        WriteOptions::default()
    };

    converter::normalize_xml_with_progress(source, destination, options, &report)?;
    println!("Wrote {}", destination.display());
    Ok(())
}

pub fn export_json(source: &Path, destination: Option<&Path>) -> anyhow::Result<()> {
    let output_path = destination.map_or_else(|| source.with_extension("json"), Path::to_path_buf);

    converter::convert_xml_to_json_with_progress(source, output_path.as_path(), &report)?;
    println!("Exported to {}", output_path.display());
    Ok(())
}
