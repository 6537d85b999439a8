//! Text resource XML writing

use super::{
    GROUP_TAG, ID_ATTR, INDEX_WITH_COUNTS_ATTR, NAME_ATTR, ROOT_TAG, STRING_TAG, TextGroup,
    TextResource,
};
use crate::error::{Error, Result};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Formatting of the written document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Byte repeated for each indentation level
    pub indent_char: u8,
    /// Repetitions of `indent_char` per level
    pub indent_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent_char: b' ',
            indent_size: 4,
        }
    }
}

/// Write a text resource to an XML file on disk
///
/// # Errors
///
/// Returns [`Error::OpenFailed`] if the file cannot be created, or an IO
/// error if writing to it fails.
///
/// [`Error::OpenFailed`]: crate::Error::OpenFailed
pub fn write_text_xml<P: AsRef<Path>>(path: P, resource: &TextResource) -> Result<()> {
    write_text_xml_with_options(path, resource, WriteOptions::default())
}

/// Write a text resource to an XML file with custom formatting
pub fn write_text_xml_with_options<P: AsRef<Path>>(
    path: P,
    resource: &TextResource,
    options: WriteOptions,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| {
        let err = Error::OpenFailed {
            path: path.to_path_buf(),
            source,
        };
        tracing::error!("Unable to open XML file for writing: {err}");
        err
    })?;

    let mut sink = BufWriter::new(file);
    write_text_xml_to(&mut sink, resource, options)?;
    sink.flush()?;
    Ok(())
}

/// Convert a `TextResource` to an XML string
pub fn to_xml_string(resource: &TextResource) -> Result<String> {
    let mut output = Vec::new();
    write_text_xml_to(&mut output, resource, WriteOptions::default())?;
    Ok(String::from_utf8(output)?)
}

/// Write a text resource as XML to any sink
///
/// String elements get `id` attributes from their position in the group.
pub fn write_text_xml_to<W: Write>(
    sink: W,
    resource: &TextResource,
    options: WriteOptions,
) -> Result<()> {
    let mut writer = Writer::new_with_indent(sink, options.indent_char, options.indent_size);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new(ROOT_TAG);
    root.push_attribute((NAME_ATTR, resource.name()));
    root.push_attribute((
        INDEX_WITH_COUNTS_ATTR,
        if resource.index_with_counts() { "true" } else { "false" },
    ));
    writer.write_event(Event::Start(root))?;

    for group in resource.groups() {
        write_group(&mut writer, group)?;
    }

    writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;

    // Trailing newline
    writer.into_inner().write_all(b"\n")?;
    Ok(())
}

fn write_group<W: Write>(writer: &mut Writer<W>, group: &TextGroup) -> Result<()> {
    let id = group.id().to_string();
    let mut start = BytesStart::new(GROUP_TAG);
    start.push_attribute((ID_ATTR, id.as_str()));
    writer.write_event(Event::Start(start))?;

    for (index, text) in group.iter().enumerate() {
        let index = index.to_string();
        let mut element = BytesStart::new(STRING_TAG);
        element.push_attribute((ID_ATTR, index.as_str()));
        writer.write_event(Event::Start(element))?;
        // Always emit the text event, even when empty, so the end tag stays on
        // the same line and no indentation leaks into the string
        writer.write_event(Event::Text(BytesText::new(text)))?;
        writer.write_event(Event::End(BytesEnd::new(STRING_TAG)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(GROUP_TAG)))?;
    Ok(())
}
