//! Text resource XML reading
//!
//! A forward-only pull reader over `quick-xml` events. The reader remembers
//! the token it is positioned on, so searching for a tag that is already
//! current succeeds without consuming anything.

use super::{
    GROUP_TAG, ID_ATTR, INDEX_WITH_COUNTS_ATTR, NAME_ATTR, ROOT_TAG, STRING_TAG, TextGroup,
    TextResource,
};
use crate::error::{Error, Result};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a text resource XML file from disk
///
/// # Errors
///
/// Returns [`Error::OpenFailed`] if the file cannot be opened, or the first
/// structural error found in the document.
///
/// [`Error::OpenFailed`]: crate::Error::OpenFailed
pub fn read_text_xml<P: AsRef<Path>>(path: P) -> Result<TextResource> {
    let mut resource = TextResource::new();
    read_text_xml_into(path, &mut resource)?;
    Ok(resource)
}

/// Read a text resource XML file, appending its groups to `resource`
///
/// Groups read before a failure stay in `resource`. If the file cannot be
/// opened, `resource` is left untouched.
pub fn read_text_xml_into<P: AsRef<Path>>(path: P, resource: &mut TextResource) -> Result<()> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        let err = Error::OpenFailed {
            path: path.to_path_buf(),
            source,
        };
        tracing::error!("Unable to open XML file for reading: {err}");
        err
    })?;

    parse_text_xml_reader(BufReader::new(file), resource)
}

/// Parse a text resource from an XML string
pub fn parse_text_xml_str(content: &str) -> Result<TextResource> {
    let mut resource = TextResource::new();
    parse_text_xml_reader(content.as_bytes(), &mut resource)?;
    Ok(resource)
}

/// Parse a text resource from any buffered source, appending to `resource`
pub fn parse_text_xml_reader<R: BufRead>(source: R, resource: &mut TextResource) -> Result<()> {
    TextXmlReader::new(source)
        .read_document(resource)
        .inspect_err(|err| tracing::error!("{err}"))
}

/// Outcome of a tag search that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagSearch {
    Found,
    /// An end element or the end of the document came first.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>, position: usize) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let attributes = start
            .attributes()
            .map(|attr| {
                let attr = attr.map_err(|err| invalid_xml(position, &err))?;
                let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                let value = attr
                    .unescape_value()
                    .map_err(|err| invalid_xml(position, &err))?
                    .into_owned();
                Ok((key, value))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { name, attributes })
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// The token the reader is positioned on.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    StartDocument,
    StartElement(Element),
    EndElement(String),
    Characters(String),
    /// Comments, declarations, DTDs and processing instructions
    Skipped,
    EndDocument,
}

impl Token {
    fn is_start_of(&self, tag: &str) -> bool {
        matches!(self, Token::StartElement(element) if element.name == tag)
    }

    fn is_end_of(&self, tag: &str) -> bool {
        matches!(self, Token::EndElement(name) if name == tag)
    }
}

struct TextXmlReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    token: Token,
}

impl<R: BufRead> TextXmlReader<R> {
    fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        // String content is kept verbatim, including surrounding whitespace
        reader.trim_text(false);
        // <group id="1"/> must look like an open tag followed by a close tag
        reader.expand_empty_elements(true);

        Self {
            reader,
            buf: Vec::new(),
            token: Token::StartDocument,
        }
    }

    fn at_end(&self) -> bool {
        self.token == Token::EndDocument
    }

    fn advance(&mut self) -> Result<&Token> {
        self.buf.clear();
        let event = self.reader.read_event_into(&mut self.buf);
        let position = self.reader.buffer_position();

        let token = match event.map_err(|err| invalid_xml(position, &err))? {
            Event::Start(start) | Event::Empty(start) => {
                Token::StartElement(Element::from_start(&start, position)?)
            }
            Event::End(end) => {
                Token::EndElement(String::from_utf8_lossy(end.name().as_ref()).into_owned())
            }
            Event::Text(text) => Token::Characters(
                text.unescape()
                    .map_err(|err| invalid_xml(position, &err))?
                    .into_owned(),
            ),
            Event::CData(cdata) => Token::Characters(String::from_utf8_lossy(&cdata).into_owned()),
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => Token::Skipped,
            Event::Eof => Token::EndDocument,
        };

        self.token = token;
        Ok(&self.token)
    }

    /// Attribute of the current start element
    fn attribute(&self, name: &str) -> Option<&str> {
        match &self.token {
            Token::StartElement(element) => element.attribute(name),
            _ => None,
        }
    }

    fn read_document(&mut self, resource: &mut TextResource) -> Result<()> {
        match self.find_open_tag(ROOT_TAG) {
            Ok(TagSearch::Found) => {}
            Ok(TagSearch::NotFound) => return Err(Error::RootElementNotFound),
            Err(err @ Error::InvalidXml { .. }) => return Err(err),
            Err(err) => {
                tracing::debug!("Root element search failed: {err}");
                return Err(Error::RootElementNotFound);
            }
        }

        if let Some(name) = self.attribute(NAME_ATTR) {
            resource.set_name(name);
        }
        resource.set_index_with_counts(self.attribute(INDEX_WITH_COUNTS_ATTR) != Some("false"));

        while self.find_open_tag(GROUP_TAG)? == TagSearch::Found {
            self.read_group(resource)?;
            self.find_close_tag(GROUP_TAG)?;
        }
        self.find_close_tag(ROOT_TAG)
    }

    /// Look for `tag` as the next element.
    ///
    /// Character data, comments and other non-element tokens are skipped. A
    /// different start element is an error, not something to scan past.
    fn find_open_tag(&mut self, tag: &str) -> Result<TagSearch> {
        if self.token.is_start_of(tag) {
            return Ok(TagSearch::Found);
        }

        while !self.at_end() {
            match self.advance()? {
                Token::StartDocument | Token::Characters(_) | Token::Skipped => {}
                Token::EndElement(_) | Token::EndDocument => return Ok(TagSearch::NotFound),
                Token::StartElement(element) if element.name == tag => {
                    return Ok(TagSearch::Found);
                }
                Token::StartElement(element) => {
                    return Err(Error::UnexpectedTag {
                        expected: tag.to_owned(),
                        found: element.name.clone(),
                    });
                }
            }
        }
        Err(Error::UnexpectedEof)
    }

    /// Skip forward to the end element of `tag`
    fn find_close_tag(&mut self, tag: &str) -> Result<()> {
        if self.token.is_end_of(tag) {
            return Ok(());
        }

        while !self.at_end() {
            if self.advance()?.is_end_of(tag) {
                return Ok(());
            }
        }
        Err(Error::EndElementNotFound {
            tag: tag.to_owned(),
        })
    }

    /// Collect the text of the current element, leaving the reader on its end element
    fn read_element_text(&mut self) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.advance()? {
                Token::Characters(chunk) => text.push_str(chunk),
                Token::StartDocument | Token::Skipped => {}
                Token::EndElement(_) => return Ok(text),
                Token::StartElement(element) => {
                    let message = format!("expected character data, found <{}>", element.name);
                    return Err(invalid_xml(self.reader.buffer_position(), &message));
                }
                Token::EndDocument => return Err(Error::UnexpectedEof),
            }
        }
    }

    fn read_group(&mut self, resource: &mut TextResource) -> Result<()> {
        let value = self.attribute(ID_ATTR).ok_or(Error::GroupMissingId)?;
        let id = parse_id(value).ok_or_else(|| Error::GroupIdNotInteger {
            value: value.to_owned(),
        })?;

        let mut group = TextGroup::new(id);
        while self.find_open_tag(STRING_TAG)? == TagSearch::Found {
            let value = self.attribute(ID_ATTR).ok_or(Error::StringMissingId)?;
            let string_id = parse_id(value).ok_or_else(|| Error::StringIdNotInteger {
                value: value.to_owned(),
            })?;

            if usize::try_from(string_id).ok() != Some(group.len()) {
                return Err(Error::StringsNotOrdered {
                    group: id,
                    expected: group.len(),
                    found: string_id,
                });
            }

            group.add(self.read_element_text()?);
            self.find_close_tag(STRING_TAG)?;
        }

        tracing::debug!("Read group {} with {} strings", id, group.len());
        resource.add_group(group);
        Ok(())
    }
}

fn parse_id(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

fn invalid_xml(position: usize, err: &impl Display) -> Error {
    Error::InvalidXml {
        position,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_into(content: &str, resource: &mut TextResource) -> Result<()> {
        parse_text_xml_reader(content.as_bytes(), resource)
    }

    #[test]
    fn test_parse_two_strings() {
        let resource = parse_text_xml_str(
            r#"<strings><group id="1"><string id="0">A</string><string id="1">B</string></group></strings>"#,
        )
        .unwrap();

        assert_eq!(resource.name(), "");
        assert!(resource.index_with_counts());
        assert_eq!(resource.len(), 1);
        assert_eq!(resource.groups()[0].id(), 1);
        assert_eq!(resource.groups()[0].strings(), ["A", "B"]);
    }

    #[test]
    fn test_root_attributes() {
        let resource = parse_text_xml_str(
            r#"<?xml version="1.0"?>
<strings name="c3_eng" indexWithCounts="false">
</strings>"#,
        )
        .unwrap();

        assert_eq!(resource.name(), "c3_eng");
        assert!(!resource.index_with_counts());
        assert!(resource.is_empty());
    }

    #[test]
    fn test_index_with_counts_only_false_is_false() {
        let flag = |attr: &str| {
            parse_text_xml_str(&format!("<strings {attr}></strings>"))
                .unwrap()
                .index_with_counts()
        };

        assert!(flag(""));
        assert!(!flag(r#"indexWithCounts="false""#));
        assert!(flag(r#"indexWithCounts="no""#));
        assert!(flag(r#"indexWithCounts="FALSE""#));
    }

    #[test]
    fn test_empty_groups() {
        let resource =
            parse_text_xml_str(r#"<strings><group id="2"/><group id="3">  </group></strings>"#)
                .unwrap();

        assert_eq!(resource.len(), 2);
        assert!(resource.groups()[0].is_empty());
        assert_eq!(resource.groups()[1].id(), 3);
        assert!(resource.groups()[1].is_empty());
    }

    #[test]
    fn test_missing_root() {
        let mut resource = TextResource::new();
        let err = parse_into(r#"<texts><group id="1"/></texts>"#, &mut resource).unwrap_err();
        assert!(matches!(err, Error::RootElementNotFound));
        assert!(resource.is_empty());

        let err = parse_text_xml_str("").unwrap_err();
        assert!(matches!(err, Error::RootElementNotFound));
    }

    #[test]
    fn test_broken_root_reports_parser_message() {
        let mut resource = TextResource::new();
        let err = parse_into(r#"<strings name="x></strings>"#, &mut resource).unwrap_err();

        assert!(matches!(err, Error::InvalidXml { ref message, .. } if !message.is_empty()));
        assert!(resource.is_empty());
    }

    #[test]
    fn test_unterminated_string() {
        let mut resource = TextResource::new();
        let err = parse_into(r#"<strings><group id="1"><string id="0">A"#, &mut resource)
            .unwrap_err();

        assert!(matches!(err, Error::UnexpectedEof));
        assert!(resource.is_empty());
    }

    #[test]
    fn test_group_id_errors() {
        let err = parse_text_xml_str(r#"<strings><group id="abc"/></strings>"#).unwrap_err();
        assert!(matches!(err, Error::GroupIdNotInteger { ref value } if value == "abc"));

        let err = parse_text_xml_str(r"<strings><group/></strings>").unwrap_err();
        assert!(matches!(err, Error::GroupMissingId));
    }

    #[test]
    fn test_string_id_errors() {
        let err = parse_text_xml_str(r#"<strings><group id="1"><string id="x">A</string></group></strings>"#)
            .unwrap_err();
        assert!(matches!(err, Error::StringIdNotInteger { ref value } if value == "x"));

        let err = parse_text_xml_str(r#"<strings><group id="1"><string>A</string></group></strings>"#)
            .unwrap_err();
        assert!(matches!(err, Error::StringMissingId));
    }

    #[test]
    fn test_strings_out_of_order() {
        let mut resource = TextResource::new();
        let err = parse_into(
            r#"<strings><group id="4"><string id="0">A</string><string id="2">B</string></group></strings>"#,
            &mut resource,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::StringsNotOrdered { group: 4, expected: 1, found: 2 }
        ));
        assert!(resource.is_empty());
    }

    #[test]
    fn test_first_string_must_be_zero() {
        let err = parse_text_xml_str(r#"<strings><group id="1"><string id="1">A</string></group></strings>"#)
            .unwrap_err();
        assert!(matches!(err, Error::StringsNotOrdered { expected: 0, found: 1, .. }));
    }

    #[test]
    fn test_unterminated_group() {
        let mut resource = TextResource::new();
        let err = parse_into(r#"<strings><group id="1"><string id="0">A</string>"#, &mut resource)
            .unwrap_err();

        assert!(matches!(err, Error::EndElementNotFound { ref tag } if tag == "group"));
        // The group body was complete, so it was appended before the close check failed
        assert_eq!(resource.len(), 1);
    }

    #[test]
    fn test_unterminated_root() {
        let err = parse_text_xml_str(r"<strings>").unwrap_err();
        assert!(matches!(err, Error::EndElementNotFound { ref tag } if tag == "strings"));
    }

    #[test]
    fn test_unexpected_tag() {
        let err = parse_text_xml_str(r#"<strings><group id="1"><text id="0">A</text></group></strings>"#)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedTag { ref expected, ref found } if expected == "string" && found == "text"
        ));
    }

    #[test]
    fn test_mismatched_end_tag_is_invalid_xml() {
        let err = parse_text_xml_str(r#"<strings><group id="1"></strings>"#).unwrap_err();
        assert!(matches!(err, Error::InvalidXml { .. }));
    }

    #[test]
    fn test_nested_element_in_string() {
        let err = parse_text_xml_str(
            r#"<strings><group id="1"><string id="0">A<b>bold</b></string></group></strings>"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidXml { ref message, .. } if message.contains("<b>")));
    }

    #[test]
    fn test_skips_comments_and_declarations() {
        let resource = parse_text_xml_str(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE strings>
<!-- generated -->
<strings name="x">
    <?editor keep?>
    <group id="9">
        <!-- first -->
        <string id="0">A</string>
    </group>
</strings>
"#,
        )
        .unwrap();

        assert_eq!(resource.get(9, 0), Some("A"));
    }

    #[test]
    fn test_text_content_is_decoded_and_preserved() {
        let resource = parse_text_xml_str(
            r#"<strings><group id="0"><string id="0">  Fish &amp; chips &lt;3  </string><string id="1"><![CDATA[<raw>]]></string><string id="2"></string></group></strings>"#,
        )
        .unwrap();

        let group = &resource.groups()[0];
        assert_eq!(group.get(0), Some("  Fish & chips <3  "));
        assert_eq!(group.get(1), Some("<raw>"));
        assert_eq!(group.get(2), Some(""));
    }

    #[test]
    fn test_failure_keeps_earlier_groups() {
        let mut resource = TextResource::new();
        let err = parse_into(
            r#"<strings>
    <group id="1"><string id="0">A</string></group>
    <group id="2"><string id="1">B</string></group>
</strings>"#,
            &mut resource,
        )
        .unwrap_err();

        assert!(matches!(err, Error::StringsNotOrdered { group: 2, .. }));
        assert_eq!(resource.len(), 1);
        assert_eq!(resource.get(1, 0), Some("A"));
    }

    #[test]
    fn test_negative_and_padded_ids() {
        let resource = parse_text_xml_str(
            r#"<strings><group id="-3"><string id=" 0 ">A</string></group></strings>"#,
        )
        .unwrap();
        assert_eq!(resource.groups()[0].id(), -3);
    }
}
