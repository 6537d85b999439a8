//! Text resource XML format
//!
//! A text resource is a table of numbered groups, each holding strings
//! indexed from zero:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <strings name="example" indexWithCounts="true">
//!     <group id="5">
//!         <string id="0">Hello</string>
//!         <string id="1">World</string>
//!     </group>
//! </strings>
//! ```

mod editor;
mod reader;
mod writer;

pub use editor::SearchMatch;
pub use reader::{parse_text_xml_reader, parse_text_xml_str, read_text_xml, read_text_xml_into};
pub use writer::{
    WriteOptions, to_xml_string, write_text_xml, write_text_xml_to, write_text_xml_with_options,
};

use serde::{Deserialize, Serialize};

/// Root element name
pub const ROOT_TAG: &str = "strings";
/// Group element name
pub const GROUP_TAG: &str = "group";
/// String element name
pub const STRING_TAG: &str = "string";
/// ID attribute on `<group>` and `<string>`
pub const ID_ATTR: &str = "id";
/// Resource name attribute on the root element
pub const NAME_ATTR: &str = "name";
/// Index flag attribute on the root element
pub const INDEX_WITH_COUNTS_ATTR: &str = "indexWithCounts";

/// A numbered group of strings.
///
/// Strings are addressed by position. A group read from XML is guaranteed
/// to have declared ids 0, 1, 2, ... in order; groups built in code are not
/// checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextGroup {
    id: i32,
    strings: Vec<String>,
}

impl TextGroup {
    /// Create an empty group
    pub fn new(id: i32) -> Self {
        Self {
            id,
            strings: Vec::new(),
        }
    }

    /// Create a group holding the given strings in order
    pub fn with_strings<I, S>(id: i32, strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            strings: strings.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// Append a string; it takes the next free index
    pub fn add(&mut self, text: impl Into<String>) {
        self.strings.push(text.into());
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub(crate) fn strings_mut(&mut self) -> &mut [String] {
        &mut self.strings
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }
}

/// An in-memory text resource: a name, the `indexWithCounts` flag and the
/// groups in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextResource {
    name: String,
    index_with_counts: bool,
    groups: Vec<TextGroup>,
}

impl Default for TextResource {
    fn default() -> Self {
        Self {
            name: String::new(),
            index_with_counts: true,
            groups: Vec::new(),
        }
    }
}

impl TextResource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty resource with the given name
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn index_with_counts(&self) -> bool {
        self.index_with_counts
    }

    pub fn set_index_with_counts(&mut self, value: bool) {
        self.index_with_counts = value;
    }

    pub fn groups(&self) -> &[TextGroup] {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut Vec<TextGroup> {
        &mut self.groups
    }

    /// Append a group after the existing ones
    pub fn add_group(&mut self, group: TextGroup) {
        self.groups.push(group);
    }

    /// First group with the given ID
    pub fn group(&self, id: i32) -> Option<&TextGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn group_mut(&mut self, id: i32) -> Option<&mut TextGroup> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    /// Look up a string by group ID and index
    pub fn get(&self, group_id: i32, index: usize) -> Option<&str> {
        self.group(group_id).and_then(|g| g.get(index))
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of strings across all groups
    pub fn string_count(&self) -> usize {
        self.groups.iter().map(TextGroup::len).sum()
    }
}
