//! Error types for `EngText`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `EngText` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// The source or sink file could not be opened.
    #[error("unable to open {path}: {source}")]
    OpenFailed {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// IO error after the file was opened.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Document Structure Errors ====================
    /// The document has no `<strings>` root element.
    #[error("unable to find root <strings> element")]
    RootElementNotFound,

    /// Input ended while an opening tag was still expected.
    #[error("invalid XML: unexpected end of file")]
    UnexpectedEof,

    /// The next element is not the one the schema requires here.
    #[error("invalid XML: expected tag <{expected}>, got <{found}>")]
    UnexpectedTag {
        /// The tag being looked for.
        expected: String,
        /// The tag actually present.
        found: String,
    },

    /// The tokenizer rejected the input.
    #[error("invalid XML at byte {position}: {message}")]
    InvalidXml {
        /// Byte offset in the input where the problem was detected.
        position: usize,
        /// Message from the underlying XML parser.
        message: String,
    },

    /// A closing tag never appeared before the input ended.
    #[error("invalid XML: end element </{tag}> not found")]
    EndElementNotFound {
        /// The tag whose end element is missing.
        tag: String,
    },

    // ==================== ID Attribute Errors ====================
    /// A `<group>` element lacks its `id` attribute.
    #[error("group does not have an ID attribute")]
    GroupMissingId,

    /// A `<group>` element's `id` attribute is not an integer.
    #[error("group ID is not an integer: {value}")]
    GroupIdNotInteger {
        /// The raw attribute value.
        value: String,
    },

    /// A `<string>` element lacks its `id` attribute.
    #[error("string does not have an ID attribute")]
    StringMissingId,

    /// A `<string>` element's `id` attribute is not an integer.
    #[error("string ID is not an integer: {value}")]
    StringIdNotInteger {
        /// The raw attribute value.
        value: String,
    },

    /// String IDs in a group do not run 0, 1, 2, ... in document order.
    #[error("strings in group {group} are not ordered properly: expected id {expected}, found {found}")]
    StringsNotOrdered {
        /// ID of the group containing the misplaced string.
        group: i32,
        /// The index the string should have declared.
        expected: usize,
        /// The index it actually declared.
        found: i32,
    },

    // ==================== Serialization Errors ====================
    /// XML writing error.
    #[error("XML write error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

/// A specialized Result type for `EngText` operations.
pub type Result<T> = std::result::Result<T, Error>;
