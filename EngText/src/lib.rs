//! # engtext
//!
//! A pure-Rust library for grouped text-resource files: numbered groups of
//! strings indexed from zero, stored as XML.
//!
//! ## Quick Start
//!
//! ```no_run
//! use engtext::formats::text::{read_text_xml, write_text_xml};
//!
//! let mut resource = read_text_xml("c3_eng.xml")?;
//! println!("{} groups, {} strings", resource.len(), resource.string_count());
//!
//! resource.set_string(5, 0, "Hello");
//! write_text_xml("c3_eng.xml", &resource)?;
//! # Ok::<(), engtext::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! ```
//! use engtext::prelude::*;
//!
//! let resource = parse_text_xml_str(r#"<strings><group id="1"><string id="0">A</string></group></strings>"#)?;
//! assert_eq!(resource.get(1, 0), Some("A"));
//! # Ok::<(), engtext::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `engtext` command-line binary

pub mod converter;
pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::text::{
        SearchMatch, TextGroup, TextResource, WriteOptions, parse_text_xml_reader,
        parse_text_xml_str, read_text_xml, read_text_xml_into, to_xml_string, write_text_xml,
        write_text_xml_to, write_text_xml_with_options,
    };

    pub use crate::converter;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
