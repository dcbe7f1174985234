//! Options for writing and parsing entries.

use serde::Deserialize;

/// Options for [`Element::serialize_with`](crate::element::Element::serialize_with).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct WriteOptions {
    /// Prefix the output with an XML declaration.
    pub declaration: bool,

    /// Indent nested elements with this number of spaces.
    ///
    /// If set to `None`, the output is written on a single line.
    ///
    /// Indentation is inserted between any two nodes, so an element mixing
    /// text and child elements does not read back with the same text.
    pub indent: Option<usize>,

    /// Write childless elements as a start and end tag pair instead of a
    /// self-closing tag.
    pub expand_empty: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            declaration: false,
            indent: None,
            expand_empty: true,
        }
    }
}

/// Options for [`Parser`](crate::parse::Parser).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct ParseOptions {
    /// Keep unknown children of `<entry>` as foreign elements instead of
    /// dropping them.
    pub preserve_foreign: bool,
}
