//! A minimal XML tree.
//!
//! Elements render to, and the parser walks, this tree. Reading and writing
//! text goes through [`quick_xml`] in the [`reader`] and [`writer`]
//! submodules.

pub mod reader;
pub mod writer;

use crate::{attributes::Attributes, config::WriteOptions};

/// An XML element with its attributes and children.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct XmlElement {
    /// Qualified tag name, prefix included.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Attributes,
    /// Child nodes in document order.
    pub children: Vec<XmlNode>,
}

/// A child node of an [`XmlElement`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum XmlNode {
    /// Nested element.
    Element(XmlElement),
    /// Unescaped character data.
    Text(String),
}

impl XmlElement {
    /// Create an element without attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Tag name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Value of the first attribute named `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// Append a child element.
    pub fn push_element(&mut self, element: XmlElement) {
        self.children.push(XmlNode::Element(element));
    }

    /// Append a text node.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(XmlNode::Text(text.into()));
    }

    /// Iterate over immediate child elements.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Content of the first text child.
    pub fn text(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            XmlNode::Text(text) => Some(text.as_str()),
            XmlNode::Element(_) => None,
        })
    }

    /// First descendant element with the given local name, depth first.
    pub fn find(&self, local_name: &str) -> Option<&XmlElement> {
        self.elements().find_map(|element| {
            if element.local_name() == local_name {
                Some(element)
            } else {
                element.find(local_name)
            }
        })
    }

    /// Serialize the children of this element, without the element itself.
    pub fn inner_xml(&self) -> Result<String, writer::WriteError> {
        let options = WriteOptions::default();
        self.children
            .iter()
            .map(|node| match node {
                XmlNode::Element(element) => writer::write(element, &options),
                XmlNode::Text(text) => Ok(writer::escape(text)),
            })
            .collect()
    }
}
