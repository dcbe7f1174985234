//! Write an [`XmlElement`] tree as text.
//!
//! This module uses [`quick_xml`] under the hood.

use std::borrow::Cow;

use quick_xml::{
    events::{BytesEnd, BytesStart, BytesText, Event},
    Writer,
};
use thiserror::Error;

use super::{XmlElement, XmlNode};
use crate::config::WriteOptions;

/// Preamble of the XML file.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

/// List of errors for this module.
#[derive(Debug, Error)]
pub enum WriteError {
    /// XML writer error.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
    /// The writer produced invalid UTF-8.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serialize an element and its descendants.
pub fn write(element: &XmlElement, options: &WriteOptions) -> Result<String, WriteError> {
    let mut writer = match options.indent {
        Some(indent) => Writer::new_with_indent(Vec::new(), b' ', indent),
        None => Writer::new(Vec::new()),
    };

    write_element(&mut writer, element, options)?;

    let output = String::from_utf8(writer.into_inner())?;

    if !options.declaration {
        return Ok(output);
    }

    if options.indent.is_some() {
        Ok(format!("{}\n{}", XML_DECLARATION, output))
    } else {
        Ok(format!("{}{}", XML_DECLARATION, output))
    }
}

/// Escape character data the way text nodes are written.
pub(crate) fn escape(text: &str) -> String {
    quick_xml::escape::partial_escape(text).into_owned()
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &XmlElement,
    options: &WriteOptions,
) -> Result<(), WriteError> {
    let mut start = BytesStart::new(element.name.as_str());
    for attribute in element.attributes.iter() {
        start.push_attribute(attribute);
    }

    if element.children.is_empty() && !options.expand_empty {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;

    for node in &element.children {
        match node {
            XmlNode::Element(child) => write_element(writer, child, options)?,
            XmlNode::Text(text) => {
                let escaped = Cow::Owned(escape(text));
                writer.write_event(Event::Text(BytesText::from_escaped(escaped)))?;
            },
        }
    }

    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;

    Ok(())
}
