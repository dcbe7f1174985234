//! Read text into an [`XmlElement`] tree.
//!
//! This module uses [`quick_xml`] under the hood.

use quick_xml::{
    events::{attributes::AttrError, BytesStart, Event},
    Reader,
};
use thiserror::Error;

use super::XmlElement;

/// List of errors for this module.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Syntax or well-formedness error reported by [`quick_xml`].
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
    /// Malformed attribute.
    #[error(transparent)]
    Attr(#[from] AttrError),
    /// Tag names and character data must be UTF-8.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
    /// The document has no root element.
    #[error("no root element")]
    NoRoot,
    /// A second element was found after the root element.
    #[error("unexpected element `{0}` after the root element")]
    MultipleRoots(String),
    /// Character data outside the root element.
    #[error("unexpected text outside the root element")]
    TextOutsideRoot,
    /// An end tag without a matching start tag.
    #[error("unexpected end tag `{0}`")]
    UnexpectedEnd(String),
    /// The input ended before an element was closed.
    #[error("element `{0}` is not closed")]
    Unclosed(String),
}

/// Parse a document and return its root element.
///
/// Comments, processing instructions, declarations and doctypes are
/// skipped. CDATA sections become text nodes.
pub fn read(input: &str) -> Result<XmlElement, ReadError> {
    let mut reader = Reader::from_str(input);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(bytes) => {
                let element = new_element(&bytes)?;
                if stack.is_empty() && root.is_some() {
                    return Err(ReadError::MultipleRoots(element.name));
                }
                stack.push(element);
            },
            Event::Empty(bytes) => {
                let element = new_element(&bytes)?;
                close(&mut stack, &mut root, element)?;
            },
            Event::End(bytes) => {
                let Some(element) = stack.pop() else {
                    let name = String::from_utf8(bytes.name().as_ref().to_vec())?;
                    return Err(ReadError::UnexpectedEnd(name));
                };
                close(&mut stack, &mut root, element)?;
            },
            Event::Text(bytes) => {
                let text = bytes.unescape()?;
                match stack.last_mut() {
                    Some(parent) => parent.push_text(text),
                    None if text.trim().is_empty() => {},
                    None => return Err(ReadError::TextOutsideRoot),
                }
            },
            Event::CData(bytes) => {
                let text = String::from_utf8(bytes.into_inner().into_owned())?;
                match stack.last_mut() {
                    Some(parent) => parent.push_text(text),
                    None => return Err(ReadError::TextOutsideRoot),
                }
            },
            _ => {},
        }
    }

    if let Some(element) = stack.pop() {
        return Err(ReadError::Unclosed(element.name));
    }

    root.ok_or(ReadError::NoRoot)
}

/// Create an element from a start tag.
fn new_element(bytes: &BytesStart) -> Result<XmlElement, ReadError> {
    let mut element = XmlElement::new(String::from_utf8(bytes.name().as_ref().to_vec())?);

    for attribute in bytes.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8(attribute.key.as_ref().to_vec())?;
        let value = attribute.unescape_value()?;
        element.attributes.set(key, value);
    }

    Ok(element)
}

/// Attach a finished element to its parent, or make it the root.
fn close(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), ReadError> {
    match stack.last_mut() {
        Some(parent) => parent.push_element(element),
        None if root.is_some() => return Err(ReadError::MultipleRoots(element.name)),
        None => *root = Some(element),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::read;
    use crate::xml::XmlNode;

    #[test]
    fn tree() {
        let root = read(concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<!-- comment -->\n",
            "<entry xmlns=\"http://www.w3.org/2005/Atom\">",
            "<title>Fish &amp; Chips</title>",
            "<link href=\"http://example.org/?a=1&amp;b=2\" rel=\"self\"/>",
            "<summary><![CDATA[<b>bold</b>]]></summary>",
            "</entry>\n",
        ))
        .unwrap();

        assert_eq!(root.name, "entry");
        assert_eq!(root.attr("xmlns"), Some("http://www.w3.org/2005/Atom"));

        let children: Vec<_> = root.elements().collect();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].text(), Some("Fish & Chips"));
        assert_eq!(children[1].attr("href"), Some("http://example.org/?a=1&b=2"));
        assert_eq!(children[1].attr("rel"), Some("self"));
        assert!(children[1].children.is_empty());
        assert_eq!(
            children[2].children,
            [XmlNode::Text("<b>bold</b>".to_owned())]
        );
    }

    #[test]
    fn malformed() {
        const CASES: [&str; 7] = [
            "",
            "not xml",
            "<entry>",
            "<entry></feed>",
            "<entry/><entry/>",
            "<entry></entry>trailing",
            "</entry>",
        ];

        for input in CASES {
            assert!(read(input).is_err(), "read({input:?}) should fail");
        }
    }
}
