//! Parse `<entry>` documents.
//!
//! The document is first read into an [`XmlElement`] tree, then the
//! immediate children of the root are dispatched on their local name. Unknown
//! children are dropped unless [`ParseOptions::preserve_foreign`] is set.
//! No field is validated here: required and exclusive fields are only checked
//! when rendering.

use thiserror::Error;

use crate::{
    atom::{Category, Content, Entry, Link, Person, Verbatim},
    config::ParseOptions,
    util::date_time::{DateTime, DateTimeError},
    xml::{
        reader::{self, ReadError},
        writer::WriteError,
        XmlElement, XmlNode,
    },
};

/// List of errors for this module.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not well-formed XML.
    #[error("malformed XML")]
    MalformedXml(#[from] ReadError),
    /// The root element is not `<entry>`.
    #[error("expected <entry> as root element, found <{found}>")]
    InvalidRootElement {
        /// Tag name of the root element.
        found: String,
    },
    /// An element cannot be converted to the requested type.
    #[error("expected <{expected}>, found <{found}>")]
    InvalidChildType {
        /// Expected tag name.
        expected: &'static str,
        /// Tag name of the element.
        found: String,
    },
    /// A date element holds an invalid date.
    #[error("invalid <{field}> date `{value}`")]
    InvalidDate {
        /// Tag name of the date element.
        field: &'static str,
        /// Text of the date element.
        value: String,
        /// Source error.
        source: DateTimeError,
    },
    /// Inline content could not be captured.
    #[error("failed to capture <content> markup")]
    Markup(#[from] WriteError),
}

/// Parse an `<entry>` document with default options.
pub fn parse_entry(input: &str) -> Result<Entry, ParseError> {
    Parser::default().parse(input)
}

/// Entry parser.
#[derive(Debug, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    /// Create a parser.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse an `<entry>` document.
    pub fn parse(&self, input: &str) -> Result<Entry, ParseError> {
        let root = reader::read(input)?;
        self.parse_element(&root)
    }

    /// Build an entry from an already parsed `<entry>` element.
    pub fn parse_element(&self, root: &XmlElement) -> Result<Entry, ParseError> {
        if root.local_name() != "entry" {
            return Err(ParseError::InvalidRootElement {
                found: root.name.clone(),
            });
        }

        let mut entry = Entry::empty();

        // Foreign children may use prefixes declared on the root.
        if self.options.preserve_foreign {
            for (key, value) in root.attributes.iter() {
                if key == "xmlns" || key.starts_with("xmlns:") {
                    entry.xml.attributes.set(key, value);
                }
            }
        }

        for child in root.elements() {
            match child.local_name() {
                "id" => entry.id = text(child),
                "title" => entry.title = text(child),
                "summary" => entry.summary = text(child),
                "rights" => entry.rights = text(child),
                "updated" => entry.updated = date(child, "updated")?,
                "published" => entry.published = date(child, "published")?,
                "author" => entry.add_author(Person::try_from(child)?),
                "contributor" => entry.add_contributor(Person::try_from(child)?),
                "category" => entry.add_category(Category::try_from(child)?),
                "link" => entry.add_link(Link::try_from(child)?),
                "content" => entry.content = Some(Content::try_from(child)?),
                _ if self.options.preserve_foreign => {
                    tracing::debug!("preserving unknown element <{}>", child.name);
                    entry.xml.foreign.push(Box::new(Verbatim::new(child.clone())));
                },
                _ => tracing::debug!("ignoring unknown element <{}>", child.name),
            }
        }

        Ok(entry)
    }
}

impl TryFrom<&XmlElement> for Person {
    type Error = ParseError;

    /// Read `<name>`, `<email>` and `<uri>` from an `<author>` or
    /// `<contributor>` element.
    fn try_from(element: &XmlElement) -> Result<Self, Self::Error> {
        let tag_name = match element.local_name() {
            Person::AUTHOR => Person::AUTHOR,
            Person::CONTRIBUTOR => Person::CONTRIBUTOR,
            _ => return Err(invalid_child_type("author", element)),
        };

        Ok(Person {
            tag_name: tag_name.to_owned(),
            name: element.find("name").and_then(text),
            email: element.find("email").and_then(text),
            uri: element.find("uri").and_then(text),
            ..Default::default()
        })
    }
}

impl TryFrom<&XmlElement> for Category {
    type Error = ParseError;

    fn try_from(element: &XmlElement) -> Result<Self, Self::Error> {
        expect(element, "category")?;

        Ok(Category {
            term: attr(element, "term"),
            label: attr(element, "label"),
            scheme: attr(element, "scheme"),
            ..Default::default()
        })
    }
}

impl TryFrom<&XmlElement> for Link {
    type Error = ParseError;

    fn try_from(element: &XmlElement) -> Result<Self, Self::Error> {
        expect(element, "link")?;

        Ok(Link {
            href: attr(element, "href"),
            title: attr(element, "title"),
            rel: attr(element, "rel"),
            ..Default::default()
        })
    }
}

impl TryFrom<&XmlElement> for Content {
    type Error = ParseError;

    /// Inline content holding elements is captured as markup, otherwise as
    /// text.
    fn try_from(element: &XmlElement) -> Result<Self, Self::Error> {
        expect(element, "content")?;

        let src = attr(element, "src");

        let value = match src {
            Some(_) => None,
            None if element.elements().next().is_some() => {
                tracing::debug!("capturing <content> markup");
                Some(element.inner_xml()?)
            },
            None => Some(text_content(element)).filter(|s| !s.is_empty()),
        };

        Ok(Content {
            r#type: attr(element, "type"),
            src,
            value,
            ..Default::default()
        })
    }
}

/// Check the local name of an element.
fn expect(element: &XmlElement, expected: &'static str) -> Result<(), ParseError> {
    if element.local_name() == expected {
        Ok(())
    } else {
        Err(invalid_child_type(expected, element))
    }
}

fn invalid_child_type(expected: &'static str, element: &XmlElement) -> ParseError {
    ParseError::InvalidChildType {
        expected,
        found: element.name.clone(),
    }
}

/// First text node of an element.
fn text(element: &XmlElement) -> Option<String> {
    element.text().map(str::to_owned)
}

/// All text nodes of an element, concatenated.
fn text_content(element: &XmlElement) -> String {
    element
        .children
        .iter()
        .filter_map(|node| match node {
            XmlNode::Text(text) => Some(text.as_str()),
            XmlNode::Element(_) => None,
        })
        .collect()
}

fn attr(element: &XmlElement, key: &str) -> Option<String> {
    element.attr(key).map(str::to_owned)
}

/// Parse the text of a date element. Empty elements leave the date unset.
fn date(element: &XmlElement, field: &'static str) -> Result<Option<DateTime>, ParseError> {
    let Some(value) = element.text().filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };

    DateTime::parse(value)
        .map(Some)
        .map_err(|source| ParseError::InvalidDate {
            field,
            value: value.to_owned(),
            source,
        })
}
