//! Behavior shared by every Atom element.
//!
//! Each element type owns an [`Extensions`] value holding its attribute list
//! and its foreign children, and implements [`Element::build`] to add its own
//! structural content. Rendering and serialization are provided once by the
//! trait.

use std::fmt;

use thiserror::Error;

use crate::{
    attributes::Attributes,
    config::WriteOptions,
    util::date_time::DateTimeError,
    xml::{
        writer::{self, WriteError},
        XmlElement,
    },
};

/// List of errors for this module.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A required field is unset or empty.
    #[error("`{field}` is required in <{element}>")]
    MissingRequiredField {
        /// Name of the field.
        field: &'static str,
        /// Kind of element.
        element: &'static str,
    },
    /// Mutually exclusive fields are both set.
    #[error("`{}` and `{}` cannot both be set in <{}>", .fields.0, .fields.1, .element)]
    ConflictingFields {
        /// Names of the fields.
        fields: (&'static str, &'static str),
        /// Kind of element.
        element: &'static str,
    },
    /// Date/time error.
    #[error(transparent)]
    DateTime(#[from] DateTimeError),
    /// Serialization error.
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Attributes and foreign children attached to an element.
#[derive(Debug, Default)]
pub struct Extensions {
    /// Arbitrary attributes, emitted before the element's own attributes.
    pub attributes: Attributes,
    /// Arbitrary elements, rendered after the element's own content.
    pub foreign: Vec<Box<dyn Element>>,
}

/// An element that renders to an [`XmlElement`].
pub trait Element: fmt::Debug {
    /// Tag name of the rendered element.
    fn name(&self) -> &str;

    /// Attributes and foreign children.
    fn xml(&self) -> &Extensions;

    /// Mutable attributes and foreign children.
    fn xml_mut(&mut self) -> &mut Extensions;

    /// Validate the element and append its structural attributes and
    /// children to `element`.
    fn build(&self, element: &mut XmlElement) -> Result<(), RenderError>;

    /// Append an arbitrary attribute.
    fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>)
    where
        Self: Sized,
    {
        self.xml_mut().attributes.set(key, value);
    }

    /// Value of the first arbitrary attribute named `key`.
    fn attr(&self, key: &str) -> Option<&str> {
        self.xml().attributes.get(key)
    }

    /// Append a foreign child.
    fn add_foreign<E>(&mut self, element: E)
    where
        E: Element + 'static,
        Self: Sized,
    {
        self.xml_mut().foreign.push(Box::new(element));
    }

    /// Build a fresh XML tree for this element.
    ///
    /// Fails on the first invalid element, including foreign children.
    fn render(&self) -> Result<XmlElement, RenderError> {
        let mut element = XmlElement::new(self.name());

        for (key, value) in self.xml().attributes.iter() {
            element.attributes.set(key, value);
        }

        self.build(&mut element)?;

        for child in &self.xml().foreign {
            element.push_element(child.render()?);
        }

        tracing::trace!("rendered <{}>", element.name);

        Ok(element)
    }

    /// Render and write as text with the default [`WriteOptions`].
    fn serialize(&self) -> Result<String, RenderError> {
        self.serialize_with(&WriteOptions::default())
    }

    /// Render and write as text.
    fn serialize_with(&self, options: &WriteOptions) -> Result<String, RenderError> {
        Ok(writer::write(&self.render()?, options)?)
    }
}

/// Return the value if it is a non-empty string.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Return the value of a required field.
pub(crate) fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
    element: &'static str,
) -> Result<&'a str, RenderError> {
    non_empty(value).ok_or(RenderError::MissingRequiredField { field, element })
}

/// Append `<name>text</name>` if the text is non-empty.
pub(crate) fn push_text_element(parent: &mut XmlElement, name: &str, text: &Option<String>) {
    if let Some(text) = non_empty(text) {
        let mut element = XmlElement::new(name);
        element.push_text(text);
        parent.push_element(element);
    }
}
