use crate::{
    element::{non_empty, Element, Extensions, RenderError},
    xml::XmlElement,
};

/// Element with a name and an optional text value.
///
/// ```text
/// element name { text? }
/// ```
#[derive(Debug, Default)]
pub struct SimpleElement {
    /// Tag name.
    pub name: String,
    /// Text content. Nothing is emitted when unset or empty.
    pub value: Option<String>,
    /// Attributes and foreign children.
    pub xml: Extensions,
}

impl SimpleElement {
    /// Create an element with a text value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Create an element without text.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Element for SimpleElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn xml(&self) -> &Extensions {
        &self.xml
    }

    fn xml_mut(&mut self) -> &mut Extensions {
        &mut self.xml
    }

    fn build(&self, element: &mut XmlElement) -> Result<(), RenderError> {
        if let Some(value) = non_empty(&self.value) {
            element.push_text(value);
        }
        Ok(())
    }
}
