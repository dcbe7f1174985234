use crate::{
    element::{push_text_element, required, Element, Extensions, RenderError},
    xml::XmlElement,
};

/// Person construct, rendered as `<author>` or `<contributor>`.
///
/// ```text
/// atomPersonConstruct =
///    atomCommonAttributes,
///    (element atom:name { text }
///     & element atom:uri { atomUri }?
///     & element atom:email { atomEmailAddress }?
///     & extensionElement*)
/// ```
#[derive(Debug)]
pub struct Person {
    /// Tag name, `author` by default.
    pub tag_name: String,
    /// Human-readable name. Required.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// IRI associated with the person.
    pub uri: Option<String>,
    /// Attributes and foreign children.
    pub xml: Extensions,
}

impl Person {
    /// Tag name of authors.
    pub const AUTHOR: &'static str = "author";

    /// Tag name of contributors.
    pub const CONTRIBUTOR: &'static str = "contributor";

    /// Create an author.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Create a contributor.
    pub fn contributor(name: impl Into<String>) -> Self {
        Self {
            tag_name: Self::CONTRIBUTOR.to_owned(),
            ..Self::new(name)
        }
    }
}

impl Default for Person {
    fn default() -> Self {
        Self {
            tag_name: Self::AUTHOR.to_owned(),
            name: None,
            email: None,
            uri: None,
            xml: Extensions::default(),
        }
    }
}

impl Element for Person {
    fn name(&self) -> &str {
        &self.tag_name
    }

    fn xml(&self) -> &Extensions {
        &self.xml
    }

    fn xml_mut(&mut self) -> &mut Extensions {
        &mut self.xml
    }

    fn build(&self, element: &mut XmlElement) -> Result<(), RenderError> {
        required(&self.name, "name", "person")?;
        push_text_element(element, "name", &self.name);
        push_text_element(element, "email", &self.email);
        push_text_element(element, "uri", &self.uri);
        Ok(())
    }
}
