use crate::{
    element::{non_empty, required, Element, Extensions, RenderError},
    xml::XmlElement,
};

/// Link.
///
/// ```text
/// atomLink =
///    element atom:link {
///       atomCommonAttributes,
///       attribute href { atomUri },
///       attribute rel { atomNCName | atomUri }?,
///       attribute title { text }?,
///       undefinedContent
///   }
/// ```
#[derive(Debug, Default)]
pub struct Link {
    /// Target IRI. Required.
    pub href: Option<String>,
    /// Human-readable title.
    pub title: Option<String>,
    /// Link relation, e.g. `alternate` or `self`.
    pub rel: Option<String>,
    /// Attributes and foreign children.
    pub xml: Extensions,
}

impl Link {
    /// Create a link to `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Default::default()
        }
    }
}

impl Element for Link {
    fn name(&self) -> &str {
        "link"
    }

    fn xml(&self) -> &Extensions {
        &self.xml
    }

    fn xml_mut(&mut self) -> &mut Extensions {
        &mut self.xml
    }

    fn build(&self, element: &mut XmlElement) -> Result<(), RenderError> {
        let href = required(&self.href, "href", "link")?;
        element.attributes.set("href", href);
        if let Some(title) = non_empty(&self.title) {
            element.attributes.set("title", title);
        }
        if let Some(rel) = non_empty(&self.rel) {
            element.attributes.set("rel", rel);
        }
        Ok(())
    }
}
