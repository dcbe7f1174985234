use crate::{
    element::{non_empty, required, Element, Extensions, RenderError},
    xml::XmlElement,
};

/// Category.
///
/// ```text
/// atomCategory =
///    element atom:category {
///       atomCommonAttributes,
///       attribute term { text },
///       attribute scheme { atomUri }?,
///       attribute label { text }?,
///       undefinedContent
///    }
/// ```
#[derive(Debug, Default)]
pub struct Category {
    /// Category identifier. Required.
    pub term: Option<String>,
    /// Human-readable label.
    pub label: Option<String>,
    /// IRI of the categorization scheme.
    pub scheme: Option<String>,
    /// Attributes and foreign children.
    pub xml: Extensions,
}

impl Category {
    /// Create a category with a term.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            ..Default::default()
        }
    }
}

impl Element for Category {
    fn name(&self) -> &str {
        "category"
    }

    fn xml(&self) -> &Extensions {
        &self.xml
    }

    fn xml_mut(&mut self) -> &mut Extensions {
        &mut self.xml
    }

    fn build(&self, element: &mut XmlElement) -> Result<(), RenderError> {
        let term = required(&self.term, "term", "category")?;
        element.attributes.set("term", term);
        if let Some(label) = non_empty(&self.label) {
            element.attributes.set("label", label);
        }
        if let Some(scheme) = non_empty(&self.scheme) {
            element.attributes.set("scheme", scheme);
        }
        Ok(())
    }
}
