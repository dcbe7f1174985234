use crate::{
    element::{non_empty, required, Element, Extensions, RenderError},
    xml::XmlElement,
};

/// Content.
///
/// Exactly one of `src` and `value` must be set when rendering.
///
/// ```text
/// atomInlineOtherContent =
///    element atom:content {
///       atomCommonAttributes,
///       attribute type { atomMediaType }?,
///       (text|anyElement)*
///    }
///
/// atomOutOfLineContent =
///    element atom:content {
///       atomCommonAttributes,
///       attribute type { atomMediaType }?,
///       attribute src { atomUri },
///       empty
///    }
/// ```
#[derive(Debug, Default)]
pub struct Content {
    /// Media type, or one of `text`, `html` and `xhtml`. Required.
    pub r#type: Option<String>,
    /// IRI of out-of-line content.
    pub src: Option<String>,
    /// Inline content, written as a single text node.
    pub value: Option<String>,
    /// Attributes and foreign children.
    pub xml: Extensions,
}

impl Content {
    /// Create a content element of the given type.
    pub fn new(r#type: impl Into<String>) -> Self {
        Self {
            r#type: Some(r#type.into()),
            ..Default::default()
        }
    }

    /// Create inline content.
    pub fn inline(r#type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(r#type)
        }
    }

    /// Create out-of-line content.
    pub fn out_of_line(r#type: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Self::new(r#type)
        }
    }
}

impl Element for Content {
    fn name(&self) -> &str {
        "content"
    }

    fn xml(&self) -> &Extensions {
        &self.xml
    }

    fn xml_mut(&mut self) -> &mut Extensions {
        &mut self.xml
    }

    fn build(&self, element: &mut XmlElement) -> Result<(), RenderError> {
        let r#type = required(&self.r#type, "type", "content")?;

        match (non_empty(&self.src), non_empty(&self.value)) {
            (Some(_), Some(_)) => Err(RenderError::ConflictingFields {
                fields: ("src", "content"),
                element: "content",
            }),
            (None, None) => Err(RenderError::MissingRequiredField {
                field: "content",
                element: "content",
            }),
            (Some(src), None) => {
                element.attributes.set("type", r#type);
                element.attributes.set("src", src);
                Ok(())
            },
            (None, Some(value)) => {
                element.attributes.set("type", r#type);
                element.push_text(value);
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Content;
    use crate::element::{Element, RenderError};

    #[test]
    fn type_is_required() {
        let content = Content {
            value: Some("Blah".to_owned()),
            ..Default::default()
        };

        assert!(matches!(
            content.serialize(),
            Err(RenderError::MissingRequiredField {
                field: "type",
                element: "content"
            })
        ));
    }

    #[test]
    fn src_and_value_are_exclusive() {
        let mut content = Content::new("text/plain");
        assert!(matches!(
            content.serialize(),
            Err(RenderError::MissingRequiredField {
                field: "content",
                ..
            })
        ));

        content.src = Some("http://gnu.org".to_owned());
        content.value = Some("Blah".to_owned());
        assert!(matches!(
            content.serialize(),
            Err(RenderError::ConflictingFields {
                fields: ("src", "content"),
                ..
            })
        ));

        // Empty strings count as unset
        content.value = Some(String::new());
        assert_eq!(
            content.serialize().unwrap(),
            "<content type=\"text/plain\" src=\"http://gnu.org\"></content>"
        );
    }

    #[test]
    fn inline_value_is_escaped_text() {
        assert_eq!(
            Content::inline("html", "<p>Hello & bye</p>")
                .serialize()
                .unwrap(),
            "<content type=\"html\">&lt;p&gt;Hello &amp; bye&lt;/p&gt;</content>"
        );
    }

    #[test]
    fn out_of_line() {
        assert_eq!(
            Content::out_of_line("video/mp4", "http://example.org/a.mp4")
                .serialize()
                .unwrap(),
            "<content type=\"video/mp4\" src=\"http://example.org/a.mp4\"></content>"
        );
    }
}
