use crate::{
    element::{Element, Extensions, RenderError},
    xml::XmlElement,
};

/// Arbitrary XML re-emitted as is.
///
/// The parser uses it to keep unknown children of an entry.
#[derive(Debug, Default)]
pub struct Verbatim {
    /// Element to emit.
    pub element: XmlElement,
    /// Attributes and foreign children, added on top of `element`.
    pub xml: Extensions,
}

impl Verbatim {
    /// Wrap an XML element.
    pub fn new(element: XmlElement) -> Self {
        Self {
            element,
            ..Default::default()
        }
    }
}

impl From<XmlElement> for Verbatim {
    fn from(element: XmlElement) -> Self {
        Self::new(element)
    }
}

impl Element for Verbatim {
    fn name(&self) -> &str {
        &self.element.name
    }

    fn xml(&self) -> &Extensions {
        &self.xml
    }

    fn xml_mut(&mut self) -> &mut Extensions {
        &mut self.xml
    }

    fn build(&self, element: &mut XmlElement) -> Result<(), RenderError> {
        for (key, value) in self.element.attributes.iter() {
            element.attributes.set(key, value);
        }
        element.children.extend(self.element.children.iter().cloned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Verbatim;
    use crate::{atom::SimpleElement, element::Element, xml::reader};

    #[test]
    fn serialize() {
        let element = reader::read("<cc:license xmlns:cc=\"http://creativecommons.org/ns#\">by <b>sa</b></cc:license>")
            .unwrap();

        let mut verbatim = Verbatim::new(element);
        verbatim.set_attr("xml:lang", "en");
        verbatim.add_foreign(SimpleElement::new("note", "x"));

        assert_eq!(
            verbatim.serialize().unwrap(),
            "<cc:license xml:lang=\"en\" xmlns:cc=\"http://creativecommons.org/ns#\">by <b>sa</b><note>x</note></cc:license>"
        );
    }
}
