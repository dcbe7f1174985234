use super::{Category, Content, Link, Person, XMLNS};
use crate::{
    element::{push_text_element, Element, Extensions, RenderError},
    util::date_time::DateTime,
    xml::XmlElement,
};

/// Entry.
///
/// Children are rendered in a fixed order: `title`, `id`, `updated`,
/// `published`, `rights`, `summary`, authors, contributors, categories,
/// links, `content`, then foreign children.
///
/// ```text
/// atomEntry =
///    element atom:entry {
///       atomCommonAttributes,
///       (atomAuthor*
///        & atomCategory*
///        & atomContent?
///        & atomContributor*
///        & atomId
///        & atomLink*
///        & atomPublished?
///        & atomRights?
///        & atomSummary?
///        & atomTitle
///        & atomUpdated
///        & extensionElement*)
///    }
/// ```
#[derive(Debug)]
pub struct Entry {
    /// Title.
    pub title: Option<String>,
    /// Permanent identifier.
    pub id: Option<String>,
    /// Last modification, the creation time by default.
    pub updated: Option<DateTime>,
    /// First publication.
    pub published: Option<DateTime>,
    /// Authors.
    pub authors: Vec<Person>,
    /// Contributors.
    pub contributors: Vec<Person>,
    /// Categories.
    pub categories: Vec<Category>,
    /// Links.
    pub links: Vec<Link>,
    /// Short summary.
    pub summary: Option<String>,
    /// Copyright statement.
    pub rights: Option<String>,
    /// Content.
    pub content: Option<Content>,
    /// Attributes and foreign children.
    pub xml: Extensions,
}

impl Entry {
    /// Create an entry with a title, updated now.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Create an entry with no field set, `updated` included.
    pub fn empty() -> Self {
        Self {
            title: None,
            id: None,
            updated: None,
            published: None,
            authors: Vec::new(),
            contributors: Vec::new(),
            categories: Vec::new(),
            links: Vec::new(),
            summary: None,
            rights: None,
            content: None,
            xml: Extensions::default(),
        }
    }

    /// Declare the Atom namespace on the entry.
    pub fn with_namespace(mut self) -> Self {
        self.set_attr("xmlns", XMLNS);
        self
    }

    /// Append an author.
    pub fn add_author(&mut self, author: Person) {
        self.authors.push(author);
    }

    /// Append a contributor, renaming its tag to `contributor`.
    pub fn add_contributor(&mut self, mut contributor: Person) {
        contributor.tag_name = Person::CONTRIBUTOR.to_owned();
        self.contributors.push(contributor);
    }

    /// Append a category.
    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Append a link.
    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            updated: Some(DateTime::now()),
            ..Self::empty()
        }
    }
}

impl Element for Entry {
    fn name(&self) -> &str {
        "entry"
    }

    fn xml(&self) -> &Extensions {
        &self.xml
    }

    fn xml_mut(&mut self) -> &mut Extensions {
        &mut self.xml
    }

    fn build(&self, element: &mut XmlElement) -> Result<(), RenderError> {
        push_text_element(element, "title", &self.title);
        push_text_element(element, "id", &self.id);

        push_date_element(element, "updated", &self.updated)?;
        push_date_element(element, "published", &self.published)?;

        push_text_element(element, "rights", &self.rights);
        push_text_element(element, "summary", &self.summary);

        for author in &self.authors {
            element.push_element(author.render()?);
        }
        for contributor in &self.contributors {
            element.push_element(contributor.render()?);
        }
        for category in &self.categories {
            element.push_element(category.render()?);
        }
        for link in &self.links {
            element.push_element(link.render()?);
        }

        if let Some(content) = &self.content {
            element.push_element(content.render()?);
        }

        Ok(())
    }
}

/// Append `<name>date</name>` if the date is set.
fn push_date_element(
    parent: &mut XmlElement,
    name: &str,
    date: &Option<DateTime>,
) -> Result<(), RenderError> {
    if let Some(date) = date {
        let mut element = XmlElement::new(name);
        element.push_text(date.to_rfc3339()?);
        parent.push_element(element);
    }
    Ok(())
}
