//! Rendering tests.

use anyhow::Result;
use atom_entry::{
    util::date_time::Month, Category, Content, DateTime, Element, Entry, Link, Person,
    SimpleElement, WriteOptions,
};
use predicates::prelude::*;

fn entry() -> Result<Entry> {
    let mut entry = Entry::new("Atom-Powered Robots Run Amok");
    entry.id = Some("urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a".to_owned());
    entry.updated = Some(DateTime::new(2003, Month::December, 13, 18, 30, 2, 0)?);
    entry.summary = Some("Some text.".to_owned());
    entry.add_link(Link::new("http://example.org/2003/12/13/atom03"));
    Ok(entry)
}

#[test]
fn rights() -> Result<()> {
    let mut entry = Entry::new("My Post");
    entry.rights = Some("Copyright (c) 2010  Lincoln de Sousa".to_owned());

    assert_eq!(
        entry.rights.as_deref(),
        Some("Copyright (c) 2010  Lincoln de Sousa")
    );
    assert!(predicate::str::contains(
        "<rights>Copyright (c) 2010  Lincoln de Sousa</rights>"
    )
    .eval(&entry.serialize()?));

    Ok(())
}

#[test]
fn arbitrary_attributes() -> Result<()> {
    let mut entry = Entry::new("Test Post");
    entry.set_attr("xmlns:cc", "http://creativecommons.org/ns#");
    assert_eq!(entry.attr("xmlns:cc"), Some("http://creativecommons.org/ns#"));

    let mut license = SimpleElement::empty("cc:license");
    license.set_attr("rdf:resource", "http://creativecommons.org/licenses/by-sa/3.0/");
    entry.add_foreign(license);

    let xml = entry.serialize()?;

    assert!(predicate::str::starts_with(
        "<entry xmlns:cc=\"http://creativecommons.org/ns#\"><title>Test Post</title>"
    )
    .eval(&xml));
    assert!(predicate::str::ends_with(
        "<cc:license rdf:resource=\"http://creativecommons.org/licenses/by-sa/3.0/\"></cc:license></entry>"
    )
    .eval(&xml));

    Ok(())
}

#[test]
fn every_child_type_can_carry_foreign_elements() -> Result<()> {
    let mut person = Person::new("Lincoln");
    person.add_foreign(SimpleElement::new("nick", "lincoln"));

    let mut category = Category::new("rust");
    category.add_foreign(SimpleElement::new("weight", "3"));

    let mut link = Link::new("http://example.org/");
    link.add_foreign(SimpleElement::new("note", "home"));

    let mut content = Content::inline("text", "Hello");
    content.add_foreign(SimpleElement::new("extra", "world"));

    assert_eq!(
        person.serialize()?,
        "<author><name>Lincoln</name><nick>lincoln</nick></author>"
    );
    assert_eq!(
        category.serialize()?,
        "<category term=\"rust\"><weight>3</weight></category>"
    );
    assert_eq!(
        link.serialize()?,
        "<link href=\"http://example.org/\"><note>home</note></link>"
    );
    assert_eq!(
        content.serialize()?,
        "<content type=\"text\">Hello<extra>world</extra></content>"
    );

    Ok(())
}

#[test]
fn pretty_document() -> Result<()> {
    let options = WriteOptions {
        declaration: true,
        indent: Some(2),
        expand_empty: false,
    };

    assert_eq!(
        entry()?.with_namespace().serialize_with(&options)?,
        concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<entry xmlns=\"http://www.w3.org/2005/Atom\">\n",
            "  <title>Atom-Powered Robots Run Amok</title>\n",
            "  <id>urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a</id>\n",
            "  <updated>2003-12-13T18:30:02Z</updated>\n",
            "  <summary>Some text.</summary>\n",
            "  <link href=\"http://example.org/2003/12/13/atom03\"/>\n",
            "</entry>"
        )
    );

    Ok(())
}

#[test]
fn render_is_repeatable() -> Result<()> {
    let entry = entry()?;

    assert_eq!(entry.render()?, entry.render()?);
    assert_eq!(entry.serialize()?, entry.serialize()?);

    Ok(())
}

#[test]
fn invalid_content_fails_the_entry() -> Result<()> {
    let mut entry = entry()?;
    entry.content = Some(Content {
        src: Some("http://example.org/a.txt".to_owned()),
        value: Some("inline".to_owned()),
        ..Content::new("text/plain")
    });

    let error = entry.serialize().unwrap_err();
    assert_eq!(
        error.to_string(),
        "`src` and `content` cannot both be set in <content>"
    );

    Ok(())
}
