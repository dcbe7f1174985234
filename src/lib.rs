//! Build and parse Atom entries.
//!
//! An [`Entry`] and its children ([`Person`], [`Category`], [`Link`],
//! [`Content`]) are plain structures implementing [`Element`], which renders
//! them to an XML tree and serializes them to text. [`parse_entry`] reads an
//! `<entry>` document back into the same structures.
//!
//! ```
//! use atom_entry::{parse_entry, Element, Entry, Person};
//!
//! let mut entry = Entry::new("Real Soon Now").with_namespace();
//! entry.id = Some("http://cascardo.info/atom/1.atom".to_owned());
//! entry.add_author(Person::new("Thadeu Lima de Souza Cascardo"));
//!
//! let xml = entry.serialize()?;
//! let parsed = parse_entry(&xml)?;
//!
//! assert_eq!(parsed.title.as_deref(), Some("Real Soon Now"));
//! assert_eq!(parsed.updated, entry.updated);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Rendering is all-or-nothing: an invalid child fails the whole entry.
//! Parsing does not validate fields.

#![warn(missing_docs)]

pub mod atom;
pub mod attributes;
pub mod config;
pub mod element;
pub mod parse;
pub mod util;
pub mod xml;

pub use atom::{Category, Content, Entry, Link, Person, SimpleElement, Verbatim, XMLNS};
pub use attributes::Attributes;
pub use config::{ParseOptions, WriteOptions};
pub use element::{Element, Extensions, RenderError};
pub use parse::{parse_entry, ParseError, Parser};
pub use util::date_time::DateTime;
pub use xml::{XmlElement, XmlNode};
