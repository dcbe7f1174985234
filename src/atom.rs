//! Atom entry elements.
//!
//! The structures follow the [RFC 4287](https://www.rfc-editor.org/rfc/rfc4287) specification.
//! Every structure implements [`Element`](crate::element::Element).

mod category;
mod content;
mod entry;
mod link;
mod person;
mod simple;
mod verbatim;

pub use category::Category;
pub use content::Content;
pub use entry::Entry;
pub use link::Link;
pub use person::Person;
pub use simple::SimpleElement;
pub use verbatim::Verbatim;

/// XML namespace for Atom documents.
pub const XMLNS: &str = "http://www.w3.org/2005/Atom";
