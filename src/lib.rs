//! A forgiving XML scanner and a small document tree.
//!
//! Input is scanned in one pass into an [`XmlDoc`]: an optional [`Prolog`]
//! and a root element with content, comment, CDATA and unrecognized children.
//! Undecodable bytes in text are replaced rather than rejected, and scanning
//! never panics; a document that could not be scanned reports why through
//! [`XmlDoc::err_desc`].
//!
//! ```rust
//! use xmllex::XmlDoc;
//!
//! let doc = XmlDoc::parse("<greeting lang='en'>  hello,\n\t world  </greeting>");
//! assert!(doc.is_ok());
//! let root = doc.root().unwrap();
//! assert_eq!(doc.body(root), "hello, world");
//! assert_eq!(doc.to_xml(), "<greeting lang=\"en\">hello, world</greeting>\n");
//! ```
//!
//! The tree can also be built and rearranged by hand, see
//! [`XmlDoc::give_birth`] and [`XmlDoc::detach`].
#![forbid(unsafe_code)]

mod access;
mod charclass;
mod codepoint;
mod content;
mod creation;
mod entity;
mod error;
mod load;
mod manipulation;
mod prolog;
mod scanner;
mod serialize;
mod source;
mod stat;
mod tag;
mod valueaccess;
mod xmldoc;
mod xmlvalue;

pub use codepoint::{decode, DecodeError, Encoding};
pub use entity::{escape, unescape};
pub use error::{Error, ScanError};
pub use prolog::Prolog;
pub use scanner::Scanner;
pub use serialize::SerializeOptions;
pub use stat::Stat;
pub use xmldoc::{Node, XmlDoc};
pub use xmlvalue::{Attribute, Cdata, Comment, Content, Element, Unknown, Value, ValueType};
