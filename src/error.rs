use thiserror::Error;

use crate::xmldoc::Node;

/// A structural problem found while scanning.
///
/// The message of each variant is what [`XmlDoc::err_desc`](crate::XmlDoc::err_desc)
/// reports for a document that failed to scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The input holds neither a declaration nor an element.
    #[error("no prolog nor root element found")]
    NoPrologNorRoot,
    /// There is a declaration but no element.
    #[error("no root element found")]
    NoRoot,
    /// Input ended while an element was still open.
    #[error("some element not properly terminated")]
    Unterminated,
    /// `<?xml` at the start of the input without a closing `?>`.
    #[error("incomplete XML declaration")]
    IncompleteDeclaration,
    /// The attributes of the XML declaration could not be read.
    #[error("invalid XML declaration")]
    InvalidDeclaration,
    /// A tag name that does not start with a name character.
    #[error("invalid element name at byte {0}")]
    InvalidElementName(usize),
    /// Undecodable bytes where a name is expected.
    #[error("invalid byte in element name at byte {0}")]
    InvalidByteInName(usize),
    /// An attribute without `=` or without a quoted value.
    #[error("malformed attribute at byte {0}")]
    MalformedAttribute(usize),
    /// A tag without its closing `>`.
    #[error("unterminated tag at byte {0}")]
    UnterminatedTag(usize),
    /// `<!--` without `-->`.
    #[error("unterminated comment at byte {0}")]
    UnterminatedComment(usize),
    /// `<![CDATA[` without `]]>`.
    #[error("unterminated CDATA section at byte {0}")]
    UnterminatedCdata(usize),
    /// Non-whitespace text before the root element.
    #[error("text found outside of root element at byte {0}")]
    TextOutsideRoot(usize),
    /// A comment before the root element in a document without declaration.
    #[error("comment found before root element without XML declaration")]
    OrphanComment,
    /// A CDATA section before the root element in a document without declaration.
    #[error("CDATA section found before root element without XML declaration")]
    OrphanCdata,
    /// An unrecognized construct before the root element in a document without declaration.
    #[error("unrecognized construct found before root element without XML declaration")]
    OrphanUnknown,
    /// An end tag whose name differs from the open element.
    #[error("end tag </{found}> does not match open element <{expected}>")]
    MismatchedCloseTag { expected: String, found: String },
    /// An end tag while no element is open.
    #[error("end tag </{0}> without open element")]
    UnexpectedCloseTag(String),
}

/// Errors of tree manipulation and of loading input.
#[derive(Debug, Error)]
pub enum Error {
    /// The backing file could not be read.
    #[error("cannot access file")]
    CannotAccessFile(#[source] std::io::Error),
    /// The backing stream could not be read.
    #[error("cannot access stream")]
    CannotAccessStream(#[source] std::io::Error),
    /// The input could not be scanned.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// Children can only be added to generic elements.
    #[error("node {0:?} is not a generic element and cannot have children")]
    NotAContainer(Node),
    /// Attributes only exist on named elements.
    #[error("node {0:?} has no name and cannot have attributes")]
    NotNamed(Node),
    /// The node already has a parent or is the document root.
    #[error("node {0:?} is already attached")]
    AlreadyAttached(Node),
    /// The arena refused the operation, for instance to create a cycle.
    #[error(transparent)]
    Tree(#[from] indextree::NodeError),
}
