use indextree::{Arena, NodeId};

use crate::error::Error;
use crate::prolog::Prolog;
use crate::xmlvalue::Value;

pub(crate) type XmlArena = Arena<Value>;

/// A node in the XML tree.
/// This is a lightweight handle and can be copied.
///
/// A node is only meaningful together with the [`XmlDoc`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// An XML document: a prolog, a root element and the arena that stores every
/// node created through the document.
///
/// Loading never fails outright. A document that could not be read or scanned
/// reports it through [`XmlDoc::is_ok`] and [`XmlDoc::err_desc`], and may still
/// hold whatever was built before the problem was found.
///
/// `XmlDoc` is implemented in several sections focusing on different aspects
/// of accessing and manipulating the tree.
pub struct XmlDoc {
    pub(crate) arena: XmlArena,
    pub(crate) prolog: Prolog,
    pub(crate) root: Option<Node>,
    pub(crate) error: Option<Error>,
}

impl XmlDoc {
    /// Create an empty document without prolog or root.
    pub fn new() -> Self {
        XmlDoc {
            arena: XmlArena::new(),
            prolog: Prolog::default(),
            root: None,
            error: None,
        }
    }

    /// Create a document from a prolog and a generic root element.
    ///
    /// ```rust
    /// use xmllex::{Prolog, XmlDoc};
    ///
    /// let mut doc = XmlDoc::with_root(Prolog::with_version("1.0"), "grandma");
    /// let root = doc.root().unwrap();
    /// let mom = doc.new_element("mom");
    /// doc.give_birth(root, mom)?;
    /// assert_eq!(
    ///     doc.to_xml(),
    ///     "<?xml version=\"1.0\"?>\n<grandma>\n  <mom></mom>\n</grandma>\n"
    /// );
    /// # Ok::<(), xmllex::Error>(())
    /// ```
    pub fn with_root(prolog: Prolog, root_name: &str) -> Self {
        let mut doc = XmlDoc::new();
        doc.prolog = prolog;
        let root = doc.new_element(root_name);
        doc.root = Some(root);
        doc
    }

    #[inline]
    pub(crate) fn arena(&self) -> &XmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut XmlArena {
        &mut self.arena
    }

    /// True if loading and scanning succeeded.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Human-readable description of what went wrong, if anything.
    pub fn err_desc(&self) -> Option<String> {
        self.error.as_ref().map(|error| error.to_string())
    }

    /// The error recorded while loading, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// The root element, if there is one.
    pub fn root(&self) -> Option<Node> {
        self.root
    }

    /// The prolog.
    pub fn prolog(&self) -> &Prolog {
        &self.prolog
    }

    /// Mutable access to the prolog.
    pub fn prolog_mut(&mut self) -> &mut Prolog {
        &mut self.prolog
    }
}

impl Default for XmlDoc {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for XmlDoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlDoc")
            .field("prolog", &self.prolog)
            .field("root", &self.root)
            .field("error", &self.err_desc())
            .finish()
    }
}
