use indextree::NodeEdge;

use crate::error::Error;
use crate::xmldoc::{Node, XmlDoc};
use crate::xmlvalue::ValueType;

/// Manipulation of the tree structure.
///
/// Children can only be appended; there is no insertion at an arbitrary
/// position. Only generic elements have children. A node is either attached
/// (it has a parent, or it is the document root) or a free fragment, and
/// only free fragments can be attached.
impl XmlDoc {
    /// Append a child to the end of the children of the given parent.
    ///
    /// It is now the new last node of the parent.
    ///
    /// ```rust
    /// use xmllex::XmlDoc;
    ///
    /// let mut doc = XmlDoc::parse("<doc><a/></doc>");
    /// let root = doc.root().unwrap();
    /// let b = doc.new_empty_element("b");
    /// doc.give_birth(root, b)?;
    /// assert_eq!(doc.index(b), 1);
    /// assert_eq!(doc.node_to_xml(root, 0), "<doc>\n  <a/>\n  <b/>\n</doc>");
    /// # Ok::<(), xmllex::Error>(())
    /// ```
    pub fn give_birth(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        if self.value_type(parent) != ValueType::Element {
            return Err(Error::NotAContainer(parent));
        }
        if self.is_attached(child) {
            return Err(Error::AlreadyAttached(child));
        }
        parent.get().checked_append(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Make a free node the root of the document.
    ///
    /// A previous root becomes a free fragment.
    pub fn set_root(&mut self, node: Node) -> Result<(), Error> {
        if self.root == Some(node) {
            return Ok(());
        }
        if self.is_attached(node) {
            return Err(Error::AlreadyAttached(node));
        }
        self.root = Some(node);
        Ok(())
    }

    /// Detach a node (and its descendants) from the tree.
    ///
    /// It now becomes a free fragment, which can be attached elsewhere with
    /// [`XmlDoc::give_birth`]. Detaching the root clears the root slot.
    /// Detaching a free node does nothing.
    pub fn detach(&mut self, node: Node) -> Node {
        if self.root == Some(node) {
            self.root = None;
            return node;
        }
        if self.parent(node).is_some() {
            node.get().detach(self.arena_mut());
        }
        node
    }

    /// Remove a node (and its descendants) from the document.
    ///
    /// The handles of removed nodes must not be used anymore.
    pub fn remove(&mut self, node: Node) {
        let node = self.detach(node);
        node.get().remove_subtree(self.arena_mut());
    }

    /// Deep copy of a node, attributes and descendants included.
    ///
    /// The copy is a free fragment.
    pub fn clone_node(&mut self, node: Node) -> Node {
        let edges = node.get().traverse(self.arena()).collect::<Vec<_>>();
        let value = self.value(node).clone();
        let copy = self.new_node(value);
        let mut parents = vec![copy];
        for edge in edges.into_iter().skip(1) {
            match edge {
                NodeEdge::Start(id) => {
                    let value = self.value(Node::new(id)).clone();
                    let child = self.new_node(value);
                    if let Some(parent) = parents.last() {
                        // a fresh node can always be appended to another fresh node
                        parent.get().append(child.get(), self.arena_mut());
                    }
                    parents.push(child);
                }
                NodeEdge::End(_) => {
                    parents.pop();
                }
            }
        }
        copy
    }

    /// Set the body of a node.
    ///
    /// Elements have no body of their own, so for them the body of their first
    /// child is set, if that child has one. Returns whether anything was set.
    pub fn set_body(&mut self, node: Node, body: &str) -> bool {
        let target = match self.value(node).own_body() {
            Some(_) => node,
            None => match self.first_child(node) {
                Some(first) => first,
                None => return false,
            },
        };
        self.value_mut(target).set_own_body(body.to_string())
    }

    /// Append an attribute to a named element.
    pub fn add_attr(&mut self, node: Node, name: &str, value: &str) -> Result<(), Error> {
        self.element_mut(node)
            .ok_or(Error::NotNamed(node))?
            .add_attr(name, value);
        Ok(())
    }

    /// Set the first attribute with this name, or append it.
    pub fn set_attr(&mut self, node: Node, name: &str, value: &str) -> Result<(), Error> {
        self.element_mut(node)
            .ok_or(Error::NotNamed(node))?
            .set_attr(name, value);
        Ok(())
    }

    /// Remove all attributes with this name.
    pub fn remove_attr(&mut self, node: Node, name: &str) -> Result<(), Error> {
        self.element_mut(node)
            .ok_or(Error::NotNamed(node))?
            .remove_attr(name);
        Ok(())
    }

    pub(crate) fn sterilize(&mut self, node: Node) {
        if let Some(element) = self.element_mut(node) {
            element.sterilize();
        }
    }

    fn is_attached(&self, node: Node) -> bool {
        self.parent(node).is_some() || self.root == Some(node)
    }
}
