use crate::xmldoc::{Node, XmlDoc};
use crate::xmlvalue::{Attribute, Cdata, Comment, Content, Element, Unknown, Value};

/// ## Creation
///
/// New nodes are unattached. Use [`XmlDoc::give_birth`] to put them into
/// the tree, or [`XmlDoc::set_root`] to make one the root.
impl XmlDoc {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena.new_node(value))
    }

    /// Create a generic element, which can have attributes and children.
    pub fn new_element(&mut self, name: &str) -> Node {
        self.new_node(Value::Element(Element::new(name.to_string())))
    }

    pub(crate) fn new_element_with_attributes(
        &mut self,
        name: String,
        attributes: Vec<Attribute>,
    ) -> Node {
        self.new_node(Value::Element(Element::with_attributes(name, attributes)))
    }

    /// Create an empty element, serialized as `<name/>`.
    pub fn new_empty_element(&mut self, name: &str) -> Node {
        self.new_node(Value::EmptyElement(Element::new(name.to_string())))
    }

    pub(crate) fn new_empty_element_with_attributes(
        &mut self,
        name: String,
        attributes: Vec<Attribute>,
    ) -> Node {
        self.new_node(Value::EmptyElement(Element::with_attributes(
            name, attributes,
        )))
    }

    /// Create a content node. The text is unescaped; it is escaped again on
    /// serialization.
    pub fn new_content(&mut self, text: &str) -> Node {
        self.new_node(Value::Content(Content::new(text.to_string())))
    }

    /// Create a comment node. The body is written verbatim.
    pub fn new_comment(&mut self, body: &str) -> Node {
        self.new_node(Value::Comment(Comment::new(body.to_string())))
    }

    /// Create a CDATA section node. The body is written verbatim.
    pub fn new_cdata(&mut self, body: &str) -> Node {
        self.new_node(Value::Cdata(Cdata::new(body.to_string())))
    }

    /// Create an opaque node, serialized as `<body>`.
    pub fn new_unknown(&mut self, body: &str) -> Node {
        self.new_node(Value::Unknown(Unknown::new(body.to_string())))
    }
}
