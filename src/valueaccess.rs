use crate::xmldoc::{Node, XmlDoc};
use crate::xmlvalue::{Cdata, Comment, Content, Element, Unknown, Value, ValueType};

/// Obtain XML values and their types.
///
/// These are handy if you only need to match against a single value or know
/// the value type already. If you want to handle all value types, use a
/// `match` statement on [`Value`](crate::xmlvalue::Value) instead.
impl XmlDoc {
    /// Access to the XML value for this node.
    ///
    /// ```rust
    /// use xmllex::{Value, XmlDoc};
    ///
    /// let doc = XmlDoc::parse("<doc>Example</doc>");
    /// let root = doc.root().unwrap();
    ///
    /// match doc.value(root) {
    ///     Value::Element(element) => {
    ///         assert_eq!(element.name(), "doc");
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena()[node.get()].get()
    }

    /// Mutable access to the XML value for this node.
    #[inline]
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena_mut()[node.get()].get_mut()
    }

    /// Get the [`ValueType`](crate::xmlvalue::ValueType) of a node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Return true if node is a generic element.
    pub fn is_element(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Element
    }

    /// Return true if node is an empty element.
    pub fn is_empty_element(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::EmptyElement
    }

    /// Return true if node is content.
    pub fn is_content(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Content
    }

    /// Return true if node is a comment.
    pub fn is_comment(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Comment
    }

    /// Return true if node is a CDATA section.
    pub fn is_cdata(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Cdata
    }

    /// Return true if node is an unrecognized construct.
    pub fn is_unknown(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Unknown
    }

    /// If this node is a generic or empty element, return its element data.
    pub fn element(&self, node: Node) -> Option<&Element> {
        self.value(node).element()
    }

    /// Mutable element data of a generic or empty element.
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        self.value_mut(node).element_mut()
    }

    /// If this node's value is content, return a reference to it.
    pub fn content(&self, node: Node) -> Option<&Content> {
        match self.value(node) {
            Value::Content(content) => Some(content),
            _ => None,
        }
    }

    /// If this node's value is content, return a mutable reference to it.
    pub fn content_mut(&mut self, node: Node) -> Option<&mut Content> {
        match self.value_mut(node) {
            Value::Content(content) => Some(content),
            _ => None,
        }
    }

    /// If this node's value is a comment, return a reference to it.
    pub fn comment(&self, node: Node) -> Option<&Comment> {
        match self.value(node) {
            Value::Comment(comment) => Some(comment),
            _ => None,
        }
    }

    /// If this node's value is a CDATA section, return a reference to it.
    pub fn cdata(&self, node: Node) -> Option<&Cdata> {
        match self.value(node) {
            Value::Cdata(cdata) => Some(cdata),
            _ => None,
        }
    }

    /// If this node's value is an unrecognized construct, return a reference
    /// to it.
    pub fn unknown(&self, node: Node) -> Option<&Unknown> {
        match self.value(node) {
            Value::Unknown(unknown) => Some(unknown),
            _ => None,
        }
    }
}
