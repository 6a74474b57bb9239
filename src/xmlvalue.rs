#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The type of the XML node.
///
/// Access it using [`Value::value_type`] or
/// [`XmlDoc::value_type`](crate::xmldoc::XmlDoc::value_type).
///
/// The `ValueType` can be used if you are interested in
/// the type of the value without needing to match on it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Generic element; it has a name, attributes and children.
    Element,
    /// Element written as `<name/>`; it never has children.
    EmptyElement,
    /// Character data between tags.
    Content,
    /// Comment.
    Comment,
    /// CDATA section.
    Cdata,
    /// A construct the scanner did not recognize.
    Unknown,
}

/// An XML value.
///
/// Access it using [`XmlDoc::value`](crate::xmldoc::XmlDoc::value) or
/// mutably using [`XmlDoc::value_mut`](crate::xmldoc::XmlDoc::value_mut).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Generic element, like `<p a="b">...</p>`.
    Element(Element),
    /// Empty element, like `<br/>`.
    EmptyElement(Element),
    /// Text content.
    Content(Content),
    /// Comment.
    Comment(Comment),
    /// CDATA section.
    Cdata(Cdata),
    /// Unrecognized construct, like `<!DOCTYPE html>` or `<?pi?>`.
    Unknown(Unknown),
}

impl Value {
    /// Returns the type of the XML value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Element(_) => ValueType::Element,
            Value::EmptyElement(_) => ValueType::EmptyElement,
            Value::Content(_) => ValueType::Content,
            Value::Comment(_) => ValueType::Comment,
            Value::Cdata(_) => ValueType::Cdata,
            Value::Unknown(_) => ValueType::Unknown,
        }
    }

    /// The element data of named values.
    pub fn element(&self) -> Option<&Element> {
        match self {
            Value::Element(element) | Value::EmptyElement(element) => Some(element),
            _ => None,
        }
    }

    /// Mutable element data of named values.
    pub fn element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Value::Element(element) | Value::EmptyElement(element) => Some(element),
            _ => None,
        }
    }

    /// The name; empty for values that have none.
    pub fn name(&self) -> &str {
        self.element().map(Element::name).unwrap_or("")
    }

    /// The body of leaf values.
    ///
    /// Elements have no body of their own.
    pub fn own_body(&self) -> Option<&str> {
        match self {
            Value::Content(content) => Some(content.get()),
            Value::Comment(comment) => Some(comment.get()),
            Value::Cdata(cdata) => Some(cdata.get()),
            Value::Unknown(unknown) => Some(unknown.get()),
            Value::Element(_) | Value::EmptyElement(_) => None,
        }
    }

    /// Replace the body of a leaf value. Returns `false` for elements.
    pub fn set_own_body(&mut self, body: String) -> bool {
        match self {
            Value::Content(content) => content.set(body),
            Value::Comment(comment) => comment.set(body),
            Value::Cdata(cdata) => cdata.set(body),
            Value::Unknown(unknown) => unknown.set(body),
            Value::Element(_) | Value::EmptyElement(_) => return false,
        }
        true
    }

    /// Whether this value is a nameless leaf that never has children.
    pub fn is_leaf(&self) -> bool {
        self.own_body().is_some()
    }
}

/// An attribute: a name and a value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attribute {
    pub(crate) name: String,
    pub(crate) value: String,
}

impl Attribute {
    /// Create a new attribute.
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute value, unescaped.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Data of generic and empty elements.
///
/// Attributes keep their insertion order. Duplicate names are allowed; lookups
/// return the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Vec<Attribute>,
}

impl Element {
    pub(crate) fn new(name: String) -> Self {
        Element {
            name,
            attributes: Vec::new(),
        }
    }

    pub(crate) fn with_attributes(name: String, attributes: Vec<Attribute>) -> Self {
        Element { name, attributes }
    }

    /// The name of the element.
    ///
    /// ```rust
    /// use xmllex::XmlDoc;
    ///
    /// let doc = XmlDoc::parse("<doc/>");
    /// let root = doc.root().unwrap();
    /// assert_eq!(doc.element(root).unwrap().name(), "doc");
    /// ```
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attributes of the element, in document order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Get the value of the first attribute with this name.
    ///
    /// ```rust
    /// use xmllex::XmlDoc;
    ///
    /// let doc = XmlDoc::parse(r#"<doc a="A" a="again"/>"#);
    /// let root = doc.root().unwrap();
    /// let element = doc.element(root).unwrap();
    /// assert_eq!(element.find_attr("a"), Some("A"));
    /// assert_eq!(element.find_attr("b"), None);
    /// ```
    pub fn find_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Append an attribute, even if one with the same name exists.
    pub fn add_attr<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.attributes.push(Attribute::new(name, value));
    }

    /// Set the first attribute with this name, or append it.
    pub fn set_attr<V: Into<String>>(&mut self, name: &str, value: V) {
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attribute) => attribute.value = value.into(),
            None => self.attributes.push(Attribute::new(name, value)),
        }
    }

    /// Remove every attribute with this name.
    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.retain(|attribute| attribute.name != name);
    }

    /// Compact storage once no more attributes will be added.
    pub(crate) fn sterilize(&mut self) {
        self.attributes.shrink_to_fit();
    }
}

/// XML text content.
///
/// Example: `Bar` in `<foo>Bar</foo>`. The text is stored unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub(crate) text: String,
}

impl Content {
    pub(crate) fn new(text: String) -> Self {
        Content { text }
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the text value.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}

/// XML comment.
///
/// Example: `<!-- foo -->`. The body is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Comment { text }
    }

    /// Get the comment text.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the comment text.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}

/// CDATA section.
///
/// Example: `<![CDATA[a < b]]>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cdata {
    pub(crate) text: String,
}

impl Cdata {
    pub(crate) fn new(text: String) -> Self {
        Cdata { text }
    }

    /// Get the section text.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the section text.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}

/// The body of a construct between `<` and `>` that the scanner could not
/// recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unknown {
    pub(crate) text: String,
}

impl Unknown {
    pub(crate) fn new(text: String) -> Self {
        Unknown { text }
    }

    /// Get the construct body.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the construct body.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}
