use indextree::NodeEdge;

use crate::entity::escape;
use crate::xmldoc::{Node, XmlDoc};
use crate::xmlvalue::{Element, Value};

/// Options that control serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Number of spaces per nesting level.
    pub indentation: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions { indentation: 2 }
    }
}

/// Render a leaf value: content, comment, CDATA section or unknown construct.
pub(crate) fn render_leaf(value: &Value, out: &mut String) {
    match value {
        Value::Content(content) => out.push_str(&escape(content.get())),
        Value::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment.get());
            out.push_str("-->");
        }
        Value::Cdata(cdata) => {
            out.push_str("<![CDATA[");
            out.push_str(cdata.get());
            out.push_str("]]>");
        }
        Value::Unknown(unknown) => {
            out.push('<');
            out.push_str(unknown.get());
            out.push('>');
        }
        Value::Element(element) => {
            render_start_tag(element, out);
            render_end_tag(element, out);
        }
        Value::EmptyElement(element) => render_empty_tag(element, out),
    }
}

fn render_attributes(element: &Element, out: &mut String) {
    for attribute in element.attributes() {
        out.push(' ');
        out.push_str(attribute.name());
        out.push_str("=\"");
        out.push_str(&escape(attribute.value()));
        out.push('"');
    }
}

fn render_start_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.name());
    render_attributes(element, out);
    out.push('>');
}

fn render_end_tag(element: &Element, out: &mut String) {
    out.push_str("</");
    out.push_str(element.name());
    out.push('>');
}

fn render_empty_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.name());
    render_attributes(element, out);
    out.push_str("/>");
}

/// ## Serialization
impl XmlDoc {
    /// Serialize a node and its descendants, starting at nesting level
    /// `indent`.
    ///
    /// A generic element whose only child is a leaf (content, comment, CDATA
    /// section, unknown construct) is written on one line. Other elements
    /// with children put each child on its own line, one level deeper.
    ///
    /// ```rust
    /// use xmllex::XmlDoc;
    ///
    /// let doc = XmlDoc::parse("<a><b>text</b><c x='1'/></a>");
    /// let root = doc.root().unwrap();
    /// assert_eq!(
    ///     doc.node_to_xml(root, 0),
    ///     "<a>\n  <b>text</b>\n  <c x=\"1\"/>\n</a>"
    /// );
    /// ```
    pub fn node_to_xml(&self, node: Node, indent: usize) -> String {
        self.node_to_xml_with(node, indent, &SerializeOptions::default())
    }

    /// Like [`XmlDoc::node_to_xml`], with explicit options.
    pub fn node_to_xml_with(&self, node: Node, indent: usize, options: &SerializeOptions) -> String {
        let mut out = String::new();
        self.write_node(node, indent, options, &mut out);
        out
    }

    // A generic element whose only child is a leaf writes that child inline.
    fn inline_child(&self, node: Node) -> Option<Node> {
        let first = self.first_child(node)?;
        if self.next_sibling(first).is_none() && self.value(first).is_leaf() {
            Some(first)
        } else {
            None
        }
    }

    fn write_node(&self, top: Node, level: usize, options: &SerializeOptions, out: &mut String) {
        let mut depth = level;
        let mut inlined = None;
        for edge in top.get().traverse(self.arena()) {
            match edge {
                NodeEdge::Start(id) => {
                    let node = Node::new(id);
                    if inlined == Some(node) {
                        continue;
                    }
                    out.push_str(&" ".repeat(depth * options.indentation));
                    let element = match self.value(node) {
                        Value::Element(element) => element,
                        value => {
                            render_leaf(value, out);
                            continue;
                        }
                    };
                    render_start_tag(element, out);
                    match self.inline_child(node) {
                        Some(child) => {
                            render_leaf(self.value(child), out);
                            inlined = Some(child);
                        }
                        None if self.first_child(node).is_some() => out.push('\n'),
                        None => {}
                    }
                    depth += 1;
                }
                NodeEdge::End(id) => {
                    let node = Node::new(id);
                    if inlined == Some(node) {
                        continue;
                    }
                    if let Value::Element(element) = self.value(node) {
                        depth -= 1;
                        if self.inline_child(node).is_none() && self.first_child(node).is_some() {
                            out.push_str(&" ".repeat(depth * options.indentation));
                        }
                        render_end_tag(element, out);
                    }
                    if node != top {
                        out.push('\n');
                    }
                }
            }
        }
    }

    /// Serialize the whole document.
    ///
    /// The prolog comes first, followed by a newline if it is not empty,
    /// then the root followed by a newline.
    ///
    /// ```rust
    /// use xmllex::XmlDoc;
    ///
    /// let doc = XmlDoc::parse("<empty-root/>");
    /// assert_eq!(doc.to_xml(), "<empty-root/>\n");
    /// ```
    pub fn to_xml(&self) -> String {
        self.to_xml_with(&SerializeOptions::default())
    }

    /// Like [`XmlDoc::to_xml`], with explicit options.
    pub fn to_xml_with(&self, options: &SerializeOptions) -> String {
        let mut out = self.prolog.to_xml();
        if !out.is_empty() {
            out.push('\n');
        }
        if let Some(root) = self.root {
            let start = out.len();
            self.write_node(root, 0, options, &mut out);
            if out.len() > start {
                out.push('\n');
            }
        }
        out
    }
}
