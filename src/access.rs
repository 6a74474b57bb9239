use crate::xmldoc::{Node, XmlDoc};
use crate::xmlvalue::Attribute;

/// ## Read-only access
impl XmlDoc {
    /// Get parent node.
    ///
    /// Returns [`None`] for the root and for free fragments.
    ///
    /// ```rust
    /// use xmllex::XmlDoc;
    ///
    /// let doc = XmlDoc::parse("<p>Example</p>");
    /// let p = doc.root().unwrap();
    /// let text = doc.first_child(p).unwrap();
    /// assert_eq!(doc.parent(text), Some(p));
    /// assert_eq!(doc.parent(p), None);
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Iterator over the child nodes of this node.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Get the child at a position.
    pub fn child(&self, node: Node, index: usize) -> Option<Node> {
        self.children(node).nth(index)
    }

    /// Get first child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get next sibling.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Get previous sibling.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].previous_sibling().map(Node::new)
    }

    /// Number of children.
    pub fn num_kids(&self, node: Node) -> usize {
        self.children(node).count()
    }

    /// Number of siblings, not counting the node itself.
    pub fn num_siblings(&self, node: Node) -> usize {
        match self.parent(node) {
            Some(parent) => self.num_kids(parent) - 1,
            None => 0,
        }
    }

    /// Position of the node among its siblings.
    ///
    /// Positions are contiguous from 0, so for any attached node
    /// `doc.child(parent, doc.index(node)) == Some(node)`. Free nodes and the
    /// root are at position 0.
    ///
    /// ```rust
    /// use xmllex::XmlDoc;
    ///
    /// let doc = XmlDoc::parse("<p><a/><b/></p>");
    /// let p = doc.root().unwrap();
    /// let b = doc.last_child(p).unwrap();
    /// assert_eq!(doc.index(b), 1);
    /// assert_eq!(doc.child(p, 1), Some(b));
    /// ```
    pub fn index(&self, node: Node) -> usize {
        // preceding_siblings starts with the node itself
        node.get().preceding_siblings(self.arena()).count() - 1
    }

    /// Iterator over ancestor nodes, including this one.
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over the descendants of this node, including this one, in
    /// document order (parent first).
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// The topmost ancestor: the root for attached nodes, the top of the
    /// fragment for free ones.
    pub fn top(&self, node: Node) -> Node {
        self.ancestors(node).last().unwrap_or(node)
    }

    /// The name of a generic or empty element; empty for other nodes.
    pub fn name(&self, node: Node) -> &str {
        self.value(node).name()
    }

    /// The attributes of a node; empty for nodes without a name.
    pub fn attributes(&self, node: Node) -> &[Attribute] {
        self.element(node)
            .map(|element| element.attributes())
            .unwrap_or(&[])
    }

    /// Get the value of the first attribute with this name.
    pub fn find_attr(&self, node: Node, name: &str) -> Option<&str> {
        self.element(node)?.find_attr(name)
    }

    /// The body of a node.
    ///
    /// Leaf nodes have their own body. Elements borrow the body of their first
    /// child when that child has one; otherwise the body is empty.
    ///
    /// ```rust
    /// use xmllex::XmlDoc;
    ///
    /// let doc = XmlDoc::parse("<doc><name>Ada</name><list><a/></list></doc>");
    /// let name = doc.find("/doc/name").unwrap();
    /// let list = doc.find("/doc/list").unwrap();
    /// assert_eq!(doc.body(name), "Ada");
    /// assert_eq!(doc.body(list), "");
    /// ```
    pub fn body(&self, node: Node) -> &str {
        if let Some(body) = self.value(node).own_body() {
            return body;
        }
        self.first_child(node)
            .and_then(|first| self.value(first).own_body())
            .unwrap_or("")
    }

    /// Absolute path of the node, like `/a/b/c`.
    ///
    /// A trailing `/` marks a node that currently has children.
    ///
    /// ```rust
    /// use xmllex::XmlDoc;
    ///
    /// let doc = XmlDoc::parse("<grandma><mom><me/></mom></grandma>");
    /// let mom = doc.find("/grandma/mom").unwrap();
    /// let me = doc.find("/grandma/mom/me").unwrap();
    /// assert_eq!(doc.full_name(mom), "/grandma/mom/");
    /// assert_eq!(doc.full_name(me), "/grandma/mom/me");
    /// ```
    pub fn full_name(&self, node: Node) -> String {
        let mut names = self
            .ancestors(node)
            .map(|ancestor| self.name(ancestor))
            .collect::<Vec<_>>();
        names.reverse();
        let mut full_name = String::new();
        for name in names {
            full_name.push('/');
            full_name.push_str(name);
        }
        if self.first_child(node).is_some() {
            full_name.push('/');
        }
        full_name
    }

    /// First child with this name.
    pub fn find_child(&self, node: Node, name: &str) -> Option<Node> {
        self.children(node).find(|child| self.name(*child) == name)
    }

    /// Resolve a `/`-separated path starting at `node`.
    ///
    /// `.` is the node itself and `..` its parent. A leading `/` makes the path
    /// absolute: its first segment must name the topmost ancestor. Empty
    /// segments are ignored. Returns [`None`] as soon as a segment does not
    /// resolve.
    ///
    /// ```rust
    /// use xmllex::XmlDoc;
    ///
    /// let doc = XmlDoc::parse("<grandma><mom><me/></mom></grandma>");
    /// let mom = doc.find("/grandma/mom").unwrap();
    /// let me = doc.find_from(mom, "me").unwrap();
    /// assert_eq!(doc.find_from(me, "../.."), doc.root());
    /// assert_eq!(doc.find_from(me, "/grandpa"), None);
    /// ```
    pub fn find_from(&self, node: Node, path: &str) -> Option<Node> {
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        let mut current = node;
        if path.starts_with('/') {
            current = self.top(node);
            match segments.next() {
                Some(first) if first == self.name(current) => {}
                Some(_) => return None,
                None => return Some(current),
            }
        }
        for segment in segments {
            current = match segment {
                "." => current,
                ".." => self.parent(current)?,
                name => self.find_child(current, name)?,
            };
        }
        Some(current)
    }

    /// Resolve a path from the root.
    ///
    /// Absolute paths start with the root's name; relative paths start at the
    /// root itself.
    pub fn find(&self, path: &str) -> Option<Node> {
        self.find_from(self.root?, path)
    }
}
