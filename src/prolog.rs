use crate::entity::escape;
use crate::serialize::render_leaf;
use crate::xmlvalue::{Cdata, Comment, Unknown, Value};

const DEFAULT_VERSION: &str = "1.0";

/// The XML declaration and whatever precedes the root element.
///
/// ```rust
/// use xmllex::XmlDoc;
///
/// let doc = XmlDoc::parse(
///     r#"<?xml version="1.0" encoding="UTF-8"?><!-- hi --><doc/>"#,
/// );
/// let prolog = doc.prolog();
/// assert_eq!(prolog.version(), Some("1.0"));
/// assert_eq!(prolog.encoding(), Some("UTF-8"));
/// assert_eq!(prolog.standalone(), None);
/// assert_eq!(prolog.misc().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prolog {
    pub(crate) version: Option<String>,
    pub(crate) encoding: Option<String>,
    pub(crate) standalone: Option<String>,
    // comments, CDATA sections and unrecognized constructs, in order
    pub(crate) misc: Vec<Value>,
}

impl Prolog {
    /// A prolog that declares only a version.
    pub fn with_version<S: Into<String>>(version: S) -> Self {
        Prolog {
            version: Some(version.into()),
            ..Default::default()
        }
    }

    /// The declared XML version.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The declared encoding.
    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// The declared standalone flag.
    pub fn standalone(&self) -> Option<&str> {
        self.standalone.as_deref()
    }

    /// Set the declared version. Without one, no declaration is written
    /// unless there are items.
    pub fn set_version<S: Into<String>>(&mut self, version: Option<S>) {
        self.version = version.map(Into::into);
    }

    /// Set the declared encoding. Only serialized when a version is set.
    pub fn set_encoding<S: Into<String>>(&mut self, encoding: Option<S>) {
        self.encoding = encoding.map(Into::into);
    }

    /// Set the standalone flag. Only serialized when a version is set.
    pub fn set_standalone<S: Into<String>>(&mut self, standalone: Option<S>) {
        self.standalone = standalone.map(Into::into);
    }

    /// Items found before the root element.
    pub fn misc(&self) -> &[Value] {
        &self.misc
    }

    /// Append a comment.
    pub fn add_comment<S: Into<String>>(&mut self, body: S) {
        self.misc.push(Value::Comment(Comment::new(body.into())));
    }

    /// Append a CDATA section.
    pub fn add_cdata<S: Into<String>>(&mut self, body: S) {
        self.misc.push(Value::Cdata(Cdata::new(body.into())));
    }

    /// Append an unrecognized construct, serialized as `<body>`.
    pub fn add_unknown<S: Into<String>>(&mut self, body: S) {
        self.misc.push(Value::Unknown(Unknown::new(body.into())));
    }

    pub(crate) fn push_misc(&mut self, value: Value) {
        debug_assert!(value.is_leaf());
        self.misc.push(value);
    }

    /// A prolog without declaration and without items.
    pub fn is_empty(&self) -> bool {
        self.version.is_none() && self.misc.is_empty()
    }

    /// Serialize the declaration followed by one line per item.
    ///
    /// An empty prolog serializes to the empty string. Items are only read
    /// back after a declaration, so one with version `1.0` is written for
    /// items in a prolog that has no version.
    pub fn to_xml(&self) -> String {
        let mut lines = Vec::with_capacity(self.misc.len() + 1);
        let version = match &self.version {
            Some(version) => Some(version.as_str()),
            None if !self.misc.is_empty() => Some(DEFAULT_VERSION),
            None => None,
        };
        if let Some(version) = version {
            let mut declaration = format!("<?xml version=\"{}\"", escape(version));
            if let Some(encoding) = &self.encoding {
                declaration.push_str(&format!(" encoding=\"{}\"", escape(encoding)));
            }
            if let Some(standalone) = &self.standalone {
                declaration.push_str(&format!(" standalone=\"{}\"", escape(standalone)));
            }
            declaration.push_str("?>");
            lines.push(declaration);
        }
        for item in &self.misc {
            let mut line = String::new();
            render_leaf(item, &mut line);
            lines.push(line);
        }
        lines.join("\n")
    }
}
