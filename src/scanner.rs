//! The scanner: a state machine that walks a byte span once and builds an
//! [`XmlDoc`] from it.
//!
//! Each state consumes input in bulk where the grammar allows (whitespace
//! runs, text up to the next `<`, comment bodies up to `-->`) and hands over
//! to the next state. Structural problems stop the scan; undecodable bytes
//! only do so where a name is expected.
use memchr::{memchr, memmem};
use tracing::{debug, trace};

use crate::charclass::{is_name_char, is_name_start, is_quote_byte, is_whitespace_byte};
use crate::codepoint::{classify, decode, text_of, Encoding};
use crate::content::normalize;
use crate::error::ScanError;
use crate::tag::parse_attributes;
use crate::xmldoc::{Node, XmlDoc};
use crate::xmlvalue::{Attribute, Cdata, Comment, Content, Unknown, Value};

const BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Very start of the input, before an optional `<?xml`.
    Start,
    /// Inside `<?xml ... ?>`.
    Decl,
    /// Before the root element, between top-level constructs.
    AtTopLevel,
    /// Just after `<`.
    TagStart,
    /// Reading the name of a start tag.
    ElementName,
    /// After the name of a start tag, up to `>` or `/>`.
    ElementAttrs,
    /// Between tags inside an element.
    Content,
    /// Just after `</`.
    ElementClose,
    /// Just after `<!--`.
    Comment,
    /// Just after `<![CDATA[`.
    Cdata,
    /// Anything else starting with `<`, up to the next `>`.
    Unknown,
    /// The root element is closed; the rest of the input is ignored.
    Epilog,
}

/// Scanner over one byte span.
///
/// A scanner can be [reset](Scanner::reset) to a new span and reused. It is
/// not meant to be shared between threads while scanning.
///
/// ```rust
/// use xmllex::Scanner;
///
/// let mut scanner = Scanner::new(b"<a>one</a>");
/// let first = scanner.scan();
/// scanner.reset(b"<b>two</b>");
/// let second = scanner.scan();
/// assert_eq!(first.to_xml(), "<a>one</a>\n");
/// assert_eq!(second.to_xml(), "<b>two</b>\n");
/// ```
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    state: State,
    // position of the `<` that opened the current construct
    tag_start: usize,
    // end of the name of the current start tag
    name_end: usize,
    // encoding of the name of the current start tag
    name_encoding: Encoding,
    doc: XmlDoc,
    // element receiving children; None outside the root
    current: Option<Node>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner for a span of UTF-8 bytes.
    pub fn new(input: &'a [u8]) -> Self {
        Scanner {
            input,
            pos: 0,
            state: State::Start,
            tag_start: 0,
            name_end: 0,
            name_encoding: Encoding::Ascii,
            doc: XmlDoc::new(),
            current: None,
        }
    }

    /// Start over with a new span.
    pub fn reset(&mut self, input: &'a [u8]) {
        *self = Scanner::new(input);
    }

    /// Scan the whole span and return the document.
    ///
    /// Every call starts from the beginning of the span, so scanning twice
    /// gives two equal documents.
    ///
    /// The document is ok only if a root element was found and closed and no
    /// structural problem was met on the way. Otherwise it carries the error,
    /// and whatever had been built so far.
    pub fn scan(&mut self) -> XmlDoc {
        let input = self.input;
        self.reset(input);
        let outcome = self.run();
        let mut doc = std::mem::take(&mut self.doc);
        if let Err(error) = outcome {
            debug!(%error, offset = self.pos, "scan failed");
            doc.error = Some(error.into());
        }
        self.current = None;
        doc
    }

    fn run(&mut self) -> Result<(), ScanError> {
        while self.state != State::Epilog && (self.pos < self.input.len() || self.state == State::Start) {
            let next = self.step()?;
            if next != self.state {
                trace!(from = ?self.state, to = ?next, offset = self.pos, "transition");
            }
            self.state = next;
        }
        if self.state == State::Epilog {
            // trailing material after the root is ignored
            self.pos = self.input.len();
        }
        self.finish()
    }

    fn step(&mut self) -> Result<State, ScanError> {
        match self.state {
            State::Start => Ok(self.start()),
            State::Decl => self.declaration(),
            State::AtTopLevel => self.at_top_level(),
            State::TagStart => self.tag_start(),
            State::ElementName => self.element_name(),
            State::ElementAttrs => self.element_attrs(),
            State::Content => Ok(self.content()),
            State::ElementClose => self.element_close(),
            State::Comment => self.comment(),
            State::Cdata => self.cdata(),
            State::Unknown => self.unknown(),
            State::Epilog => Ok(State::Epilog),
        }
    }

    fn finish(&self) -> Result<(), ScanError> {
        match self.state {
            State::Epilog if self.doc.root.is_some() => Ok(()),
            State::Epilog => Err(ScanError::NoRoot),
            State::Start | State::AtTopLevel => {
                if self.doc.prolog.is_empty() {
                    Err(ScanError::NoPrologNorRoot)
                } else {
                    Err(ScanError::NoRoot)
                }
            }
            State::Decl => Err(ScanError::IncompleteDeclaration),
            State::Content => Err(ScanError::Unterminated),
            State::Comment => Err(ScanError::UnterminatedComment(self.tag_start)),
            State::Cdata => Err(ScanError::UnterminatedCdata(self.tag_start)),
            State::TagStart
            | State::ElementName
            | State::ElementAttrs
            | State::ElementClose
            | State::Unknown => Err(ScanError::UnterminatedTag(self.tag_start)),
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        let input = self.input;
        while self.pos < input.len() && is_whitespace_byte(input[self.pos]) {
            self.pos += 1;
        }
    }

    fn in_element(&self) -> bool {
        self.current.is_some()
    }

    // the state to continue in after a complete construct
    fn after_construct(&self) -> State {
        if self.in_element() {
            State::Content
        } else if self.doc.root.is_some() {
            State::Epilog
        } else {
            State::AtTopLevel
        }
    }

    fn attach(&mut self, node: Node) {
        match self.current {
            // a fresh node can always be appended to an open element
            Some(parent) => parent.get().append(node.get(), self.doc.arena_mut()),
            None => self.doc.root = Some(node),
        }
    }

    // Start
    fn start(&mut self) -> State {
        if self.input.starts_with(BYTE_ORDER_MARK) {
            self.pos = BYTE_ORDER_MARK.len();
        }
        let rest = &self.input[self.pos..];
        let is_declaration = rest.starts_with(b"<?xml")
            && matches!(rest.get(5), Some(&b) if is_whitespace_byte(b) || b == b'?');
        if is_declaration {
            self.tag_start = self.pos;
            self.pos += 5;
            State::Decl
        } else {
            State::AtTopLevel
        }
    }

    // Decl
    fn declaration(&mut self) -> Result<State, ScanError> {
        let input = self.input;
        let rest = &input[self.pos..];
        let len = memmem::find(rest, b"?>").ok_or(ScanError::IncompleteDeclaration)?;
        let span = &rest[..len];
        let attributes = parse_attributes(
            span,
            self.pos,
            classify(span),
            memchr(b'&', span).is_some(),
        )
        .map_err(|_| ScanError::InvalidDeclaration)?;
        self.record_declaration(attributes);
        self.pos += len + 2;
        Ok(State::AtTopLevel)
    }

    // version has to come first, then encoding, then standalone
    fn record_declaration(&mut self, attributes: Vec<Attribute>) {
        let mut attributes = attributes.into_iter().peekable();
        let prolog = &mut self.doc.prolog;
        match attributes.next() {
            Some(version) if version.name == "version" => prolog.version = Some(version.value),
            _ => return,
        }
        if let Some(encoding) = attributes.next_if(|a| a.name == "encoding") {
            prolog.encoding = Some(encoding.value);
        }
        if let Some(standalone) = attributes.next_if(|a| a.name == "standalone") {
            prolog.standalone = Some(standalone.value);
        }
    }

    // AtTopLevel
    fn at_top_level(&mut self) -> Result<State, ScanError> {
        self.skip_whitespace();
        match self.peek() {
            None => Ok(State::AtTopLevel),
            Some(b'<') => {
                self.tag_start = self.pos;
                self.pos += 1;
                Ok(State::TagStart)
            }
            Some(_) => Err(ScanError::TextOutsideRoot(self.pos)),
        }
    }

    // TagStart
    fn tag_start(&mut self) -> Result<State, ScanError> {
        let input = self.input;
        let rest = &input[self.pos..];
        if rest.starts_with(b"!--") {
            self.pos += 3;
            return Ok(State::Comment);
        }
        if rest.starts_with(b"![CDATA[") {
            self.pos += 8;
            return Ok(State::Cdata);
        }
        match rest.first() {
            None => Ok(State::TagStart),
            Some(b'/') => {
                self.pos += 1;
                Ok(State::ElementClose)
            }
            Some(b'!' | b'?') => Ok(State::Unknown),
            Some(_) => match decode(rest) {
                Ok((c, _)) if is_name_start(c) => Ok(State::ElementName),
                Ok(_) => self.unrecognized_name(),
                Err(_) => Err(ScanError::InvalidByteInName(self.pos)),
            },
        }
    }

    fn unrecognized_name(&self) -> Result<State, ScanError> {
        if self.in_element() {
            Ok(State::Unknown)
        } else {
            Err(ScanError::InvalidElementName(self.tag_start + 1))
        }
    }

    // ElementName
    fn element_name(&mut self) -> Result<State, ScanError> {
        let input = self.input;
        let start = self.pos;
        let mut encoding = Encoding::Ascii;
        while self.pos < input.len() {
            let b = input[self.pos];
            if b < 0x80 {
                if !is_name_char(b as char) {
                    break;
                }
                self.pos += 1;
                continue;
            }
            match decode(&input[self.pos..]) {
                Ok((c, width)) if is_name_char(c) => {
                    self.pos += width;
                    encoding = Encoding::ValidUnicode;
                }
                Ok(_) => break,
                Err(_) => return Err(ScanError::InvalidByteInName(self.pos)),
            }
        }
        self.name_end = self.pos;
        self.name_encoding = encoding;
        match self.peek() {
            None => Ok(State::ElementName),
            Some(b) if is_whitespace_byte(b) || b == b'/' || b == b'>' => Ok(State::ElementAttrs),
            Some(_) => {
                self.pos = start;
                self.unrecognized_name()
            }
        }
    }

    // ElementAttrs
    fn element_attrs(&mut self) -> Result<State, ScanError> {
        let input = self.input;
        let mut quote = None;
        let mut has_ampersand = false;
        let mut end = None;
        for (pos, &b) in input.iter().enumerate().skip(self.pos) {
            match quote {
                Some(q) if b == q => quote = None,
                Some(_) => {}
                None if is_quote_byte(b) => quote = Some(b),
                None if b == b'>' => {
                    end = Some(pos);
                    break;
                }
                None => {}
            }
            has_ampersand |= b == b'&';
        }
        let end = end.ok_or(ScanError::UnterminatedTag(self.tag_start))?;
        let is_empty = end > self.pos && input[end - 1] == b'/';
        let span = &input[self.pos..if is_empty { end - 1 } else { end }];
        let attributes = parse_attributes(span, self.pos, classify(span), has_ampersand)?;
        let name = text_of(&input[self.tag_start + 1..self.name_end], self.name_encoding)
            .into_owned();
        self.pos = end + 1;

        if is_empty {
            let node = self.doc.new_empty_element_with_attributes(name, attributes);
            self.attach(node);
            Ok(self.after_construct())
        } else {
            let node = self.doc.new_element_with_attributes(name, attributes);
            self.attach(node);
            self.current = Some(node);
            Ok(State::Content)
        }
    }

    // Content
    fn content(&mut self) -> State {
        self.skip_whitespace();
        let input = self.input;
        let rest = &input[self.pos..];
        match rest.first() {
            None => return State::Content,
            Some(b'<') => {
                self.tag_start = self.pos;
                self.pos += 1;
                return State::TagStart;
            }
            Some(_) => {}
        }
        let len = memchr(b'<', rest).unwrap_or(rest.len());
        let span = &rest[..len];
        let text = normalize(span, classify(span));
        if !text.is_empty() {
            let node = self
                .doc
                .new_node(Value::Content(Content::new(text.into_owned())));
            self.attach(node);
        }
        self.pos += len;
        State::Content
    }

    // ElementClose
    fn element_close(&mut self) -> Result<State, ScanError> {
        let input = self.input;
        let rest = &input[self.pos..];
        let len = memchr(b'>', rest).ok_or(ScanError::UnterminatedTag(self.tag_start))?;
        let mut name_len = len;
        while name_len > 0 && is_whitespace_byte(rest[name_len - 1]) {
            name_len -= 1;
        }
        let found = &rest[..name_len];
        let current = self.current.ok_or_else(|| {
            ScanError::UnexpectedCloseTag(text_of(found, classify(found)).into_owned())
        })?;
        let expected = self.doc.name(current);
        if expected.as_bytes() != found {
            return Err(ScanError::MismatchedCloseTag {
                expected: expected.to_string(),
                found: text_of(found, classify(found)).into_owned(),
            });
        }
        self.pos += len + 1;
        self.doc.sterilize(current);
        self.current = self.doc.parent(current);
        Ok(self.after_construct())
    }

    // Comment
    fn comment(&mut self) -> Result<State, ScanError> {
        let input = self.input;
        let rest = &input[self.pos..];
        let len =
            memmem::find(rest, b"-->").ok_or(ScanError::UnterminatedComment(self.tag_start))?;
        let body = &rest[..len];
        let text = text_of(body, classify(body)).into_owned();
        self.pos += len + 3;
        self.place(Value::Comment(Comment::new(text)), ScanError::OrphanComment)
    }

    // Cdata
    fn cdata(&mut self) -> Result<State, ScanError> {
        let input = self.input;
        let rest = &input[self.pos..];
        let len = memmem::find(rest, b"]]>").ok_or(ScanError::UnterminatedCdata(self.tag_start))?;
        let body = &rest[..len];
        let text = text_of(body, classify(body)).into_owned();
        self.pos += len + 3;
        self.place(Value::Cdata(Cdata::new(text)), ScanError::OrphanCdata)
    }

    // Unknown
    fn unknown(&mut self) -> Result<State, ScanError> {
        let input = self.input;
        let start = self.tag_start + 1;
        let len =
            memchr(b'>', &input[start..]).ok_or(ScanError::UnterminatedTag(self.tag_start))?;
        let body = &input[start..start + len];
        let text = text_of(body, classify(body)).into_owned();
        self.pos = start + len + 1;
        self.place(Value::Unknown(Unknown::new(text)), ScanError::OrphanUnknown)
    }

    // Put a leaf in the open element, or in the prolog before the root. Before
    // the root it is only accepted when an XML declaration was seen.
    fn place(&mut self, value: Value, orphan: ScanError) -> Result<State, ScanError> {
        if self.in_element() {
            let node = self.doc.new_node(value);
            self.attach(node);
            return Ok(State::Content);
        }
        if self.doc.prolog.version.is_none() {
            return Err(orphan);
        }
        self.doc.prolog.push_misc(value);
        Ok(State::AtTopLevel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &[u8]) -> XmlDoc {
        Scanner::new(input).scan()
    }

    fn scan_error(input: &[u8]) -> ScanError {
        match scan(input).error {
            Some(crate::Error::Scan(error)) => error,
            other => panic!("expected scan error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_root() {
        let doc = scan(b"<empty-root/>");
        assert!(doc.is_ok());
        let root = doc.root().unwrap();
        assert!(doc.is_empty_element(root));
        assert_eq!(doc.name(root), "empty-root");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(scan_error(b""), ScanError::NoPrologNorRoot);
        assert_eq!(scan_error(b" \n\t "), ScanError::NoPrologNorRoot);
    }

    #[test]
    fn test_declaration_only() {
        assert_eq!(scan_error(b"<?xml version=\"1.0\"?>"), ScanError::NoRoot);
    }

    #[test]
    fn test_declaration() {
        let doc = scan(b"<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<a/>");
        assert!(doc.is_ok());
        assert_eq!(doc.prolog().version(), Some("1.0"));
        assert_eq!(doc.prolog().encoding(), Some("UTF-8"));
        assert_eq!(doc.prolog().standalone(), Some("yes"));
    }

    #[test]
    fn test_declaration_needs_version_first() {
        let doc = scan(b"<?xml encoding=\"UTF-8\" version=\"1.0\"?><a/>");
        assert!(doc.is_ok());
        assert!(doc.prolog().is_empty());
        assert_eq!(doc.prolog().encoding(), None);
    }

    #[test]
    fn test_declaration_standalone_out_of_order() {
        let doc = scan(b"<?xml version=\"1.0\" standalone=\"no\" encoding=\"UTF-8\"?><a/>");
        assert_eq!(doc.prolog().version(), Some("1.0"));
        assert_eq!(doc.prolog().standalone(), Some("no"));
        assert_eq!(doc.prolog().encoding(), None);
    }

    #[test]
    fn test_declaration_incomplete() {
        assert_eq!(
            scan_error(b"<?xml version=\"1.0\" <a/>"),
            ScanError::IncompleteDeclaration
        );
        assert_eq!(
            scan_error(b"<?xml version=1.0?><a/>"),
            ScanError::InvalidDeclaration
        );
    }

    #[test]
    fn test_declaration_after_bom() {
        let doc = scan(b"\xEF\xBB\xBF<?xml version=\"1.0\"?><a/>");
        assert!(doc.is_ok());
        assert_eq!(doc.prolog().version(), Some("1.0"));
    }

    #[test]
    fn test_late_declaration_is_unknown() {
        let doc = scan(b"<a><?xml version=\"1.0\"?></a>");
        assert!(doc.is_ok());
        let root = doc.root().unwrap();
        let child = doc.first_child(root).unwrap();
        assert_eq!(doc.unknown(child).unwrap().get(), "?xml version=\"1.0\"?");
    }

    #[test]
    fn test_orphans() {
        assert_eq!(scan_error(b"<!--no prolog-->"), ScanError::OrphanComment);
        assert_eq!(scan_error(b"<![CDATA[...]]>"), ScanError::OrphanCdata);
        assert_eq!(scan_error(b"<!DOCTYPE a><a/>"), ScanError::OrphanUnknown);
    }

    #[test]
    fn test_prolog_misc() {
        let doc = scan(b"<?xml version=\"1.0\"?>\n<!-- c -->\n<!DOCTYPE a>\n<a/>");
        assert!(doc.is_ok());
        let misc = doc.prolog().misc();
        assert_eq!(misc.len(), 2);
        assert_eq!(misc[0].own_body(), Some(" c "));
        assert_eq!(misc[1].own_body(), Some("!DOCTYPE a"));
    }

    #[test]
    fn test_invalid_bytes() {
        assert_eq!(scan_error(b"\x80"), ScanError::TextOutsideRoot(0));
        assert_eq!(scan_error(b"<a\x80>"), ScanError::InvalidByteInName(2));
        assert_eq!(scan_error(b"<\x80a/>"), ScanError::InvalidByteInName(1));
    }

    #[test]
    fn test_invalid_name_at_top_level() {
        assert_eq!(
            scan_error(b"<#root comment='x'/>"),
            ScanError::InvalidElementName(1)
        );
        assert_eq!(scan_error(b"<a#b/>"), ScanError::InvalidElementName(1));
    }

    #[test]
    fn test_invalid_name_inside_element_is_unknown() {
        let doc = scan(b"<a><#x y><b/></a>");
        assert!(doc.is_ok());
        let root = doc.root().unwrap();
        let kids = doc.children(root).collect::<Vec<_>>();
        assert_eq!(kids.len(), 2);
        assert_eq!(doc.unknown(kids[0]).unwrap().get(), "#x y");
        assert_eq!(doc.name(kids[1]), "b");
    }

    #[test]
    fn test_content_normalized() {
        let doc = scan(b"<a> \r\n\t need \r\nsome\t condensing\r\n\t</a>");
        let root = doc.root().unwrap();
        assert_eq!(doc.body(root), "need some condensing");
    }

    #[test]
    fn test_whitespace_content_dropped() {
        let doc = scan(b"<a>\n  <b/>\n  </a>");
        let root = doc.root().unwrap();
        assert_eq!(doc.num_kids(root), 1);
    }

    #[test]
    fn test_content_with_invalid_bytes() {
        let doc = scan(b"<a>x\x80\x81y</a>");
        assert!(doc.is_ok());
        assert_eq!(doc.body(doc.root().unwrap()), "x\u{FFFD}y");
    }

    #[test]
    fn test_attributes() {
        let doc = scan(b"<a x='1' y=\"a &amp; b\" z='>'/>");
        assert!(doc.is_ok());
        let root = doc.root().unwrap();
        assert_eq!(doc.find_attr(root, "x"), Some("1"));
        assert_eq!(doc.find_attr(root, "y"), Some("a & b"));
        assert_eq!(doc.find_attr(root, "z"), Some(">"));
    }

    #[test]
    fn test_malformed_attribute() {
        assert_eq!(scan_error(b"<a x=1/>"), ScanError::MalformedAttribute(3));
    }

    #[test]
    fn test_comments_and_cdata_inside() {
        let doc = scan(b"<a><!-- <b> --><![CDATA[<c> & d]]></a>");
        assert!(doc.is_ok());
        let root = doc.root().unwrap();
        let kids = doc.children(root).collect::<Vec<_>>();
        assert_eq!(doc.comment(kids[0]).unwrap().get(), " <b> ");
        assert_eq!(doc.cdata(kids[1]).unwrap().get(), "<c> & d");
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(scan_error(b"<a>"), ScanError::Unterminated);
        assert_eq!(scan_error(b"<a><b></b>text"), ScanError::Unterminated);
        assert_eq!(scan_error(b"<a"), ScanError::UnterminatedTag(0));
        assert_eq!(scan_error(b"<a x='>"), ScanError::UnterminatedTag(0));
        assert_eq!(scan_error(b"<a><!-- x"), ScanError::UnterminatedComment(3));
        assert_eq!(scan_error(b"<a><![CDATA[ x"), ScanError::UnterminatedCdata(3));
    }

    #[test]
    fn test_partial_tree_kept() {
        let doc = scan(b"<a><b>");
        assert!(!doc.is_ok());
        let root = doc.root().unwrap();
        assert_eq!(doc.name(root), "a");
        assert_eq!(doc.num_kids(root), 1);
    }

    #[test]
    fn test_mismatched_close() {
        assert_eq!(
            scan_error(b"<a></b>"),
            ScanError::MismatchedCloseTag {
                expected: "a".to_string(),
                found: "b".to_string()
            }
        );
        assert_eq!(
            scan_error(b"</a>"),
            ScanError::UnexpectedCloseTag("a".to_string())
        );
    }

    #[test]
    fn test_close_tag_trailing_whitespace() {
        assert!(scan(b"<a></a  >").is_ok());
    }

    #[test]
    fn test_epilog_ignored() {
        let doc = scan(b"<a/> trailing <b>junk");
        assert!(doc.is_ok());
        assert_eq!(doc.to_xml(), "<a/>\n");
    }

    #[test]
    fn test_text_before_root() {
        assert_eq!(scan_error(b"abc<a/>"), ScanError::TextOutsideRoot(0));
    }

    #[test]
    fn test_unicode_names() {
        let doc = scan("<größe einheit='m'>1</größe>".as_bytes());
        assert!(doc.is_ok());
        let root = doc.root().unwrap();
        assert_eq!(doc.name(root), "größe");
    }

    #[test]
    fn test_scan_twice() {
        let mut scanner = Scanner::new(b"<a><b/></a>");
        let first = scanner.scan();
        let second = scanner.scan();
        assert!(first.is_ok());
        assert!(second.is_ok());
        assert!(second.root().is_some());
        assert_eq!(second.to_xml(), first.to_xml());
    }

    #[test]
    fn test_scan_twice_keeps_failing() {
        let mut scanner = Scanner::new(b"<a>");
        for _ in 0..2 {
            assert!(matches!(
                scanner.scan().error,
                Some(crate::Error::Scan(ScanError::Unterminated))
            ));
        }
    }

    #[test]
    fn test_reset() {
        let mut scanner = Scanner::new(b"<a/>");
        assert!(scanner.scan().is_ok());
        scanner.reset(b"<b>");
        assert!(!scanner.scan().is_ok());
    }
}
