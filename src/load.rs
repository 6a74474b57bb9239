use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::Error;
use crate::scanner::Scanner;
use crate::source::to_utf8;
use crate::xmldoc::XmlDoc;

/// ## Loading
///
/// Loading never panics and never returns an error. Check
/// [`XmlDoc::is_ok`] afterwards; [`XmlDoc::err_desc`] says what went wrong.
impl XmlDoc {
    fn failed(error: Error) -> Self {
        let mut doc = XmlDoc::new();
        doc.error = Some(error);
        doc
    }

    /// Scan a document from raw bytes.
    ///
    /// A byte order mark or a declared encoding other than UTF-8 is honored.
    ///
    /// ```rust
    /// use xmllex::XmlDoc;
    ///
    /// let doc = XmlDoc::from_bytes(b"<a>\x80</a>");
    /// assert!(doc.is_ok());
    /// assert_eq!(doc.body(doc.root().unwrap()), "\u{FFFD}");
    /// ```
    pub fn from_bytes(data: &[u8]) -> Self {
        let data = to_utf8(data);
        let mut scanner = Scanner::new(&data);
        scanner.scan()
    }

    /// Scan a document from a string.
    ///
    /// ```rust
    /// use xmllex::XmlDoc;
    ///
    /// let doc = XmlDoc::parse("<!-- no root -->");
    /// assert!(!doc.is_ok());
    /// ```
    pub fn parse(text: &str) -> Self {
        Scanner::new(text.as_bytes()).scan()
    }

    /// Read and scan a file.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(data) => XmlDoc::from_bytes(&data),
            Err(error) => {
                debug!(path = %path.display(), %error, "cannot read file");
                XmlDoc::failed(Error::CannotAccessFile(error))
            }
        }
    }

    /// Read a stream to its end and scan it.
    pub fn from_reader<R: Read>(mut reader: R) -> Self {
        let mut data = Vec::new();
        match reader.read_to_end(&mut data) {
            Ok(_) => XmlDoc::from_bytes(&data),
            Err(error) => {
                debug!(%error, "cannot read stream");
                XmlDoc::failed(Error::CannotAccessStream(error))
            }
        }
    }

    /// Replace this document with the contents of a file. Returns
    /// [`XmlDoc::is_ok`].
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> bool {
        *self = XmlDoc::from_file(path);
        self.is_ok()
    }

    /// Replace this document with one scanned from bytes.
    pub fn load_from_xml(&mut self, data: &[u8]) -> bool {
        *self = XmlDoc::from_bytes(data);
        self.is_ok()
    }

    /// Replace this document with one read from a stream.
    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> bool {
        *self = XmlDoc::from_reader(reader);
        self.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "broken"))
        }
    }

    #[test]
    fn test_missing_file() {
        let doc = XmlDoc::from_file("/definitely/not/here.xml");
        assert!(!doc.is_ok());
        assert_eq!(doc.err_desc().as_deref(), Some("cannot access file"));
        assert!(doc.root().is_none());
    }

    #[test]
    fn test_broken_stream() {
        let doc = XmlDoc::from_reader(Broken);
        assert_eq!(doc.err_desc().as_deref(), Some("cannot access stream"));
    }

    #[test]
    fn test_reader() {
        let doc = XmlDoc::from_reader(&b"<a><b/></a>"[..]);
        assert!(doc.is_ok());
        assert_eq!(doc.num_kids(doc.root().unwrap()), 1);
    }

    #[test]
    fn test_load_replaces() {
        let mut doc = XmlDoc::parse("<a/>");
        assert!(!doc.load_from_xml(b"<b>"));
        assert_eq!(
            doc.err_desc().as_deref(),
            Some("some element not properly terminated")
        );
        assert_eq!(doc.name(doc.root().unwrap()), "b");
        assert!(doc.load_from_reader(&b"<c/>"[..]));
        assert_eq!(doc.name(doc.root().unwrap()), "c");
    }

    #[test]
    fn test_declared_latin1() {
        let doc = XmlDoc::from_bytes(b"<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><a>caf\xE9</a>");
        assert!(doc.is_ok());
        assert_eq!(doc.body(doc.root().unwrap()), "café");
        assert_eq!(doc.prolog().encoding(), Some("iso-8859-1"));
    }
}
