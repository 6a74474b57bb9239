use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use tracing::debug;
use xhtmlchardet::detect;

// The encoding named in the XML declaration, if any.
fn declared_encoding(data: &[u8]) -> Option<&'static Encoding> {
    let mut cursor = std::io::Cursor::new(data);
    let charsets = detect(&mut cursor, None).ok()?;
    // no encoding detected
    let label = charsets.first()?;
    Encoding::for_label(label.as_bytes())
}

fn decode(encoding: &'static Encoding, data: &[u8]) -> Cow<'static, [u8]> {
    debug!(encoding = encoding.name(), "decoding source");
    let (text, _) = encoding.decode_without_bom_handling(data);
    Cow::Owned(text.into_owned().into_bytes())
}

/// Bring raw input to UTF-8.
///
/// A byte order mark decides the encoding. Without one, input that is valid
/// UTF-8 is borrowed as is. Otherwise a declared encoding is honored; if there
/// is none the bytes are passed on unchanged and invalid sequences are left
/// for the scanner to deal with.
pub(crate) fn to_utf8(data: &[u8]) -> Cow<'_, [u8]> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(data) {
        if encoding == UTF_8 {
            // the scanner skips the mark itself
            return Cow::Borrowed(data);
        }
        return decode(encoding, &data[bom_len..]);
    }
    if std::str::from_utf8(data).is_ok() || !data.starts_with(b"<?xml") {
        return Cow::Borrowed(data);
    }
    match declared_encoding(data) {
        Some(encoding) if encoding != UTF_8 => decode(encoding, data),
        _ => Cow::Borrowed(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_borrowed() {
        let data = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><a>größe</a>".as_bytes();
        assert!(matches!(to_utf8(data), Cow::Borrowed(_)));
    }

    #[test]
    fn test_utf8_bom_kept() {
        let data = b"\xEF\xBB\xBF<a/>";
        assert_eq!(to_utf8(data).as_ref(), data);
    }

    #[test]
    fn test_invalid_without_declaration_untouched() {
        let data = b"<a>\x80</a>";
        assert_eq!(to_utf8(data).as_ref(), data);
    }

    #[test]
    fn test_iso8859_1() {
        let data = b"<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><a>caf\xE9</a>";
        assert_eq!(
            to_utf8(data).as_ref(),
            "<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><a>café</a>".as_bytes()
        );
    }

    #[test]
    fn test_utf16_bom() {
        let mut data = vec![0xFF, 0xFE];
        for unit in "<a>x</a>".encode_utf16() {
            data.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(to_utf8(&data).as_ref(), b"<a>x</a>");
    }
}
