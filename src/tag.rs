//! Extraction of attributes from the inside of a start tag.
use memchr::memchr;

use crate::charclass::{is_name, is_quote_byte, is_whitespace_byte};
use crate::codepoint::{classify, text_of, Encoding};
use crate::entity::unescape;
use crate::error::ScanError;
use crate::xmlvalue::Attribute;

fn skip_whitespace(span: &[u8], mut pos: usize) -> usize {
    while pos < span.len() && is_whitespace_byte(span[pos]) {
        pos += 1;
    }
    pos
}

/// Read `name="value"` pairs from the part of a tag after its name.
///
/// `offset` is the position of `span` in the scanned input and is only used
/// for error reporting. Values are unescaped only when the tag contained an
/// ampersand.
pub(crate) fn parse_attributes(
    span: &[u8],
    offset: usize,
    encoding: Encoding,
    has_ampersand: bool,
) -> Result<Vec<Attribute>, ScanError> {
    let mut attributes = Vec::new();
    let mut pos = skip_whitespace(span, 0);
    while pos < span.len() {
        let malformed = ScanError::MalformedAttribute(offset + pos);

        let name_start = pos;
        while pos < span.len() && !is_whitespace_byte(span[pos]) && span[pos] != b'=' {
            pos += 1;
        }
        let name_bytes = &span[name_start..pos];
        if classify(name_bytes) == Encoding::ContainsInvalidBytes {
            return Err(malformed);
        }
        let name = text_of(name_bytes, encoding);
        if !is_name(&name) {
            return Err(malformed);
        }

        pos = skip_whitespace(span, pos);
        if span.get(pos) != Some(&b'=') {
            return Err(malformed);
        }
        pos = skip_whitespace(span, pos + 1);

        let quote = match span.get(pos) {
            Some(&quote) if is_quote_byte(quote) => quote,
            _ => return Err(malformed),
        };
        let value_start = pos + 1;
        let value_len = memchr(quote, &span[value_start..]).ok_or(malformed.clone())?;
        let value_end = value_start + value_len;
        let raw = text_of(&span[value_start..value_end], encoding);
        let value = if has_ampersand {
            unescape(&raw).into_owned()
        } else {
            raw.into_owned()
        };

        pos = value_end + 1;
        if pos < span.len() && !is_whitespace_byte(span[pos]) {
            return Err(malformed);
        }
        attributes.push(Attribute::new(name.into_owned(), value));
        pos = skip_whitespace(span, pos);
    }
    Ok(attributes)
}
