//! Decoding of single Unicode scalars from a byte cursor.
//!
//! The scanner works on raw bytes so it can survive input that is not valid
//! UTF-8. Every lexeme it produces carries an [`Encoding`] that says whether
//! its bytes can be used as a `str` directly or have to be rebuilt.
use std::borrow::Cow;

/// Scalar substituted for a run of invalid bytes.
pub const REPLACEMENT: char = '\u{FFFD}';

/// What is known about the bytes of a lexeme.
///
/// The order matters: merging two lexemes keeps the worst of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Encoding {
    /// Only bytes below 0x80.
    #[default]
    Ascii,
    /// Multi-byte UTF-8, all of it well formed.
    ValidUnicode,
    /// At least one byte sequence that does not decode.
    ContainsInvalidBytes,
}

impl Encoding {
    /// Combine the knowledge about two adjacent spans.
    #[inline]
    pub fn merge(self, other: Encoding) -> Encoding {
        self.max(other)
    }

    /// Whether text with this encoding can be borrowed as a `str`.
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Encoding::ContainsInvalidBytes
    }
}

/// Why a scalar could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Nothing left to decode.
    Empty,
    /// The leading byte can never start a sequence, or the sequence is
    /// overlong, a surrogate, or out of range.
    Invalid,
    /// The sequence runs past the end of the input.
    Truncated,
}

#[inline]
fn sequence_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Decode the scalar at the start of `bytes`.
///
/// Returns the scalar and the number of bytes it occupies.
pub fn decode(bytes: &[u8]) -> Result<(char, usize), DecodeError> {
    let lead = *bytes.first().ok_or(DecodeError::Empty)?;
    if lead < 0x80 {
        return Ok((lead as char, 1));
    }
    let width = sequence_width(lead).ok_or(DecodeError::Invalid)?;
    let sequence = bytes.get(..width).ok_or(DecodeError::Truncated)?;
    // from_utf8 rejects overlong forms, surrogates and bad continuation bytes
    let s = std::str::from_utf8(sequence).map_err(|_| DecodeError::Invalid)?;
    let c = s.chars().next().ok_or(DecodeError::Invalid)?;
    Ok((c, width))
}

/// Length of the maximal run of undecodable bytes at the start of `bytes`.
///
/// Never zero for non-empty input, so callers always make progress.
pub fn invalid_run(bytes: &[u8]) -> usize {
    let mut len = 1;
    while len < bytes.len() && decode(&bytes[len..]).is_err() {
        len += 1;
    }
    len.min(bytes.len()).max(1)
}

/// Classify a span of bytes.
pub fn classify(bytes: &[u8]) -> Encoding {
    if bytes.is_ascii() {
        return Encoding::Ascii;
    }
    let mut pos = 0;
    while pos < bytes.len() {
        match decode(&bytes[pos..]) {
            Ok((_, width)) => pos += width,
            Err(_) => return Encoding::ContainsInvalidBytes,
        }
    }
    Encoding::ValidUnicode
}

/// Turn a span into text.
///
/// Valid spans are borrowed. Spans containing invalid bytes are rebuilt with
/// each invalid run replaced by a single [`REPLACEMENT`].
pub fn text_of(bytes: &[u8], encoding: Encoding) -> Cow<'_, str> {
    if encoding.is_valid() {
        if let Ok(s) = std::str::from_utf8(bytes) {
            return Cow::Borrowed(s);
        }
    }
    Cow::Owned(rebuild(bytes))
}

fn rebuild(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len());
    let mut pos = 0;
    while pos < bytes.len() {
        match decode(&bytes[pos..]) {
            Ok((c, width)) => {
                result.push(c);
                pos += width;
            }
            Err(_) => {
                result.push(REPLACEMENT);
                pos += invalid_run(&bytes[pos..]);
            }
        }
    }
    result
}
