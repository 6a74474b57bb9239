//! Normalization of character data found between tags.
use std::borrow::Cow;

use memchr::memchr;

use crate::charclass::{is_whitespace, is_whitespace_byte};
use crate::codepoint::{decode, invalid_run, Encoding, REPLACEMENT};
use crate::entity::unescape;

/// Collapse every run of XML whitespace into one space and drop leading and
/// trailing whitespace.
///
/// Text that is already collapsed is borrowed.
pub(crate) fn collapse_whitespace(bytes: &[u8], encoding: Encoding) -> Cow<'_, str> {
    match encoding {
        Encoding::Ascii if bytes.is_ascii() => collapse_ascii(bytes),
        _ => Cow::Owned(collapse_scalars(bytes)),
    }
}

/// Turn the text between two tags into the body of a content node.
///
/// Whitespace is collapsed first; references are only resolved when the text
/// contains an ampersand.
pub(crate) fn normalize(bytes: &[u8], encoding: Encoding) -> Cow<'_, str> {
    let collapsed = collapse_whitespace(bytes, encoding);
    if memchr(b'&', bytes).is_none() {
        return collapsed;
    }
    if let Cow::Owned(unescaped) = unescape(&collapsed) {
        return Cow::Owned(unescaped);
    }
    collapsed
}

fn is_collapsed(bytes: &[u8]) -> bool {
    let mut previous_space = true;
    for &b in bytes {
        if is_whitespace_byte(b) {
            if b != b' ' || previous_space {
                return false;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
    }
    !previous_space || bytes.is_empty()
}

fn collapse_ascii(bytes: &[u8]) -> Cow<'_, str> {
    if is_collapsed(bytes) {
        if let Ok(s) = std::str::from_utf8(bytes) {
            return Cow::Borrowed(s);
        }
    }
    let mut result = String::with_capacity(bytes.len());
    let mut pending_space = false;
    for &b in bytes {
        if is_whitespace_byte(b) {
            pending_space = true;
            continue;
        }
        if pending_space && !result.is_empty() {
            result.push(' ');
        }
        pending_space = false;
        result.push(b as char);
    }
    Cow::Owned(result)
}

fn collapse_scalars(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len());
    let mut pending_space = false;
    let mut pos = 0;
    while pos < bytes.len() {
        let c = match decode(&bytes[pos..]) {
            Ok((c, width)) => {
                pos += width;
                c
            }
            Err(_) => {
                pos += invalid_run(&bytes[pos..]);
                REPLACEMENT
            }
        };
        if is_whitespace(c) {
            pending_space = true;
            continue;
        }
        if pending_space && !result.is_empty() {
            result.push(' ');
        }
        pending_space = false;
        result.push(c);
    }
    result
}
