//! Character classes used by the scanner and the attribute finder.

const WHITESPACE: u8 = 0b0001;
const QUOTE: u8 = 0b0010;
const NAME_START: u8 = 0b0100;
const NAME_CHAR: u8 = 0b1000;

static ASCII_CLASSES: [u8; 128] = build_ascii_classes();

const fn build_ascii_classes() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut b = 0;
    while b < 128 {
        let c = b as u8;
        let mut class = 0;
        if matches!(c, b' ' | b'\t' | b'\n' | b'\r') {
            class |= WHITESPACE;
        }
        if matches!(c, b'"' | b'\'') {
            class |= QUOTE;
        }
        if c.is_ascii_alphabetic() || c == b'_' || c == b':' {
            class |= NAME_START | NAME_CHAR;
        }
        if c.is_ascii_digit() || c == b'-' || c == b'.' {
            class |= NAME_CHAR;
        }
        table[b] = class;
        b += 1;
    }
    table
}

#[inline]
fn ascii_class(b: u8) -> u8 {
    if b < 0x80 {
        ASCII_CLASSES[b as usize]
    } else {
        0
    }
}

/// XML whitespace: space, tab, carriage return, line feed.
#[inline]
pub(crate) fn is_whitespace_byte(b: u8) -> bool {
    ascii_class(b) & WHITESPACE != 0
}

#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    c.is_ascii() && is_whitespace_byte(c as u8)
}

#[inline]
pub(crate) fn is_quote_byte(b: u8) -> bool {
    ascii_class(b) & QUOTE != 0
}

/// Whether `c` may start an XML name.
pub(crate) fn is_name_start(c: char) -> bool {
    if c.is_ascii() {
        return ascii_class(c as u8) & NAME_START != 0;
    }
    matches!(c,
        '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}'
    )
}

/// Whether `c` may continue an XML name.
pub(crate) fn is_name_char(c: char) -> bool {
    if c.is_ascii() {
        return ascii_class(c as u8) & NAME_CHAR != 0;
    }
    is_name_start(c)
        || matches!(c, '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

/// Whether `name` is a well-formed XML name.
pub(crate) fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_name_start(c) => chars.all(is_name_char),
        _ => false,
    }
}
