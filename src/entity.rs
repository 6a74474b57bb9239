//! Escaping and unescaping of character references.
//!
//! Unescaping is a small automaton: a trie over the predefined entity names
//! plus a decimal and a hexadecimal branch, each terminated by `;`. Anything
//! the automaton does not recognize is passed through untouched.
use std::borrow::Cow;

const MAX_DECIMAL_DIGITS: u8 = 7;
const MAX_HEX_DIGITS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    Ampersand,
    A,
    Am,
    Amp,
    Ap,
    Apo,
    Apos,
    L,
    Lt,
    G,
    Gt,
    Q,
    Qu,
    Quo,
    Quot,
    Hash,
    Decimal { value: u32, digits: u8 },
    HexMarker,
    Hex { value: u32, digits: u8 },
}

enum Step {
    Continue(State),
    // `None` when a numeric reference is not a Unicode scalar
    Resolved(Option<char>),
    Mismatch,
}

impl State {
    fn next(self, c: char) -> Step {
        use State::*;
        use Step::{Continue, Mismatch, Resolved};
        match (self, c) {
            (Ampersand, 'a') => Continue(A),
            (Ampersand, 'l') => Continue(L),
            (Ampersand, 'g') => Continue(G),
            (Ampersand, 'q') => Continue(Q),
            (Ampersand, '#') => Continue(Hash),

            (A, 'm') => Continue(Am),
            (Am, 'p') => Continue(Amp),
            (Amp, ';') => Resolved(Some('&')),
            (A, 'p') => Continue(Ap),
            (Ap, 'o') => Continue(Apo),
            (Apo, 's') => Continue(Apos),
            (Apos, ';') => Resolved(Some('\'')),
            (L, 't') => Continue(Lt),
            (Lt, ';') => Resolved(Some('<')),
            (G, 't') => Continue(Gt),
            (Gt, ';') => Resolved(Some('>')),
            (Q, 'u') => Continue(Qu),
            (Qu, 'o') => Continue(Quo),
            (Quo, 't') => Continue(Quot),
            (Quot, ';') => Resolved(Some('"')),

            (Hash, 'x' | 'X') => Continue(HexMarker),
            (Hash, '0'..='9') => Continue(Decimal {
                value: c as u32 - '0' as u32,
                digits: 1,
            }),
            (Decimal { value, digits }, '0'..='9') if digits < MAX_DECIMAL_DIGITS => {
                Continue(Decimal {
                    value: value * 10 + (c as u32 - '0' as u32),
                    digits: digits + 1,
                })
            }
            (Decimal { value, .. }, ';') => Resolved(char::from_u32(value)),
            (HexMarker, _) if c.is_ascii_hexdigit() => Continue(Hex {
                value: hex_value(c),
                digits: 1,
            }),
            (Hex { value, digits }, _) if c.is_ascii_hexdigit() && digits < MAX_HEX_DIGITS => {
                Continue(Hex {
                    value: (value << 4) | hex_value(c),
                    digits: digits + 1,
                })
            }
            (Hex { value, .. }, ';') => Resolved(char::from_u32(value)),

            _ => Mismatch,
        }
    }
}

#[inline]
fn hex_value(c: char) -> u32 {
    c.to_digit(16).unwrap_or(0)
}

/// Resolve predefined entities and numeric character references.
///
/// Unrecognized sequences are kept verbatim. A numeric reference that is
/// well formed but does not name a Unicode scalar is dropped entirely.
///
/// ```rust
/// use xmllex::unescape;
///
/// assert_eq!(unescape("a &lt; b &amp;&amp; c"), "a < b && c");
/// assert_eq!(unescape("&#65;&#x42;"), "AB");
/// assert_eq!(unescape("&nbsp;"), "&nbsp;");
/// ```
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    let mut result = String::with_capacity(text.len());
    let mut state = State::Text;
    // byte offset of the `&` that started the pending reference
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if state == State::Text {
            if c == '&' {
                state = State::Ampersand;
                start = i;
            } else {
                result.push(c);
            }
            continue;
        }
        match state.next(c) {
            Step::Continue(next) => state = next,
            Step::Resolved(resolved) => {
                if let Some(resolved) = resolved {
                    result.push(resolved);
                }
                state = State::Text;
            }
            Step::Mismatch => {
                result.push_str(&text[start..i]);
                if c == '&' {
                    state = State::Ampersand;
                    start = i;
                } else {
                    result.push(c);
                    state = State::Text;
                }
            }
        }
    }
    if state != State::Text {
        result.push_str(&text[start..]);
    }
    Cow::Owned(result)
}

// indexed by scalar value; empty entries pass through
static ESCAPES: [&str; 0x3F] = [
    "&#0;", "&#1;", "&#2;", "&#3;", "&#4;", "&#5;", "&#6;", "&#7;", "&#8;", "&#9;", "&#10;",
    "&#11;", "&#12;", "&#13;", "&#14;", "&#15;", "&#16;", "&#17;", "&#18;", "&#19;", "&#20;",
    "&#21;", "&#22;", "&#23;", "&#24;", "&#25;", "&#26;", "&#27;", "&#28;", "&#29;", "&#30;",
    "&#31;", // 0x20 ' '
    "", "", "&quot;", "", "", "", "&amp;", "&apos;", "", "", "", "", "", "", "", "",
    // 0x30 '0'
    "", "", "", "", "", "", "", "", "", "", "", "", "&lt;", "", "&gt;",
];

#[inline]
fn escape_sequence(c: char) -> Option<&'static str> {
    let sequence = *ESCAPES.get(c as usize)?;
    if sequence.is_empty() {
        None
    } else {
        Some(sequence)
    }
}

/// Replace markup characters and control characters by references.
///
/// ```rust
/// use xmllex::escape;
///
/// assert_eq!(escape("<a href='x'>"), "&lt;a href=&apos;x&apos;&gt;");
/// assert_eq!(escape("tab\there"), "tab&#9;here");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| escape_sequence(c).is_some()) {
        return Cow::Borrowed(text);
    }
    let mut result = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match escape_sequence(c) {
            Some(sequence) => result.push_str(sequence),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}
