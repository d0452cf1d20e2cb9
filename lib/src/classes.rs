/*! POSIX-style character classes.

This is the closed vocabulary of classes a pattern description can use.
Each class has a bracket token (the text recognized by the compiler) and a
single-byte classification predicate (the test applied by the matcher).
The set is fixed at build time and is not user-extensible.
*/

use std::fmt::{Display, Formatter};

/// A POSIX-style character class.
///
/// Each class matches exactly one byte at a time. The predicates follow
/// POSIX `ctype.h` semantics for the ASCII range; bytes above `0x7F` belong
/// to no class.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Class {
    /// Letters and digits (`[:alnum:]`).
    Alnum,
    /// Letters (`[:alpha:]`).
    Alpha,
    /// Space and horizontal tab (`[:blank:]`).
    Blank,
    /// Control characters (`[:cntrl:]`).
    Cntrl,
    /// Decimal digits (`[:digit:]`).
    Digit,
    /// Visible characters, excluding space (`[:graph:]`).
    Graph,
    /// Lowercase letters (`[:lower:]`).
    Lower,
    /// Visible characters and space (`[:print:]`).
    Print,
    /// Punctuation (`[:punct:]`).
    Punct,
    /// Whitespace (`[:space:]`).
    Space,
    /// Uppercase letters (`[:upper:]`).
    Upper,
    /// Hexadecimal digits (`[:xdigit:]`).
    Xdigit,
}

/// Lookup table from bracket token text to class.
///
/// Token widths are not uniform (`[:xdigit:]` is one byte longer than the
/// rest), so callers must advance by the matched token's actual length,
/// never by a fixed amount.
static CLASSES: [(&[u8], Class); 12] = [
    (b"[:alnum:]", Class::Alnum),
    (b"[:alpha:]", Class::Alpha),
    (b"[:blank:]", Class::Blank),
    (b"[:cntrl:]", Class::Cntrl),
    (b"[:digit:]", Class::Digit),
    (b"[:graph:]", Class::Graph),
    (b"[:lower:]", Class::Lower),
    (b"[:print:]", Class::Print),
    (b"[:punct:]", Class::Punct),
    (b"[:space:]", Class::Space),
    (b"[:upper:]", Class::Upper),
    (b"[:xdigit:]", Class::Xdigit),
];

impl Class {
    /// If `desc` starts with one of the bracket class tokens, returns the
    /// class together with the token's length in bytes.
    ///
    /// Recognition fires only on an exact, fully-formed token. Anything
    /// else, including unterminated brackets and unknown class names, is
    /// left for the caller to treat as literal text.
    pub(crate) fn recognize(desc: &[u8]) -> Option<(Class, usize)> {
        CLASSES.iter().find_map(|(token, class)| {
            desc.starts_with(token).then_some((*class, token.len()))
        })
    }

    /// Returns true if `byte` belongs to this class.
    pub fn matches(self, byte: u8) -> bool {
        match self {
            Class::Alnum => byte.is_ascii_alphanumeric(),
            Class::Alpha => byte.is_ascii_alphabetic(),
            Class::Blank => matches!(byte, b' ' | b'\t'),
            Class::Cntrl => byte.is_ascii_control(),
            Class::Digit => byte.is_ascii_digit(),
            Class::Graph => byte.is_ascii_graphic(),
            Class::Lower => byte.is_ascii_lowercase(),
            Class::Print => byte.is_ascii_graphic() || byte == b' ',
            Class::Punct => byte.is_ascii_punctuation(),
            // POSIX isspace includes vertical tab, which
            // u8::is_ascii_whitespace leaves out.
            Class::Space => matches!(byte, b' ' | b'\t'..=b'\r'),
            Class::Upper => byte.is_ascii_uppercase(),
            Class::Xdigit => byte.is_ascii_hexdigit(),
        }
    }

    /// The class name as it appears inside the bracket token.
    pub fn name(self) -> &'static str {
        match self {
            Class::Alnum => "alnum",
            Class::Alpha => "alpha",
            Class::Blank => "blank",
            Class::Cntrl => "cntrl",
            Class::Digit => "digit",
            Class::Graph => "graph",
            Class::Lower => "lower",
            Class::Print => "print",
            Class::Punct => "punct",
            Class::Space => "space",
            Class::Upper => "upper",
            Class::Xdigit => "xdigit",
        }
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[:{}:]", self.name())
    }
}
