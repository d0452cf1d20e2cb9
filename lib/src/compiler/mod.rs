/*! Compiles pattern descriptions into [`Pattern`]s.

A description is scanned left to right. At each position the compiler first
tries to recognize one of the bracket class tokens; on a hit it emits a
class token and advances past the bracket text by the token's actual length.
Everything else, including the backslash and bracket-like text that is not
an exact class token, is emitted as a literal byte. Compilation is total
except for the [`MAX_PATTERN_LEN`] limit: malformed bracket text is never an
error, it is simply literal text.

Earlier revisions of this engine encoded the compiled pattern as an escaped
byte alphabet, with a reserved introducer byte marking class tags and a
doubled introducer standing for a literal occurrence of itself. The typed
[`Token`] sequence used here makes every token self-describing, so there is
no introducer to collide with and nothing to escape.
*/

use std::fmt::{Debug, Formatter};
use std::slice;

use bstr::BStr;
use log::*;

use crate::classes::Class;
use crate::matcher::Matcher;

pub use errors::Error;

mod errors;


/// Maximum number of tokens in a compiled pattern.
///
/// [`compile`] returns [`Error::PatternTooLong`] for descriptions that
/// would compile to more tokens than this. The limit replaces the fixed
/// scratch buffer of earlier revisions; it is checked before every token is
/// emitted, so a failed compile never yields a truncated pattern.
pub const MAX_PATTERN_LEN: usize = 4096;

/// A single element of a compiled pattern.
///
/// Tokens are matched one-to-one against input bytes: a `Literal` requires
/// that exact byte, a `Class` requires any byte satisfying the class
/// predicate.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) enum Token {
    Literal(u8),
    Class(Class),
}

impl Token {
    /// Returns true if this token accepts `byte`.
    #[inline]
    pub fn matches(self, byte: u8) -> bool {
        match self {
            Token::Literal(b) => byte == b,
            Token::Class(class) => class.matches(byte),
        }
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Literal(byte) => {
                write!(f, "{:?}", BStr::new(slice::from_ref(byte)))
            }
            Token::Class(class) => write!(f, "{class}"),
        }
    }
}

/// A compiled pattern, produced by [`compile`].
///
/// Immutable and reusable: one `Pattern` may be matched against any number
/// of candidate strings, and may be shared read-only across threads. It
/// holds no reference back to the description it was compiled from.
#[derive(Clone, Eq, PartialEq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    /// Number of tokens in the pattern.
    ///
    /// Each literal character and each bracket class token of the
    /// description contributes exactly one token, and each token consumes
    /// exactly one byte of input, so this is also the only input length the
    /// pattern can match.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the pattern has no tokens.
    ///
    /// An empty pattern matches only the empty string.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns true if `candidate` matches this pattern.
    ///
    /// One-shot convenience for [`Matcher::matches`].
    pub fn matches<C>(&self, candidate: C) -> bool
    where
        C: AsRef<[u8]>,
    {
        Matcher::new(self).matches(candidate)
    }

    pub(crate) fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl Debug for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

/// Compiles a pattern description into a [`Pattern`].
///
/// The description mixes literal characters with the twelve bracket class
/// tokens (`[:alnum:]`, `[:alpha:]`, `[:blank:]`, `[:cntrl:]`, `[:digit:]`,
/// `[:graph:]`, `[:lower:]`, `[:print:]`, `[:punct:]`, `[:space:]`,
/// `[:upper:]`, `[:xdigit:]`). Each class token matches exactly one byte of
/// input. Bracket-like text that is not an exact class token is taken
/// literally; the only failure mode is [`Error::PatternTooLong`].
///
/// # Example
///
/// ```rust
/// let pattern = strpat::compile("[:upper:][:digit:]!").unwrap();
///
/// assert!(pattern.matches("A9!"));
/// assert!(!pattern.matches("a9!"));
/// ```
pub fn compile<D>(description: D) -> Result<Pattern, Error>
where
    D: AsRef<[u8]>,
{
    let description = description.as_ref();
    let mut tokens = Vec::new();
    let mut cursor = description;

    while !cursor.is_empty() {
        let token = match Class::recognize(cursor) {
            Some((class, token_len)) => {
                cursor = &cursor[token_len..];
                Token::Class(class)
            }
            None => {
                let byte = cursor[0];
                cursor = &cursor[1..];
                Token::Literal(byte)
            }
        };
        if tokens.len() == MAX_PATTERN_LEN {
            return Err(Error::PatternTooLong);
        }
        tokens.push(token);
    }

    debug!(
        "compiled `{}` into {} token(s)",
        BStr::new(description),
        tokens.len()
    );

    Ok(Pattern { tokens })
}
