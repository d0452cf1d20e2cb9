/*! An anchored string-pattern engine with POSIX-style character classes.

A pattern description mixes literal characters with bracket class tokens
like `[:alpha:]` or `[:digit:]`. The description is compiled once into an
immutable [`Pattern`], which can then be matched against any number of
candidate strings.

Matching is fully anchored and strictly one token per input byte: a literal
matches exactly that byte, a class token matches exactly one byte satisfying
the class predicate, and the pattern must account for the candidate from its
first byte to its last. There are no quantifiers, alternations, captures or
backtracking; the engine is the primitive that sits beneath validators and
simple filters, not a general regular-expression engine.

# Example

```rust
// Compile the description once...
let pattern = strpat::compile("[:graph:]@[:graph:].[:alpha:]").unwrap();

// ...and match it against any number of candidates.
let matcher = strpat::Matcher::new(&pattern);

assert!(matcher.matches("a@b.c"));
assert!(!matcher.matches("a@b.1"));
assert!(!matcher.matches("ab.c"));
```
*/

#![deny(missing_docs)]

pub use classes::Class;
pub use compiler::compile;
pub use compiler::Error;
pub use compiler::Pattern;
pub use compiler::MAX_PATTERN_LEN;
pub use matcher::Matcher;

mod classes;
mod compiler;
mod matcher;

#[cfg(test)]
mod tests;
