/*! Matches candidate strings against compiled [`Pattern`]s.

The matching loop walks the candidate and the pattern in lockstep, one
token per input byte, in a single pass with no backtracking. The first
failing position fails the whole match; there is no retry at a different
alignment, and a class token never consumes more than one byte. A match
succeeds only when the candidate and the pattern are exhausted
simultaneously, so the pattern is anchored at both ends.
*/

use log::*;

use crate::compiler::Pattern;


/// Matches candidate strings against a compiled [`Pattern`].
///
/// The matcher borrows the pattern; create it once and call
/// [`Matcher::matches`] for each candidate. All per-call state is local to
/// the call, so one pattern can back matchers on any number of threads.
pub struct Matcher<'p> {
    pattern: &'p Pattern,
}

impl<'p> Matcher<'p> {
    /// Creates a new [`Matcher`] for the given pattern.
    pub fn new(pattern: &'p Pattern) -> Self {
        Self { pattern }
    }

    /// Returns true if `candidate` matches the pattern.
    ///
    /// This is a total function: a non-matching candidate is the ordinary
    /// `false` result, never an error. Runs in time proportional to the
    /// shorter of the candidate and the pattern, with an early exit at the
    /// first mismatch.
    pub fn matches<C>(&self, candidate: C) -> bool
    where
        C: AsRef<[u8]>,
    {
        let mut tokens = self.pattern.tokens().iter();
        let mut input = candidate.as_ref().iter();
        let mut pos = 0;

        loop {
            match (tokens.next(), input.next()) {
                (Some(token), Some(&byte)) => {
                    if !token.matches(byte) {
                        trace!(
                            "mismatch at offset {pos}: {token:?} \
                             does not accept {byte:#04x}"
                        );
                        return false;
                    }
                    pos += 1;
                }
                // Anchored: success requires mutual exhaustion.
                (None, None) => return true,
                _ => {
                    trace!("length mismatch after {pos} byte(s)");
                    return false;
                }
            }
        }
    }
}
