use thiserror::Error;

use crate::compiler::MAX_PATTERN_LEN;

/// Errors returned by [`compile`](crate::compile).
#[derive(Error, Debug, Eq, PartialEq)]
pub enum Error {
    /// The compiled pattern would exceed
    /// [`MAX_PATTERN_LEN`](crate::MAX_PATTERN_LEN) tokens.
    #[error("pattern too long (max: {} tokens)", MAX_PATTERN_LEN)]
    PatternTooLong,
}
