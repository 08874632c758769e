//! Error types for buffer checking.

use thiserror::Error;

/// Errors raised by the checking core.
///
/// Degenerate input (blank buffers, blank queries, removing absent words) is
/// never an error; the only failure is a tokenizer handing back text that is
/// not part of the buffer it was given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A tokenizer produced a token that cannot be found in the buffer at or
    /// after the current search position.
    #[error("cannot find token '{token}' starting at position {position}")]
    TokenNotFound { token: String, position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
