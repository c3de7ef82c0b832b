//! Error types shared by the lzhuff library.
//!
//! Every failure the original utilities reported by printing and exiting is
//! surfaced here as a typed, recoverable error instead. I/O problems always
//! propagate to the caller; nothing continues on a partial stream.

use thiserror::Error;

/// Result type alias for lzhuff operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building trees, resolving codes, or compressing.
#[derive(Debug, Error)]
pub enum Error {
    /// The input buffer or stream contained no bytes.
    #[error("input contains no data")]
    EmptyInput,

    /// A code string held something besides '0' and '1'.
    #[error("invalid character {0:?} in code string")]
    BadCodeChar(char),

    /// A code ran out of bits at an internal node, before reaching a leaf.
    #[error("code exhausted at depth {depth_reached} before reaching a leaf")]
    CodeTruncated { depth_reached: usize },

    /// Underlying file or stream failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
