//! Error types for squiggle-core.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for filename parsing.
#[derive(Error, Debug)]
pub enum Error {
    /// Basename does not follow the `_ch<N>_read<M>` naming convention.
    #[error("filename does not match FAST5 naming convention: {0}")]
    PatternMismatch(String),

    /// Path has no UTF-8 basename to match against.
    #[error("path has no usable basename: {0}")]
    InvalidPath(String),
}
