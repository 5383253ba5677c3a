//! I/O error types.

use thiserror::Error;

/// Result type for FAST5 I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// FAST5 I/O error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying HDF5 library error.
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// The event-detection group for the read is absent.
    #[error("missing event-detection group: {0}")]
    MissingReadGroup(String),

    /// The event-detection group exists but carries no `read_id` attribute.
    #[error("missing read_id attribute on {0}")]
    MissingReadId(String),

    /// The `read_id` attribute could not be decoded as text.
    #[error("read_id attribute on {0} is not a decodable string")]
    UndecodableReadId(String),
}
