//! squiggle-io: Read-only FAST5 (HDF5) container access.
//!
//! This crate locates the raw signal dataset and the read-identifier
//! attribute inside a FAST5 container, using the paths derived from the
//! filename by `squiggle-core`.
//!

mod error;
mod fast5;

pub use error::{Error, Result};
pub use fast5::{Fast5File, SignalLookup};
