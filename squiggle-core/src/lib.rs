//! squiggle-core: FAST5 filename conventions and core types.
//!
//! This crate knows how MinKNOW-style FAST5 filenames encode the channel
//! and read numbers, and how those numbers map to paths inside the HDF5
//! container. It performs no I/O.
//!

pub mod error;
pub mod read_info;

pub use error::{Error, Result};
pub use read_info::ReadInfo;
