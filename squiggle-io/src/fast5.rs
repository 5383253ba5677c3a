//! FAST5 container access.

use std::path::Path;

use hdf5::types::{FixedAscii, VarLenAscii, VarLenUnicode};
use hdf5::{Attribute, File};
use squiggle_core::ReadInfo;

use crate::{Error, Result};

/// Read identifiers are UUIDs (36 bytes); allow headroom for
/// non-standard identifiers when reading fixed-length attributes.
const READ_ID_CAPACITY: usize = 64;

/// Outcome of a raw-signal lookup.
///
/// A missing dataset is a degraded-but-continues condition for the caller,
/// so it is represented as a value rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignalLookup {
    /// The signal dataset exists; samples are fully materialized.
    Found(Vec<i16>),
    /// No dataset at the expected signal path.
    NotFound,
}

/// A FAST5 recording file opened for read-only access.
///
/// The underlying HDF5 handle is closed on drop; handles are never cached
/// or shared across extraction calls.
pub struct Fast5File {
    file: File,
}

impl Fast5File {
    /// Opens a FAST5 container read-only.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened as HDF5.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            file: File::open(path)?,
        })
    }

    /// Looks up the raw signal dataset for the given read.
    ///
    /// # Errors
    /// Returns an error if the dataset exists but its samples cannot be
    /// read. An absent dataset is reported as [`SignalLookup::NotFound`],
    /// not as an error.
    pub fn raw_signal(&self, info: &ReadInfo) -> Result<SignalLookup> {
        match self.file.dataset(&info.signal_path()) {
            Ok(dataset) => Ok(SignalLookup::Found(dataset.read_raw::<i16>()?)),
            Err(_) => Ok(SignalLookup::NotFound),
        }
    }

    /// Reads and decodes the `read_id` attribute for the given read.
    ///
    /// # Errors
    /// Returns [`Error::MissingReadGroup`] if the event-detection group is
    /// absent, [`Error::MissingReadId`] if the group carries no `read_id`
    /// attribute, and [`Error::UndecodableReadId`] if the attribute cannot
    /// be decoded as text.
    pub fn read_id(&self, info: &ReadInfo) -> Result<String> {
        let group_path = info.event_group_path();
        let group = self
            .file
            .group(&group_path)
            .map_err(|_| Error::MissingReadGroup(group_path.clone()))?;
        let attr = group
            .attr("read_id")
            .map_err(|_| Error::MissingReadId(group_path.clone()))?;
        read_string_attr(&attr).ok_or(Error::UndecodableReadId(group_path))
    }
}

// FAST5 writers disagree on the string type of read_id; accept the
// variants seen in the wild.
fn read_string_attr(attr: &Attribute) -> Option<String> {
    if let Ok(value) = attr.read_scalar::<VarLenAscii>() {
        return Some(value.as_str().to_string());
    }
    if let Ok(value) = attr.read_scalar::<VarLenUnicode>() {
        return Some(value.as_str().to_string());
    }
    if let Ok(value) = attr.read_scalar::<FixedAscii<READ_ID_CAPACITY>>() {
        return Some(value.as_str().to_string());
    }
    None
}
