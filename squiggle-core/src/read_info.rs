//! Filename convention parsing for FAST5 recording files.
//!
//! MinKNOW names single-read FAST5 files like
//! `<prefix>_ch<channel>_read<read>_strand<digit>.fast5`, where the strand
//! segment may be absent. The read number selects the raw signal dataset
//! and the event-detection group inside the container.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

static FILENAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.+_ch(\d+)_read(\d+)(?:_strand\d?)?\.fast5$").expect("pattern is valid")
});

/// Channel and read numbers parsed from a FAST5 basename.
///
/// Both numbers are kept as the captured text, never parsed to integers,
/// so the container paths reproduce the filename digits exactly (including
/// any leading zeros).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadInfo {
    channel: String,
    read: String,
}

impl ReadInfo {
    /// Parses the basename of `path` against the FAST5 naming convention.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPath`] if the path has no UTF-8 basename,
    /// and [`Error::PatternMismatch`] if the basename does not follow the
    /// `_ch<N>_read<M>` convention. No file I/O is performed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let basename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::InvalidPath(path.display().to_string()))?;

        let captures = FILENAME_PATTERN
            .captures(basename)
            .ok_or_else(|| Error::PatternMismatch(basename.to_string()))?;

        Ok(Self {
            channel: captures[1].to_string(),
            read: captures[2].to_string(),
        })
    }

    /// Channel (pore) number as captured from the filename.
    ///
    /// Unused by the extraction flow itself; kept for diagnostics.
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Read number as captured from the filename.
    #[must_use]
    pub fn read(&self) -> &str {
        &self.read
    }

    /// HDF5 path of the raw signal dataset for this read.
    #[must_use]
    pub fn signal_path(&self) -> String {
        format!("/Raw/Reads/Read_{}/Signal", self.read)
    }

    /// HDF5 path of the event-detection group carrying the `read_id`
    /// attribute for this read.
    #[must_use]
    pub fn event_group_path(&self) -> String {
        format!("/Analyses/EventDetection_000/Reads/Read_{}", self.read)
    }
}
