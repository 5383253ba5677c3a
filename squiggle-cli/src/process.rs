//! Per-file extraction and rendering flow.

use std::path::{Path, PathBuf};

use squiggle_core::ReadInfo;
use squiggle_io::{Fast5File, SignalLookup};

use crate::{CliError, Result};

/// Outcome of processing one recording file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Signal extracted and plot written.
    Rendered { read_id: String, output: PathBuf },
    /// No signal dataset for the read; rendering skipped.
    MissingSignal { read_id: String },
    /// Processing aborted for this one file.
    Failed(CliError),
}

/// Extracts the raw signal from `path` and renders it into `out_dir`.
///
/// All failure modes are folded into the returned outcome so batch workers
/// never panic or abort siblings.
pub fn process_file(path: &Path, out_dir: &Path) -> FileOutcome {
    match try_process(path, out_dir) {
        Ok(outcome) => outcome,
        Err(err) => FileOutcome::Failed(err),
    }
}

fn try_process(path: &Path, out_dir: &Path) -> Result<FileOutcome> {
    // Parse before touching the file; a bad name never opens the container.
    let info = ReadInfo::from_path(path)?;

    let fast5 = Fast5File::open(path)?;
    let signal = fast5.raw_signal(&info)?;
    if signal == SignalLookup::NotFound {
        println!("Couldn't find raw signal");
    }
    let read_id = fast5.read_id(&info)?;

    match signal {
        SignalLookup::Found(samples) => {
            let output = out_dir.join(format!("{read_id}.raw.png"));
            squiggle_render::render_signal(&samples, &output)?;
            Ok(FileOutcome::Rendered { read_id, output })
        }
        SignalLookup::NotFound => Ok(FileOutcome::MissingSignal { read_id }),
    }
}
