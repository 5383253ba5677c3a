//! On-disk FAST5 fixtures for CLI tests.

use std::path::{Path, PathBuf};

use hdf5::types::VarLenAscii;
use hdf5::File;
use ndarray::ArrayView1;

/// Builds a minimal FAST5-shaped HDF5 file. `read_id` controls whether the
/// event-detection group exists; `signal` controls whether the raw signal
/// dataset exists.
pub fn create_fast5(
    dir: &Path,
    name: &str,
    read: &str,
    read_id: Option<&str>,
    signal: Option<&[i16]>,
) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();

    if let Some(samples) = signal {
        let raw = file.create_group("Raw").unwrap();
        let reads = raw.create_group("Reads").unwrap();
        let read_group = reads.create_group(&format!("Read_{read}")).unwrap();
        let dataset = read_group
            .new_dataset::<i16>()
            .shape((samples.len(),))
            .create("Signal")
            .unwrap();
        dataset.write(ArrayView1::from(samples)).unwrap();
    }

    if let Some(id) = read_id {
        let analyses = file.create_group("Analyses").unwrap();
        let detection = analyses.create_group("EventDetection_000").unwrap();
        let reads = detection.create_group("Reads").unwrap();
        let read_group = reads.create_group(&format!("Read_{read}")).unwrap();
        let value = VarLenAscii::from_ascii(id).unwrap();
        read_group
            .new_attr::<VarLenAscii>()
            .create("read_id")
            .unwrap()
            .write_scalar(&value)
            .unwrap();
    }

    path
}
