//! squiggle-render: Raw signal line-plot rendering.
//!
//! Renders a 1-D signal trace as a PNG line plot, sample index on the
//! horizontal axis and sample value on the vertical axis, with no axis
//! labels, legend, or title.
//!

use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Rendering error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Plot backend or drawing failure.
    #[error("rendering error: {0}")]
    Backend(String),
}

fn backend_error<E: std::error::Error>(err: E) -> Error {
    Error::Backend(err.to_string())
}

const PLOT_WIDTH: u32 = 1280;
const PLOT_HEIGHT: u32 = 720;

/// Renders `samples` as a line plot and writes it to `out_path`,
/// overwriting any existing file. An empty trace produces an empty chart.
///
/// All backend resources are released before returning, so repeated calls
/// do not accumulate plotting state.
///
/// # Errors
/// Returns an error if the backend cannot write the output file or a
/// drawing operation fails.
#[allow(clippy::cast_precision_loss)]
pub fn render_signal<P: AsRef<Path>>(samples: &[i16], out_path: P) -> Result<()> {
    let root = BitMapBackend::new(out_path.as_ref(), (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_error)?;

    let (y_min, y_max) = value_range(samples);
    let x_max = samples.len().max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(backend_error)?;

    chart
        .draw_series(LineSeries::new(
            samples
                .iter()
                .enumerate()
                .map(|(index, &sample)| (index as f64, f64::from(sample))),
            &BLUE,
        ))
        .map_err(backend_error)?;

    root.present().map_err(backend_error)?;
    Ok(())
}

/// Vertical plot range, padded so a flat or empty trace still spans a
/// non-degenerate interval.
fn value_range(samples: &[i16]) -> (f64, f64) {
    let min = samples.iter().copied().min();
    let max = samples.iter().copied().max();
    match (min, max) {
        (Some(min), Some(max)) if min != max => (f64::from(min), f64::from(max)),
        (Some(value), _) => (f64::from(value) - 1.0, f64::from(value) + 1.0),
        _ => (0.0, 1.0),
    }
}
