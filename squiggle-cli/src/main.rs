//!
//! This binary renders raw nanopore signal plots from FAST5 files.
#![allow(clippy::uninlined_format_args)]

mod batch;
mod process;
#[cfg(test)]
mod test_fixtures;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use thiserror::Error;

use process::FileOutcome;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("filename error: {0}")]
    Core(#[from] squiggle_core::Error),

    #[error("FAST5 error: {0}")]
    Fast5(#[from] squiggle_io::Error),

    #[error("render error: {0}")]
    Render(#[from] squiggle_render::Error),

    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Raw nanopore signal plotter for FAST5 files.
#[derive(Parser)]
#[command(name = "squiggle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// FAST5 file or directory of FAST5 files
    input: PathBuf,

    /// Worker threads for directory processing
    #[arg(short, long, default_value_t = batch::DEFAULT_JOBS)]
    jobs: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Plots land in the invoking directory, named by read id.
    let out_dir = std::env::current_dir()?;

    if cli.input.is_dir() {
        run_directory(&cli, &out_dir)
    } else {
        run_single(&cli, &out_dir)
    }
}

fn run_single(cli: &Cli, out_dir: &Path) -> Result<()> {
    match process::process_file(&cli.input, out_dir) {
        FileOutcome::Rendered { read_id, output } => {
            if cli.verbose {
                eprintln!(
                    "{}: read {} -> {}",
                    cli.input.display(),
                    read_id,
                    output.display()
                );
            }
            Ok(())
        }
        FileOutcome::MissingSignal { .. } => Ok(()),
        FileOutcome::Failed(err) => Err(err),
    }
}

fn run_directory(cli: &Cli, out_dir: &Path) -> Result<()> {
    let files = batch::collect_fast5_files(&cli.input)?;
    if cli.verbose {
        eprintln!(
            "Processing {} file(s) with {} workers...",
            files.len(),
            cli.jobs
        );
    }

    let start = Instant::now();
    let outcomes = batch::run_batch(&files, out_dir, cli.jobs)?;

    for (path, outcome) in &outcomes {
        match outcome {
            FileOutcome::Failed(err) => eprintln!("{}: {}", path.display(), err),
            FileOutcome::Rendered { output, .. } if cli.verbose => {
                eprintln!("{}: wrote {}", path.display(), output.display());
            }
            _ => {}
        }
    }

    let summary = batch::summarize(&outcomes);
    for (read_id, count) in &summary.collisions {
        eprintln!("output collision: {read_id}.raw.png written by {count} inputs");
    }

    let elapsed = start.elapsed();
    println!(
        "Rendered {} of {} files in {:.2}s ({} missing signal, {} failed)",
        summary.rendered,
        outcomes.len(),
        elapsed.as_secs_f64(),
        summary.missing_signal,
        summary.failed
    );
    Ok(())
}
