//! The per-file optimization pipeline.
//!
//! Takes the snapshot from [`scan`](crate::scan) and runs each photo through
//! the two-step pipeline, strictly in order and one file at a time:
//!
//! ```text
//! 1. Resize      convert <src> -resize <geometry> <dst>
//! 2. Recompress  jpegoptim -m<quality> <dst>
//! ```
//!
//! ## Failure policy
//!
//! A file that fails either step is reported and the run moves on to the
//! next file. A half-optimized directory where the survivors are done is
//! more useful than a run that stops at the first camera file `convert`
//! cannot read. The recompress step never runs after a failed resize —
//! there is no output to recompress.
//!
//! ## Dependencies
//!
//! Requires ImageMagick (`convert`) and `jpegoptim` to be installed. All
//! tool access goes through the [`ToolRunner`] seam, so the whole module
//! tests against the recording mock without either installed.

use crate::naming::derive_output_name;
use crate::params::{Geometry, Quality};
use crate::scan::SourceImage;
use crate::tools::{ToolError, ToolRunner, recompress_command, resize_command};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// Parameters of one optimization run, parsed and validated at the CLI
/// boundary.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub geometry: Geometry,
    pub quality: Quality,
    /// Output naming prefix; `None` falls back to the source filename stem.
    pub prefix: Option<String>,
}

/// Byte sizes of a successfully optimized file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Savings {
    /// Source size, measured before the resize step (an in-place rewrite
    /// destroys the original).
    pub bytes_in: u64,
    /// Size of the final output, after recompression.
    pub bytes_out: u64,
}

impl Savings {
    /// Percentage saved relative to the source, rounded down. Zero when the
    /// output grew (a tiny source upscaled by a fixed geometry can).
    pub fn percent_saved(&self) -> u64 {
        if self.bytes_in == 0 || self.bytes_out >= self.bytes_in {
            return 0;
        }
        (self.bytes_in - self.bytes_out) * 100 / self.bytes_in
    }
}

/// What happened to one enumerated source file.
#[derive(Debug)]
pub struct FileReport {
    /// 1-based position in enumeration order. Drives prefix naming, so it
    /// advances even past failed files.
    pub index: usize,
    pub source_name: String,
    pub output_name: String,
    /// The derived name equals the source name — the original was
    /// rewritten in place.
    pub in_place: bool,
    pub outcome: Result<Savings, OptimizeError>,
}

/// Aggregate counters over a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub optimized: usize,
    pub failed: usize,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl RunStats {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut stats = Self::default();
        for report in reports {
            match &report.outcome {
                Ok(savings) => {
                    stats.optimized += 1;
                    stats.bytes_in += savings.bytes_in;
                    stats.bytes_out += savings.bytes_out;
                }
                Err(_) => stats.failed += 1,
            }
        }
        stats
    }

    pub fn percent_saved(&self) -> u64 {
        Savings {
            bytes_in: self.bytes_in,
            bytes_out: self.bytes_out,
        }
        .percent_saved()
    }
}

/// Run the pipeline over an enumeration snapshot, in order.
///
/// Outputs land next to their sources. Per-file failures are carried in the
/// returned reports, never returned as a top-level error — the caller
/// inspects [`RunStats::failed`] for the exit code.
pub fn optimize(
    runner: &impl ToolRunner,
    sources: &[SourceImage],
    config: &RunConfig,
) -> Vec<FileReport> {
    sources
        .iter()
        .enumerate()
        .map(|(i, source)| optimize_one(runner, source, i + 1, config))
        .collect()
}

fn optimize_one(
    runner: &impl ToolRunner,
    source: &SourceImage,
    index: usize,
    config: &RunConfig,
) -> FileReport {
    let name = derive_output_name(&source.file_name, config.prefix.as_deref(), index);
    let output_path = source
        .path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&name.file_name);

    let outcome = run_steps(runner, &source.path, &output_path, config);

    FileReport {
        index,
        source_name: source.file_name.clone(),
        output_name: name.file_name,
        in_place: name.in_place,
        outcome,
    }
}

fn run_steps(
    runner: &impl ToolRunner,
    source: &Path,
    output: &Path,
    config: &RunConfig,
) -> Result<Savings, OptimizeError> {
    let bytes_in = fs::metadata(source)?.len();

    runner.run(&resize_command(source, &config.geometry, output))?;
    runner.run(&recompress_command(config.quality, output))?;

    let bytes_out = fs::metadata(output)?.len();
    Ok(Savings {
        bytes_in,
        bytes_out,
    })
}
