//! CLI output formatting for an optimization run.
//!
//! # Output Format
//!
//! ```text
//! Optimizing photos in ./pics
//!     Geometry: 640x480
//!     Quality:  85
//!     Prefix:   trip
//!
//! 001 DSC01.JPG → trip-1.jpg (2.4 MB → 187.2 KB, saved 92%)
//! 002 DSC02.JPG → trip-2.jpg (1.9 MB → 164.0 KB, saved 91%)
//! 003 broken.JPG → trip-3.jpg FAILED: convert ...: exited with code 1: ...
//! 004 dawn.jpg → dawn.jpg [in place] (840.1 KB → 120.8 KB, saved 85%)
//!
//! Optimized 3 of 4 photos (1 failed)
//! Total: 5.1 MB → 472.0 KB (saved 90%)
//! ```
//!
//! The per-file line is the whole story of that file: index, source →
//! output, and either the byte savings or the failure reason. jpegoptim's
//! own savings chatter is captured and discarded by the runner; sizes here
//! come from `fs::metadata`, so the numbers cover both steps combined.
//!
//! # Architecture
//!
//! Each report section has a `format_*` function (returns `Vec<String>` or
//! `String`) for testability and a `print_*` wrapper that writes to stdout.
//! Format functions are pure — no I/O, no side effects.

use crate::optimize::{FileReport, RunConfig, RunStats};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Render a byte count human-readably: `b`, `KB`, `MB`, `GB` with one
/// decimal above bytes.
pub fn human_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64;
    if b >= GB {
        format!("{:.1} GB", b / GB)
    } else if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} b")
    }
}

/// Header naming the directory and the run parameters.
pub fn format_run_header(dir: &Path, config: &RunConfig) -> Vec<String> {
    let mut lines = vec![
        format!("Optimizing photos in {}", dir.display()),
        format!("    Geometry: {}", config.geometry),
        format!("    Quality:  {}", config.quality),
    ];
    if let Some(prefix) = &config.prefix {
        lines.push(format!("    Prefix:   {prefix}"));
    }
    lines
}

/// One line per file: what it became, or why it didn't.
pub fn format_file_report(report: &FileReport) -> String {
    let head = format!(
        "{} {} → {}",
        format_index(report.index),
        report.source_name,
        report.output_name
    );
    match &report.outcome {
        Ok(savings) => {
            let marker = if report.in_place { " [in place]" } else { "" };
            format!(
                "{head}{marker} ({} → {}, saved {}%)",
                human_bytes(savings.bytes_in),
                human_bytes(savings.bytes_out),
                savings.percent_saved()
            )
        }
        Err(error) => format!("{head} FAILED: {error}"),
    }
}

/// Closing summary over the whole run.
pub fn format_summary(stats: &RunStats) -> Vec<String> {
    let total = stats.optimized + stats.failed;
    let mut lines = Vec::new();

    let counts = if stats.failed == 0 {
        format!("Optimized {} of {} photos", stats.optimized, total)
    } else {
        format!(
            "Optimized {} of {} photos ({} failed)",
            stats.optimized, total, stats.failed
        )
    };
    lines.push(counts);

    if stats.optimized > 0 {
        lines.push(format!(
            "Total: {} → {} (saved {}%)",
            human_bytes(stats.bytes_in),
            human_bytes(stats.bytes_out),
            stats.percent_saved()
        ));
    }
    lines
}

/// Notice for a directory with nothing to do.
pub fn format_no_matches(dir: &Path) -> String {
    format!("No matching JPEG files in {}", dir.display())
}

pub fn print_run_header(dir: &Path, config: &RunConfig) {
    for line in format_run_header(dir, config) {
        println!("{}", line);
    }
    println!();
}

pub fn print_file_report(report: &FileReport) {
    println!("{}", format_file_report(report));
}

pub fn print_summary(stats: &RunStats) {
    println!();
    for line in format_summary(stats) {
        println!("{}", line);
    }
}

pub fn print_no_matches(dir: &Path) {
    println!("{}", format_no_matches(dir));
}
