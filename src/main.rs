use clap::Parser;
use optjpg::optimize::{RunConfig, RunStats, optimize};
use optjpg::params::{Geometry, Quality};
use optjpg::tools::{SystemRunner, ensure_available};
use optjpg::{output, scan};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "optjpg")]
#[command(about = "Batch-resize and recompress JPEG photos for the web")]
#[command(long_about = "\
Batch-resize and recompress JPEG photos for the web

Every .jpg/.jpeg file directly inside PATH (extensions matched
case-insensitively, hidden files skipped) is run through a two-step
pipeline:

  1. convert <src> -resize <size> <dst>     (ImageMagick)
  2. jpegoptim -m<compress-ratio> <dst>

Outputs land next to the originals. With a NAME_PREFIX they are named
<prefix>-1.jpg, <prefix>-2.jpg, ... in filename order; without one, each
keeps its filename stem with a lowercase .jpg extension:

  optjpg ./pics                    DSC01.JPG → DSC01.jpg, 640x480, q85
  optjpg ./pics 1200x900 70        DSC01.JPG → DSC01.jpg, 1200x900, q70
  optjpg ./pics 800 85 trip        DSC01.JPG → trip-1.jpg, 800px wide

SIZE takes any ImageMagick resize geometry: 640x480, 800, x600, 50%,
or a constrained form like 1200x900> (shrink only, never enlarge).
COMPRESS_RATIO is jpegoptim's quality ceiling: files already at or below
it pass through untouched.

Requires ImageMagick (convert) and jpegoptim on PATH. A file that fails
either step is reported and skipped; the run continues and exits
non-zero at the end if anything failed.")]
#[command(version = version_string())]
struct Cli {
    /// Directory containing the source photos
    path: PathBuf,

    /// ImageMagick resize geometry
    #[arg(default_value = "640x480")]
    size: Geometry,

    /// jpegoptim maximum quality, 1-100
    #[arg(default_value = "85")]
    compress_ratio: Quality,

    /// Output name prefix; outputs become <prefix>-1.jpg, <prefix>-2.jpg, ...
    name_prefix: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    ensure_available()?;
    let sources = scan::scan(&cli.path)?;

    if sources.is_empty() {
        output::print_no_matches(&cli.path);
        return Ok(());
    }

    let config = RunConfig {
        geometry: cli.size,
        quality: cli.compress_ratio,
        prefix: cli.name_prefix,
    };
    output::print_run_header(&cli.path, &config);

    let runner = SystemRunner::new();
    let reports = optimize(&runner, &sources, &config);
    for report in &reports {
        output::print_file_report(report);
    }

    let stats = RunStats::from_reports(&reports);
    output::print_summary(&stats);

    if stats.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
