//! # optjpg
//!
//! Batch-prepares a directory of photos for web publishing. Every JPEG in
//! the target directory is resized to a target geometry and recompressed
//! under a quality ceiling; the web-ready copies land next to the
//! originals.
//!
//! # Architecture: Two-Step Pipeline
//!
//! Each photo passes through two external tools, strictly in order:
//!
//! ```text
//! 1. Resize      convert <src> -resize <geometry> <dst>    (ImageMagick)
//! 2. Recompress  jpegoptim -m<quality> <dst>
//! ```
//!
//! The enumeration is snapshotted and sorted before anything runs, files
//! are processed one at a time, and a failure in one file never stops the
//! rest of the directory.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Enumerates the JPEG files in the target directory, sorted, flat |
//! | [`naming`] | Derives each output filename: `<prefix>-<n>.jpg` or `<stem>.jpg` |
//! | [`params`] | Validated run parameters — resize [`Geometry`](params::Geometry), jpegoptim [`Quality`](params::Quality) |
//! | [`tools`] | The external-tool layer: prepared commands, argv builders, runner seam, PATH preflight |
//! | [`optimize`] | The per-file pipeline — ordering, failure policy, byte accounting |
//! | [`output`] | Report formatting — run header, per-file lines, summary |
//!
//! # Design Decisions
//!
//! ## External Tools, Not In-Process Imaging
//!
//! All pixel work is delegated to ImageMagick's `convert` and to
//! `jpegoptim`. Both are mature, ubiquitous, and better at their jobs than
//! any reimplementation would be; this crate's value is the orchestration
//! around them — enumeration, naming, validation, reporting, and a real
//! exit code. The crate never decodes a single image byte itself.
//!
//! ## The Runner Seam
//!
//! The only thing standing between the pipeline and the host system is the
//! [`tools::ToolRunner`] trait. Production uses [`tools::SystemRunner`]
//! (spawns the real processes, captures their output); tests swap in a
//! recording mock. Since argv construction is pure and separate from
//! execution, the exact command lines a run would issue are assertable
//! without ImageMagick installed.
//!
//! ## Sequential On Purpose
//!
//! One file at a time, resize then recompress. `convert` and `jpegoptim`
//! are the bottleneck and both saturate a core on a large photo; the
//! orchestration cost around them is noise. Sequential execution also keeps
//! the report in enumeration order and failure handling trivial.
//!
//! ## Quality Is a Ceiling
//!
//! `jpegoptim -m<N>` only recompresses images whose current quality
//! exceeds `N`, so rerunning over a mixed directory of fresh camera files
//! and already-optimized photos does the right thing without bookkeeping.

pub mod naming;
pub mod optimize;
pub mod output;
pub mod params;
pub mod scan;
pub mod tools;
