//! ImageMagick `convert` invocation.

use super::command::ToolCommand;
use crate::params::Geometry;
use std::path::Path;

/// Program name of the ImageMagick 6 entry point.
pub const CONVERT: &str = "convert";

/// `convert <src> -resize <geometry> <dst>`
///
/// Writes a resized copy of `source` to `output`. `-resize` preserves the
/// aspect ratio unless the geometry says otherwise, and ImageMagick reads
/// the source fully before writing, so `output == source` is a legal
/// rewrite in place.
pub fn resize_command(source: &Path, geometry: &Geometry, output: &Path) -> ToolCommand {
    ToolCommand::new(CONVERT)
        .arg(source)
        .arg("-resize")
        .arg(geometry.to_string())
        .arg(output)
}
