//! jpegoptim invocation.

use super::command::ToolCommand;
use crate::params::Quality;
use std::path::Path;

/// Program name of the JPEG recompressor.
pub const JPEGOPTIM: &str = "jpegoptim";

/// `jpegoptim -m<quality> <target>`
///
/// Recompresses `target` in place. `-m` is a ceiling: files already at or
/// below the given quality pass through untouched, which is exactly the
/// behavior wanted for a mixed directory of fresh camera files and
/// already-optimized photos.
pub fn recompress_command(quality: Quality, target: &Path) -> ToolCommand {
    ToolCommand::new(JPEGOPTIM)
        .arg(format!("-m{quality}"))
        .arg(target)
}
