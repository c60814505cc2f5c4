//! PATH preflight for the external tools.
//!
//! Both binaries are looked up before any file is touched — a missing tool
//! should be one clear startup error, not a spawn failure halfway through a
//! directory of photos.

use super::convert::CONVERT;
use super::jpegoptim::JPEGOPTIM;
use super::runner::ToolError;

/// Verify `convert` and `jpegoptim` are installed and on `PATH`.
pub fn ensure_available() -> Result<(), ToolError> {
    for tool in [CONVERT, JPEGOPTIM] {
        which::which(tool).map_err(|_| ToolError::NotFound(tool))?;
    }
    Ok(())
}
