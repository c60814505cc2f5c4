//! Source photo enumeration.
//!
//! Finds the JPEG files to optimize. Matching is deliberately narrow:
//!
//! - Only regular files **directly** inside the target directory — no
//!   recursion. A photo dump is flat; subdirectories are somebody else's
//!   business.
//! - Only `jpg`/`jpeg` extensions, compared case-insensitively. Cameras
//!   write `DSC01234.JPG`; people write `dawn.jpeg`.
//! - Hidden files (leading `.`) are skipped.
//!
//! The listing is sorted by file name in byte order — the order a shell
//! glob would enumerate — and returned as a complete snapshot before any
//! processing starts. Files the optimizer itself writes during a run can
//! therefore never join that run's inputs.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("directory not found: {0}")]
    Missing(PathBuf),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// One enumerated source photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Bare file name within the scanned directory.
    pub file_name: String,
    /// Full path to the source file.
    pub path: PathBuf,
}

const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Enumerate the JPEG files directly inside `dir`, sorted by file name.
///
/// An empty result is not an error — the caller decides what to say about
/// a directory with nothing to do.
pub fn scan(dir: &Path) -> Result<Vec<SourceImage>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::Missing(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_jpeg(p))
        .collect();

    entries.sort();

    Ok(entries
        .into_iter()
        .map(|path| SourceImage {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            path,
        })
        .collect())
}

fn is_jpeg(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    if name.starts_with('.') {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    JPEG_EXTENSIONS.contains(&ext.as_str())
}
