//! Output filename derivation.
//!
//! Every optimized file is written next to its source under a derived name:
//!
//! - With a prefix: `<prefix>-<index>.jpg`, indexed from 1 in enumeration
//!   order (`trip-1.jpg`, `trip-2.jpg`, …). The prefix is used verbatim;
//!   the index carries no zero padding.
//! - Without a prefix: the source filename stem, case preserved, so camera
//!   files keep their identity (`DSC01.JPG` → `DSC01.jpg`).
//!
//! The output extension is always lowercase `.jpg` — that is what makes the
//! result land *alongside* an uppercase-extension original instead of
//! replacing it. A lowercase `.jpg` source without a prefix derives its own
//! name back; that rewrite-in-place case is flagged so the report can say so.

/// Derived output filename for one source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputName {
    /// File name to write next to the source.
    pub file_name: String,
    /// True when the derived name equals the source name, i.e. the
    /// optimized file replaces the original.
    pub in_place: bool,
}

/// Derive the output name for `source_name` (a bare file name, no path).
///
/// `index` is the file's 1-based position in the enumeration order and is
/// only used when a prefix is supplied.
///
/// - `derive_output_name("DSC01.JPG", None, 1)` → `DSC01.jpg`
/// - `derive_output_name("dawn.jpeg", None, 1)` → `dawn.jpg`
/// - `derive_output_name("dawn.jpg", None, 1)` → `dawn.jpg` (in place)
/// - `derive_output_name("DSC01.JPG", Some("trip"), 3)` → `trip-3.jpg`
pub fn derive_output_name(source_name: &str, prefix: Option<&str>, index: usize) -> OutputName {
    let base = match prefix {
        Some(p) => format!("{p}-{index}"),
        None => stem(source_name).to_string(),
    };
    let file_name = format!("{base}.jpg");
    OutputName {
        in_place: file_name == source_name,
        file_name,
    }
}

/// Filename without its final extension. A name with no dot (or only a
/// leading one) is returned whole.
fn stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((s, _)) if !s.is_empty() => s,
        _ => name,
    }
}
