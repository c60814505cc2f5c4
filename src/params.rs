//! Validated value types for an optimization run.
//!
//! Both types are parsed once at the CLI boundary, before any file is
//! touched. The argv builders in [`tools`](crate::tools) forward them to the
//! external commands verbatim — validation lives here so a typo fails with a
//! usage error instead of a `convert` stderr dump halfway through a
//! directory.
//!
//! ## Types
//!
//! - [`Geometry`] — ImageMagick resize geometry (`640x480`, `800`, `x600`, `50%`, …).
//! - [`Quality`] — jpegoptim maximum quality (1–100, default 85). Clamped on construction.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("empty geometry")]
    Empty,
    #[error("invalid geometry '{0}': expected a form like 640x480, 800, x600, 50% or 640x480!")]
    Invalid(String),
    #[error("invalid geometry '{0}': dimensions must be positive integers")]
    Dimension(String),
}

/// Constraint suffix modifying how a dimensioned geometry is applied.
///
/// These are the single-character suffixes `convert -resize` understands,
/// e.g. `640x480>` shrinks oversized images but never enlarges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// `!` — use the dimensions exactly, ignoring the aspect ratio.
    Exact,
    /// `>` — resize only when the image is larger than the target.
    ShrinkOnly,
    /// `<` — resize only when the image is smaller than the target.
    EnlargeOnly,
    /// `^` — cover the target box (minimum dimensions).
    Cover,
}

impl Constraint {
    fn from_suffix(c: char) -> Option<Self> {
        match c {
            '!' => Some(Self::Exact),
            '>' => Some(Self::ShrinkOnly),
            '<' => Some(Self::EnlargeOnly),
            '^' => Some(Self::Cover),
            _ => None,
        }
    }

    fn suffix(self) -> char {
        match self {
            Self::Exact => '!',
            Self::ShrinkOnly => '>',
            Self::EnlargeOnly => '<',
            Self::Cover => '^',
        }
    }
}

/// The dimensioned part of a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extent {
    /// `WxH` — fit within the box, preserving aspect ratio.
    Box { width: u32, height: u32 },
    /// `W` — target width, height follows the aspect ratio.
    Width(u32),
    /// `xH` — target height, width follows the aspect ratio.
    Height(u32),
    /// `N%` — scale both axes by a percentage.
    Scale(u32),
    /// `NxM%` — scale width by `N` percent, height by `M` percent.
    ScaleXy(u32, u32),
}

/// A validated ImageMagick resize geometry.
///
/// Accepts the everyday resize forms:
/// `WxH`, bare `W`, `xH`, `N%`, `NxM%`, each of the non-percent forms
/// optionally followed by a [`Constraint`] suffix. Anything else — signs,
/// offsets, decimals — is rejected up front.
///
/// Parsing round-trips: `Display` reproduces the accepted input (modulo
/// trimmed whitespace and leading zeros), so the string handed to `convert`
/// is the string the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    extent: Extent,
    constraint: Option<Constraint>,
}

impl Geometry {
    /// The stock default, `640x480`.
    pub fn stock() -> Self {
        Self {
            extent: Extent::Box {
                width: 640,
                height: 480,
            },
            constraint: None,
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.extent {
            Extent::Box { width, height } => write!(f, "{width}x{height}")?,
            Extent::Width(w) => write!(f, "{w}")?,
            Extent::Height(h) => write!(f, "x{h}")?,
            Extent::Scale(p) => write!(f, "{p}%")?,
            Extent::ScaleXy(x, y) => write!(f, "{x}x{y}%")?,
        }
        if let Some(c) = self.constraint {
            write!(f, "{}", c.suffix())?;
        }
        Ok(())
    }
}

/// Parse one dimension or percentage: ASCII digits only, non-zero.
///
/// Stricter than `u32::from_str`, which would accept a leading `+`.
fn parse_dim(text: &str, whole: &str) -> Result<u32, GeometryError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GeometryError::Invalid(whole.to_string()));
    }
    match text.parse::<u32>() {
        Ok(0) | Err(_) => Err(GeometryError::Dimension(whole.to_string())),
        Ok(n) => Ok(n),
    }
}

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GeometryError::Empty);
        }

        // Percent forms carry no constraint suffix.
        if let Some(body) = trimmed.strip_suffix('%') {
            let extent = match body.split_once('x') {
                Some((x, y)) => Extent::ScaleXy(parse_dim(x, trimmed)?, parse_dim(y, trimmed)?),
                None => Extent::Scale(parse_dim(body, trimmed)?),
            };
            return Ok(Self {
                extent,
                constraint: None,
            });
        }

        let (body, constraint) = match trimmed.chars().last().and_then(Constraint::from_suffix) {
            Some(c) => (&trimmed[..trimmed.len() - 1], Some(c)),
            None => (trimmed, None),
        };
        if body.is_empty() {
            return Err(GeometryError::Invalid(trimmed.to_string()));
        }

        let extent = match body.split_once('x') {
            Some(("", h)) => Extent::Height(parse_dim(h, trimmed)?),
            Some((w, h)) => Extent::Box {
                width: parse_dim(w, trimmed)?,
                height: parse_dim(h, trimmed)?,
            },
            None => Extent::Width(parse_dim(body, trimmed)?),
        };
        Ok(Self { extent, constraint })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid compress ratio '{0}': expected a number between 1 and 100")]
pub struct QualityError(String);

/// jpegoptim quality ceiling (1-100).
///
/// `jpegoptim -m<N>` recompresses only images whose current quality exceeds
/// `N`, so this is a ceiling rather than a fixed target. Out-of-range values
/// are clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(85)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quality {
    type Err = QualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self::new)
            .map_err(|_| QualityError(s.to_string()))
    }
}
