//! External tool integration — the only layer that touches `convert` and
//! `jpegoptim`.
//!
//! | Step | Tool | Invocation |
//! |---|---|---|
//! | **Resize** | ImageMagick `convert` | `convert <src> -resize <geometry> <dst>` |
//! | **Recompress** | `jpegoptim` | `jpegoptim -m<quality> <dst>` |
//!
//! The module is split into:
//! - **Command**: [`ToolCommand`], a prepared program + argv value
//! - **Builders**: pure functions producing the two invocations above
//! - **Runner**: [`ToolRunner`] trait + production [`SystemRunner`]
//! - **Locate**: PATH preflight for both tools

pub mod command;
pub mod convert;
pub mod jpegoptim;
pub mod locate;
pub mod runner;

pub use command::ToolCommand;
pub use convert::{CONVERT, resize_command};
pub use jpegoptim::{JPEGOPTIM, recompress_command};
pub use locate::ensure_available;
pub use runner::{SystemRunner, ToolError, ToolRunner};
