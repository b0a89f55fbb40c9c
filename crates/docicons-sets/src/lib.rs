//! Icon set loading for docicons.
//!
//! An icon set (bundle) is one vendor's collection of glyphs in the Iconify
//! JSON format. This crate provides:
//!
//! - [`IconSet`] and [`Glyph`]: the bundle data model
//! - [`IconSetSource`]: a loader capability for a single bundle
//!   ([`FsIconSetSource`] reads JSON files, [`StaticIconSetSource`] serves
//!   an in-memory set)
//! - [`IconSetRegistry`]: the closed mapping from prefix token to source
//! - [`Preset`]: the built-in prefix layouts for npm-installed icon packages
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use docicons_sets::Preset;
//!
//! let registry = Preset::Iconify.registry(Path::new("node_modules"));
//! let lucide = registry.load("lucide")?;
//! assert!(lucide.glyph("house").is_some());
//! # Ok(())
//! # }
//! ```

mod error;
mod icon_set;
mod preset;
mod registry;
mod source;

pub use error::LoadError;
pub use icon_set::{DEFAULT_SIZE, Glyph, IconSet, IconSetInfo};
pub use preset::{Preset, SUPPORTED_PREFIXES};
pub use registry::IconSetRegistry;
pub use source::{FsIconSetSource, IconSetSource, StaticIconSetSource};
