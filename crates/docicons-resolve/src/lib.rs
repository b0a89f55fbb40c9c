//! Icon resolution for docicons.
//!
//! Turns a `prefix:name` identifier into one self-contained `<svg>` element:
//!
//! 1. Split the identifier on its first colon ([`IconId`])
//! 2. Load the bundle registered for the prefix ([`docicons_sets::IconSetRegistry`])
//! 3. Look up the glyph and resolve its `viewBox` dimensions
//! 4. Decide between monochrome and palette rendering ([`ColorMode`])
//! 5. Emit the markup ([`render_svg`])
//!
//! Resolution is synchronous and uncached: every call reloads the bundle.
//!
//! # Example
//!
//! ```
//! use docicons_resolve::IconResolver;
//! use docicons_sets::{Glyph, IconSet, IconSetRegistry, StaticIconSetSource};
//!
//! let set = IconSet::new().with_icon("dot", Glyph::new("<circle r=\"4\"/>"));
//! let registry = IconSetRegistry::new().with_source("demo", StaticIconSetSource::new(set));
//! let resolver = IconResolver::new(registry);
//!
//! let svg = resolver.resolve("demo:dot").unwrap();
//! assert!(svg.contains(r#"viewBox="0 0 24 24""#));
//! assert!(svg.contains(r#"fill="currentColor""#));
//! ```

mod error;
mod id;
mod resolver;
mod svg;

pub use error::ResolveError;
pub use id::IconId;
pub use resolver::{IconResolver, ResolvedIcon};
pub use svg::{ColorMode, DISPLAY_SIZE, SVG_NAMESPACE, color_mode, has_explicit_colors, render_svg};
