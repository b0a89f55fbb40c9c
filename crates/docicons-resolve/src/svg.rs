//! SVG synthesis and color mode detection.

use std::sync::LazyLock;

use docicons_sets::{Glyph, IconSet};
use regex::Regex;
use serde::Serialize;

/// XML namespace declared on every emitted `<svg>` element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Presentational width and height of every emitted icon.
///
/// Independent of the glyph's native size, which only drives the `viewBox`.
pub const DISPLAY_SIZE: u32 = 24;

/// Matches a quoted `fill` attribute and captures its value.
static FILL_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"fill="([^"]*)""#).unwrap());

/// How an icon takes its colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Inherits the surrounding text color via `fill="currentColor"`.
    Monochrome,
    /// Keeps the colors embedded in its body.
    Palette,
}

/// Whether an SVG body sets any fill other than `none` or `currentColor`.
///
/// A syntactic scan of `fill="..."` attributes, not a color parser: hex
/// codes, named colors, `var(...)` and `url(#...)` all count as explicit.
/// A CSS variable that happens to resolve to the text color is still
/// reported as explicit.
pub fn has_explicit_colors(body: &str) -> bool {
    FILL_ATTR_RE
        .captures_iter(body)
        .any(|caps| !matches!(&caps[1], "none" | "currentColor"))
}

/// Color mode of a glyph within its set.
///
/// A set-level palette flag always wins; otherwise the body decides.
pub fn color_mode(set: &IconSet, glyph: &Glyph) -> ColorMode {
    if set.is_palette() || has_explicit_colors(&glyph.body) {
        ColorMode::Palette
    } else {
        ColorMode::Monochrome
    }
}

/// Render a glyph as a complete `<svg>` element.
///
/// The element is always 24×24 with a `viewBox` of the glyph's effective
/// native size. Monochrome glyphs get `fill="currentColor"` on the root.
pub fn render_svg(set: &IconSet, glyph: &Glyph) -> String {
    format_svg(
        set.width_of(glyph),
        set.height_of(glyph),
        color_mode(set, glyph),
        &glyph.body,
    )
}

/// Emit the `<svg>` element for already resolved dimensions and color mode.
pub(crate) fn format_svg(width: f64, height: f64, mode: ColorMode, body: &str) -> String {
    let fill = match mode {
        ColorMode::Monochrome => r#" fill="currentColor""#,
        ColorMode::Palette => "",
    };
    format!(
        r#"<svg xmlns="{SVG_NAMESPACE}" width="{DISPLAY_SIZE}" height="{DISPLAY_SIZE}" viewBox="0 0 {width} {height}"{fill}>{body}</svg>"#
    )
}
