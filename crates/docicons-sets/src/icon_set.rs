//! Icon set bundle data model.
//!
//! Mirrors the Iconify JSON layout:
//!
//! ```json
//! {
//!   "prefix": "lucide",
//!   "info": { "name": "Lucide", "palette": false },
//!   "width": 24,
//!   "height": 24,
//!   "icons": {
//!     "house": { "body": "<path d=\"...\"/>" },
//!     "wide": { "body": "<path d=\"...\"/>", "width": 32 }
//!   }
//! }
//! ```
//!
//! Fields not listed here (aliases, categories, license metadata) are ignored.
//! Glyph records are kept as raw JSON and decoded on lookup, so one malformed
//! record only breaks its own icon.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fallback dimension when neither the glyph nor the bundle declares one.
pub const DEFAULT_SIZE: f64 = 24.0;

/// One vendor's icon collection.
///
/// Read-only lookup data: nothing in docicons mutates a set after loading.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IconSet {
    /// Prefix declared inside the bundle. Informational only; the registry key wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Set-level metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<IconSetInfo>,
    /// Default glyph width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Default glyph height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Raw glyph records keyed by icon name.
    #[serde(default)]
    pub icons: HashMap<String, Value>,
}

/// Set-level metadata block (`info` in Iconify JSON).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSetInfo {
    /// Display name of the set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// True when every glyph carries its own colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<bool>,
}

/// One icon's vector definition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Raw SVG content placed inside the `<svg>` element.
    pub body: String,
    /// Width override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl IconSet {
    /// Create an empty icon set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an icon set from an Iconify JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Add a glyph.
    #[must_use]
    pub fn with_icon(mut self, name: impl Into<String>, glyph: Glyph) -> Self {
        self.icons.insert(name.into(), glyph.into_value());
        self
    }

    /// Set the default glyph dimensions.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the palette flag.
    #[must_use]
    pub fn with_palette(mut self, palette: bool) -> Self {
        self.info.get_or_insert_with(IconSetInfo::default).palette = Some(palette);
        self
    }

    /// Look up and decode a glyph by name.
    ///
    /// Returns `None` when the set has no such icon, and `Some(Err(_))` when
    /// the record exists but is not a valid glyph.
    pub fn glyph(&self, name: &str) -> Option<Result<Glyph, serde_json::Error>> {
        self.icons.get(name).map(Glyph::deserialize)
    }

    /// Whether the set declares all of its glyphs multi-color.
    ///
    /// Only an explicit `true` counts; a missing flag is monochrome.
    pub fn is_palette(&self) -> bool {
        self.info.as_ref().and_then(|info| info.palette) == Some(true)
    }

    /// Effective width of a glyph: glyph, then set default, then [`DEFAULT_SIZE`].
    pub fn width_of(&self, glyph: &Glyph) -> f64 {
        glyph.width.or(self.width).unwrap_or(DEFAULT_SIZE)
    }

    /// Effective height of a glyph: glyph, then set default, then [`DEFAULT_SIZE`].
    pub fn height_of(&self, glyph: &Glyph) -> f64 {
        glyph.height.or(self.height).unwrap_or(DEFAULT_SIZE)
    }
}

impl Glyph {
    /// Create a glyph with the given SVG body and no dimension overrides.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            width: None,
            height: None,
        }
    }

    /// Override the width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Override the height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    fn into_value(self) -> Value {
        let mut record = Map::new();
        record.insert("body".to_owned(), Value::String(self.body));
        if let Some(width) = self.width {
            record.insert("width".to_owned(), Value::from(width));
        }
        if let Some(height) = self.height {
            record.insert("height".to_owned(), Value::from(height));
        }
        Value::Object(record)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_iconify_document() {
        let json = r#"{
            "prefix": "demo",
            "info": { "name": "Demo Icons", "palette": true, "author": { "name": "x" } },
            "width": 32,
            "height": 16,
            "icons": {
                "a": { "body": "<path d=\"M0 0\"/>" },
                "b": { "body": "<circle r=\"1\"/>", "width": 20.5, "hidden": true }
            },
            "aliases": { "c": { "parent": "a" } }
        }"#;

        let set = IconSet::from_json(json).unwrap();

        assert_eq!(set.prefix.as_deref(), Some("demo"));
        assert!(set.is_palette());
        assert_eq!(set.width, Some(32.0));
        assert_eq!(set.height, Some(16.0));
        assert_eq!(set.icons.len(), 2);
        assert_eq!(set.glyph("a").unwrap().unwrap().body, "<path d=\"M0 0\"/>");
        assert_eq!(set.glyph("b").unwrap().unwrap().width, Some(20.5));
        assert!(set.glyph("c").is_none());
    }

    #[test]
    fn test_parse_minimal_document() {
        let set = IconSet::from_json("{}").unwrap();
        assert!(set.icons.is_empty());
        assert!(!set.is_palette());
    }

    #[test]
    fn test_malformed_glyph_fails_only_its_own_lookup() {
        let set = IconSet::from_json(
            r#"{ "icons": { "good": { "body": "<g/>" }, "bad": { "width": 10 } } }"#,
        )
        .unwrap();

        assert_eq!(set.glyph("good").unwrap().unwrap(), Glyph::new("<g/>"));
        let err = set.glyph("bad").unwrap().unwrap_err();
        assert!(err.to_string().contains("body"), "got {err}");
    }

    #[test]
    fn test_parse_rejects_non_object_icons() {
        assert!(IconSet::from_json(r#"{ "icons": [] }"#).is_err());
    }

    #[test]
    fn test_with_icon_round_trips_through_lookup() {
        let glyph = Glyph::new("<g/>").with_width(20.5).with_height(16.0);
        let set = IconSet::new().with_icon("a", glyph.clone());

        assert_eq!(set.glyph("a").unwrap().unwrap(), glyph);
    }

    #[test]
    fn test_palette_flag_false_is_not_palette() {
        let set = IconSet::new().with_palette(false);
        assert!(!set.is_palette());
    }

    #[test]
    fn test_dimension_fallback_chain() {
        let set = IconSet::new().with_size(32.0, 40.0);
        let plain = Glyph::new("");
        let wide = Glyph::new("").with_width(48.0);

        assert_eq!(set.width_of(&plain), 32.0);
        assert_eq!(set.height_of(&plain), 40.0);
        assert_eq!(set.width_of(&wide), 48.0);
        assert_eq!(set.height_of(&wide), 40.0);
    }

    #[test]
    fn test_dimension_default_without_set_sizes() {
        let set = IconSet::new();
        let tall = Glyph::new("").with_height(30.0);

        assert_eq!(set.width_of(&tall), DEFAULT_SIZE);
        assert_eq!(set.height_of(&tall), 30.0);
    }

    #[test]
    fn test_bundle_width_only() {
        let mut set = IconSet::new();
        set.width = Some(16.0);
        let glyph = Glyph::new("");

        assert_eq!(set.width_of(&glyph), 16.0);
        assert_eq!(set.height_of(&glyph), DEFAULT_SIZE);
    }
}
