//! Menu tree data model.

use serde::{Deserialize, Serialize};

/// Top-level menu entry.
///
/// Either a plain link (`href`) or a panel (`content`); both are optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display label.
    pub label: String,
    /// Link target for plain entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Panel opened by the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<MenuContent>,
}

/// Panel shown for a top-level entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuContent {
    /// Layout name understood by the site theme (e.g. `grid`, `list`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Column count for grid layouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    /// Link groups.
    #[serde(default)]
    pub categories: Vec<MenuCategory>,
    /// Call-to-action shown below the categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<MenuFooter>,
}

/// Titled group of links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    /// Group heading.
    pub title: String,
    /// Links in display order.
    #[serde(default)]
    pub items: Vec<MenuLink>,
}

/// Link inside a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    /// Display label.
    pub label: String,
    /// One-line description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Link target.
    pub href: String,
    /// Icon: a `prefix:name` identifier before resolution, inline SVG after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Footer link of a panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFooter {
    /// Display label.
    pub label: String,
    /// Link target.
    pub href: String,
    /// One-line description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MenuItem {
    /// Iterate all links in this entry's panel.
    pub fn links(&self) -> impl Iterator<Item = &MenuLink> {
        self.content
            .iter()
            .flat_map(|content| &content.categories)
            .flat_map(|category| &category.items)
    }
}
