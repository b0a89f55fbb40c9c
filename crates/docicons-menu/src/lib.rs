//! Mega-menu definitions for docicons.
//!
//! A menu is a list of top-level [`MenuItem`]s, each optionally opening a
//! panel of link categories. Links reference icons by `prefix:name`
//! identifier; [`resolve_menu`] replaces every identifier with inline SVG so
//! the site builder can embed the result as-is.
//!
//! The tree's semantics (layouts, column counts, link targets) are not
//! validated here.

mod error;
mod loader;
mod menu;
mod resolve;

pub use error::MenuError;
pub use loader::{load_menu, parse_menu_json, parse_menu_yaml};
pub use menu::{MenuCategory, MenuContent, MenuFooter, MenuItem, MenuLink};
pub use resolve::{icon_ids, resolve_menu};
