//! Identifier-to-markup resolution.

use docicons_sets::IconSetRegistry;
use serde::Serialize;

use crate::error::ResolveError;
use crate::id::IconId;
use crate::svg::{ColorMode, color_mode, format_svg};

/// Resolves `prefix:name` identifiers against a registry of icon sets.
///
/// Holds no state besides the registry; every call reloads the bundle.
#[derive(Debug)]
pub struct IconResolver {
    registry: IconSetRegistry,
}

/// Full resolution result, for diagnostics output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedIcon {
    /// Bundle prefix.
    pub prefix: String,
    /// Icon name.
    pub name: String,
    /// Effective `viewBox` width.
    pub width: f64,
    /// Effective `viewBox` height.
    pub height: f64,
    /// Chosen color mode.
    pub color_mode: ColorMode,
    /// Rendered markup.
    pub svg: String,
}

impl IconResolver {
    /// Create a resolver over the given registry.
    #[must_use]
    pub fn new(registry: IconSetRegistry) -> Self {
        Self { registry }
    }

    /// Registry the resolver reads from.
    #[must_use]
    pub fn registry(&self) -> &IconSetRegistry {
        &self.registry
    }

    /// Resolve an identifier to an inline `<svg>` element.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::MalformedIdentifier`] when the identifier has no colon
    /// - [`ResolveError::Load`] when the prefix is unknown or its bundle fails to load
    /// - [`ResolveError::IconNotFound`] when the bundle has no such icon
    /// - [`ResolveError::MalformedGlyph`] when the icon's record is not a valid glyph
    pub fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        self.describe(identifier).map(|icon| icon.svg)
    }

    /// Resolve an identifier and report how it was resolved.
    ///
    /// # Errors
    ///
    /// Same as [`IconResolver::resolve`].
    pub fn describe(&self, identifier: &str) -> Result<ResolvedIcon, ResolveError> {
        let id = IconId::parse(identifier)?;
        let set = self.registry.load(id.prefix)?;
        let glyph = set
            .glyph(id.name)
            .ok_or_else(|| ResolveError::IconNotFound {
                name: id.name.to_owned(),
                prefix: id.prefix.to_owned(),
            })?
            .map_err(|source| ResolveError::MalformedGlyph {
                name: id.name.to_owned(),
                prefix: id.prefix.to_owned(),
                source,
            })?;

        let width = set.width_of(&glyph);
        let height = set.height_of(&glyph);
        let mode = color_mode(&set, &glyph);
        let icon = ResolvedIcon {
            prefix: id.prefix.to_owned(),
            name: id.name.to_owned(),
            width,
            height,
            color_mode: mode,
            svg: format_svg(width, height, mode, &glyph.body),
        };
        tracing::debug!(
            icon = %id,
            width = icon.width,
            height = icon.height,
            color_mode = ?icon.color_mode,
            "Resolved icon"
        );
        Ok(icon)
    }

    /// Resolve identifiers in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn resolve_all<I, S>(&self, identifiers: I) -> Result<Vec<String>, ResolveError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        identifiers
            .into_iter()
            .map(|id| self.resolve(id.as_ref()))
            .collect()
    }
}
