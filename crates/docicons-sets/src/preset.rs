//! Built-in prefix layouts for npm-installed icon packages.
//!
//! Both presets cover the same prefixes and only differ in which package
//! provides each bundle.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::registry::IconSetRegistry;
use crate::source::FsIconSetSource;

/// Prefixes covered by every preset, in registration order.
pub const SUPPORTED_PREFIXES: [&str; 8] = [
    "lucide",
    "carbon",
    "mdi",
    "phosphor",
    "tabler",
    "f5-brand",
    "f5xc",
    "hashicorp-flight",
];

/// Bundle filename inside each icon package.
const BUNDLE_FILENAME: &str = "icons.json";

/// Package layout used to locate bundle files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Upstream `@iconify-json/*` packages plus vendor brand packages.
    #[default]
    Iconify,
    /// Mirrored `@f5xc-salesdemos/icons-*` packages, one per prefix.
    Mirror,
}

impl Preset {
    /// Preset name as written in configuration.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Iconify => "iconify",
            Self::Mirror => "mirror",
        }
    }

    /// npm package providing `prefix`, or `None` for unsupported prefixes.
    #[must_use]
    pub fn package(self, prefix: &str) -> Option<String> {
        if !SUPPORTED_PREFIXES.contains(&prefix) {
            return None;
        }
        let package = match (self, prefix) {
            (Self::Iconify, "phosphor") => "@iconify-json/ph".to_owned(),
            (Self::Iconify, "f5-brand" | "f5xc" | "hashicorp-flight") => {
                format!("@robinmordasiewicz/icons-{prefix}")
            }
            (Self::Iconify, _) => format!("@iconify-json/{prefix}"),
            (Self::Mirror, _) => format!("@f5xc-salesdemos/icons-{prefix}"),
        };
        Some(package)
    }

    /// Bundle file for `prefix` under the package root.
    #[must_use]
    pub fn bundle_path(self, root: &Path, prefix: &str) -> Option<PathBuf> {
        self.package(prefix)
            .map(|package| root.join(package).join(BUNDLE_FILENAME))
    }

    /// Registry with a filesystem source for every supported prefix.
    #[must_use]
    pub fn registry(self, root: &Path) -> IconSetRegistry {
        let mut registry = IconSetRegistry::new();
        for prefix in SUPPORTED_PREFIXES {
            if let Some(path) = self.bundle_path(root, prefix) {
                registry.register(prefix, FsIconSetSource::new(path));
            }
        }
        registry
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iconify" => Ok(Self::Iconify),
            "mirror" => Ok(Self::Mirror),
            other => Err(format!(
                "unknown preset \"{other}\" (expected \"iconify\" or \"mirror\")"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_iconify_packages() {
        let preset = Preset::Iconify;
        assert_eq!(preset.package("lucide").unwrap(), "@iconify-json/lucide");
        assert_eq!(preset.package("phosphor").unwrap(), "@iconify-json/ph");
        assert_eq!(
            preset.package("f5xc").unwrap(),
            "@robinmordasiewicz/icons-f5xc"
        );
        assert_eq!(
            preset.package("hashicorp-flight").unwrap(),
            "@robinmordasiewicz/icons-hashicorp-flight"
        );
    }

    #[test]
    fn test_mirror_packages() {
        let preset = Preset::Mirror;
        assert_eq!(
            preset.package("phosphor").unwrap(),
            "@f5xc-salesdemos/icons-phosphor"
        );
        assert_eq!(
            preset.package("mdi").unwrap(),
            "@f5xc-salesdemos/icons-mdi"
        );
    }

    #[test]
    fn test_unsupported_prefix_has_no_package() {
        assert!(Preset::Iconify.package("fa").is_none());
        assert!(Preset::Mirror.package("").is_none());
    }

    #[test]
    fn test_bundle_path() {
        let path = Preset::Iconify
            .bundle_path(Path::new("/site/node_modules"), "tabler")
            .unwrap();
        assert_eq!(
            path,
            PathBuf::from("/site/node_modules/@iconify-json/tabler/icons.json")
        );
    }

    #[test]
    fn test_registry_covers_supported_prefixes_in_order() {
        let registry = Preset::Mirror.registry(Path::new("/nm"));

        assert_eq!(registry.prefixes(), SUPPORTED_PREFIXES.to_vec());
        assert_eq!(
            registry.source("carbon").unwrap().describe(),
            Path::new("/nm/@f5xc-salesdemos/icons-carbon/icons.json")
                .display()
                .to_string()
        );
    }

    #[test]
    fn test_from_str_roundtrips_name() {
        for preset in [Preset::Iconify, Preset::Mirror] {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
        }
        let err = "cdn".parse::<Preset>().unwrap_err();
        assert!(err.contains("cdn"));
    }

    #[test]
    fn test_default_is_iconify() {
        assert_eq!(Preset::default(), Preset::Iconify);
    }
}
