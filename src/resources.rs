//! Bundled resources and the lookup rules shared by every loader.
//!
//! Catalogs, the shop listing and the lore text ship inside the binary
//! (see `assets/`). A data directory configured in the settings can shadow
//! individual files without rebuilding.

use std::{
    borrow::Cow,
    fmt::Debug,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use include_dir::{Dir, include_dir};

use crate::error::CatalogError;

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

pub type SharedResources = Arc<dyn ResourceBundle>;

/// A read-only set of named resources.
pub trait ResourceBundle: Debug + Send + Sync {
    /// Returns the raw bytes of `name`, or `None` when the bundle has no such resource.
    fn read(&self, name: &str) -> Option<Cow<'_, [u8]>>;

    /// Human readable origin, used in diagnostics.
    fn describe(&self) -> String;
}

/// Resources compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledResources;

impl ResourceBundle for BundledResources {
    fn read(&self, name: &str) -> Option<Cow<'_, [u8]>> {
        ASSETS
            .get_file(name)
            .map(|file| Cow::Borrowed(file.contents()))
    }

    fn describe(&self) -> String {
        "bundled assets".to_string()
    }
}

/// Resources read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceBundle for DirectoryResources {
    fn read(&self, name: &str) -> Option<Cow<'_, [u8]>> {
        let path = self.root.join(name);
        match std::fs::read(&path) {
            Ok(bytes) => Some(Cow::Owned(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                log::error!("Failed to read {}: {e}", path.display());
                None
            }
        }
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

/// An override bundle consulted before a fallback bundle.
#[derive(Debug)]
pub struct LayeredResources<O, F> {
    overlay: O,
    fallback: F,
}

impl<O, F> LayeredResources<O, F> {
    pub fn new(overlay: O, fallback: F) -> Self {
        Self { overlay, fallback }
    }
}

impl<O: ResourceBundle, F: ResourceBundle> ResourceBundle for LayeredResources<O, F> {
    fn read(&self, name: &str) -> Option<Cow<'_, [u8]>> {
        self.overlay.read(name).or_else(|| self.fallback.read(name))
    }

    fn describe(&self) -> String {
        format!("{} over {}", self.overlay.describe(), self.fallback.describe())
    }
}

/// Builds the resource set for an optional data directory override.
pub fn resources_for(data_dir: Option<&Path>) -> SharedResources {
    match data_dir {
        Some(dir) => Arc::new(LayeredResources::new(
            DirectoryResources::new(dir),
            BundledResources,
        )),
        None => Arc::new(BundledResources),
    }
}

/// Reads a resource as UTF-8 text.
pub fn read_text(bundle: &dyn ResourceBundle, name: &str) -> Result<String, CatalogError> {
    let bytes = bundle
        .read(name)
        .ok_or_else(|| CatalogError::ResourceNotFound {
            name: name.to_string(),
            bundle: bundle.describe(),
        })?;
    std::str::from_utf8(&bytes)
        .map(str::to_string)
        .map_err(|source| CatalogError::Encoding {
            name: name.to_string(),
            source,
        })
}

/// Strips one trailing file extension from an image reference.
///
/// `"sprint_burst.png"` resolves to the asset key `"sprint_burst"`. References
/// without an extension, or dot-files such as `".png"`, are returned as is.
pub fn asset_key(reference: &str) -> &str {
    match reference.rsplit_once('.') {
        Some((stem, extension))
            if !stem.is_empty()
                && !extension.is_empty()
                && extension.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            stem
        }
        _ => reference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_key_strips_png_suffix() {
        assert_eq!(asset_key("sprint_burst.png"), "sprint_burst");
        assert_eq!(asset_key("iconPerks_hexRuin.PNG"), "iconPerks_hexRuin");
    }

    #[test]
    fn asset_key_keeps_references_without_extension() {
        assert_eq!(asset_key("sprint_burst"), "sprint_burst");
        assert_eq!(asset_key(".png"), ".png");
        assert_eq!(asset_key("trailing."), "trailing.");
    }

    #[test]
    fn asset_key_strips_only_the_last_extension() {
        assert_eq!(asset_key("archive.tar.gz"), "archive.tar");
    }

    #[test]
    fn bundled_resources_contain_every_catalog() {
        for name in ["perks.json", "powers.json", "items.json", "shop.json", "lore.txt"] {
            assert!(BundledResources.read(name).is_some(), "missing {name}");
        }
        assert!(BundledResources.read("missing.json").is_none());
    }

    #[test]
    fn directory_overrides_fall_back_to_the_bundle() {
        let dir = tempfile::tempdir().expect("Expected a temp dir");
        std::fs::write(dir.path().join("perks.json"), "[]").expect("Expected to write perks");

        let resources = resources_for(Some(dir.path()));
        assert_eq!(resources.read("perks.json").as_deref(), Some(&b"[]"[..]));
        assert!(resources.read("items.json").is_some());
        assert!(resources.describe().contains("over bundled assets"));
    }

    #[test]
    fn read_text_reports_missing_resources() {
        let error = read_text(&BundledResources, "nope.txt").expect_err("Expected an error");
        assert!(error.is_not_found());
    }
}
