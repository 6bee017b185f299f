//! Font registry
//!
//! Owns every glyph atlas the host has loaded. An atlas bitmap is decoded and
//! uploaded once; every text surface asking for the same bitmap shares the
//! resulting [`BitmapFont`] through an `Arc`. Hosts create one registry and
//! pass it by reference to surface constructors.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{AssetError, ImageData};
use crate::render::{AtlasHandle, DrawBackend};
use crate::text::{BitmapFont, GlyphMetrics};

#[derive(Debug, Clone, Copy)]
struct LoadedAtlas {
    handle: AtlasHandle,
    size: (u32, u32),
}

/// Registry of uploaded glyph atlases
#[derive(Debug, Default)]
pub struct FontRegistry {
    atlases: HashMap<String, LoadedAtlas>,
    fonts: HashMap<(String, GlyphMetrics), Arc<BitmapFont>>,
    search_dirs: Vec<PathBuf>,
}

impl FontRegistry {
    /// Create an empty registry that resolves names relative to the working
    /// directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Also look for bitmaps under `dir`, tried in insertion order after the
    /// name itself
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    /// Number of distinct atlas bitmaps uploaded
    pub fn atlas_count(&self) -> usize {
        self.atlases.len()
    }

    /// True when `name` has already been uploaded
    pub fn contains(&self, name: &str) -> bool {
        self.atlases.contains_key(name)
    }

    /// Font for an already uploaded atlas, without touching the backend
    pub fn font(&self, name: &str, metrics: GlyphMetrics) -> Result<Arc<BitmapFont>, AssetError> {
        if let Some(font) = self.fonts.get(&(name.to_string(), metrics)) {
            return Ok(Arc::clone(font));
        }
        let atlas = self
            .atlases
            .get(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))?;
        Ok(Arc::new(BitmapFont::new(name, atlas.handle, atlas.size, metrics)?))
    }

    /// Load a bitmap font from disk, uploading it on first use
    pub fn load(
        &mut self,
        name: &str,
        metrics: GlyphMetrics,
        backend: &mut dyn DrawBackend,
    ) -> Result<Arc<BitmapFont>, AssetError> {
        if !self.atlases.contains_key(name) {
            let path = self.resolve(name)?;
            let image = ImageData::from_file(&path)?;
            self.upload(name, &image, backend)?;
        }
        self.cached_font(name, metrics)
    }

    /// Register an atlas from encoded bytes (embedded assets)
    ///
    /// Bytes for a name that is already registered are ignored.
    pub fn load_from_bytes(
        &mut self,
        name: &str,
        bytes: &[u8],
        metrics: GlyphMetrics,
        backend: &mut dyn DrawBackend,
    ) -> Result<Arc<BitmapFont>, AssetError> {
        if !self.atlases.contains_key(name) {
            let image = ImageData::from_bytes(bytes)?;
            self.upload(name, &image, backend)?;
        }
        self.cached_font(name, metrics)
    }

    /// Register an already decoded atlas image
    pub fn register_image(
        &mut self,
        name: &str,
        image: &ImageData,
        metrics: GlyphMetrics,
        backend: &mut dyn DrawBackend,
    ) -> Result<Arc<BitmapFont>, AssetError> {
        if !self.atlases.contains_key(name) {
            self.upload(name, image, backend)?;
        }
        self.cached_font(name, metrics)
    }

    fn upload(
        &mut self,
        name: &str,
        image: &ImageData,
        backend: &mut dyn DrawBackend,
    ) -> Result<(), AssetError> {
        let handle = backend.upload_atlas(image)?;
        self.atlases.insert(
            name.to_string(),
            LoadedAtlas {
                handle,
                size: (image.width, image.height),
            },
        );

        log::info!(
            "Registered font atlas '{}' ({}x{}) as {:?}",
            name,
            image.width,
            image.height,
            handle
        );
        Ok(())
    }

    fn cached_font(
        &mut self,
        name: &str,
        metrics: GlyphMetrics,
    ) -> Result<Arc<BitmapFont>, AssetError> {
        let font = self.font(name, metrics)?;
        self.fonts
            .entry((name.to_string(), metrics))
            .or_insert_with(|| Arc::clone(&font));
        Ok(font)
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, AssetError> {
        let direct = Path::new(name);
        if direct.exists() {
            return Ok(direct.to_path_buf());
        }

        self.search_dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.exists())
            .ok_or_else(|| {
                log::warn!("Font bitmap '{}' not found in {:?}", name, self.search_dirs);
                AssetError::NotFound(name.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CommandRecorder;

    fn atlas_image() -> ImageData {
        ImageData::solid_color(65 * 6, 7, [0xff; 4])
    }

    #[test]
    fn test_same_bitmap_uploads_once() {
        let mut backend = CommandRecorder::new();
        let mut registry = FontRegistry::new();

        let a = registry
            .register_image("6x7", &atlas_image(), GlyphMetrics::DEFAULT, &mut backend)
            .expect("register");
        let b = registry
            .register_image("6x7", &atlas_image(), GlyphMetrics::DEFAULT, &mut backend)
            .expect("register again");

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.atlas_count(), 1);
        assert_eq!(backend.atlas_size(AtlasHandle(1)), None);
    }

    #[test]
    fn test_different_metrics_share_atlas() {
        let mut backend = CommandRecorder::new();
        let mut registry = FontRegistry::new();

        let narrow = registry
            .register_image("6x7", &atlas_image(), GlyphMetrics::DEFAULT, &mut backend)
            .expect("register");
        let spaced = registry
            .register_image("6x7", &atlas_image(), GlyphMetrics::new(6, 7, 2), &mut backend)
            .expect("register spaced");

        assert_eq!(narrow.atlas(), spaced.atlas());
        assert_eq!(spaced.metrics().leading, 2);
        assert_eq!(registry.atlas_count(), 1);
    }

    #[test]
    fn test_unknown_font_is_not_found() {
        let registry = FontRegistry::new();
        assert!(matches!(
            registry.font("missing", GlyphMetrics::DEFAULT),
            Err(AssetError::NotFound(_))
        ));

        let mut backend = CommandRecorder::new();
        let mut registry = FontRegistry::new().with_search_dir("nowhere");
        assert!(matches!(
            registry.load("missing.bmp", GlyphMetrics::DEFAULT, &mut backend),
            Err(AssetError::NotFound(_))
        ));
    }

    #[test]
    fn test_bad_metrics_surface_as_invalid_data() {
        let mut backend = CommandRecorder::new();
        let mut registry = FontRegistry::new();
        let result = registry.register_image(
            "6x7",
            &atlas_image(),
            GlyphMetrics::new(6, 9, 0),
            &mut backend,
        );
        assert!(matches!(result, Err(AssetError::InvalidData(_))));
    }
}
