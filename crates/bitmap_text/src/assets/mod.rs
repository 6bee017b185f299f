//! Asset management
//!
//! Glyph atlas decoding and the font registry that shares uploaded atlases
//! between text surfaces.

pub mod font_registry;
pub mod image_loader;

pub use font_registry::FontRegistry;
pub use image_loader::ImageData;

use thiserror::Error;

use crate::render::RenderError;

/// Asset system errors
#[derive(Debug, Error)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to decode asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// Decoded fine but unusable (bad metrics, undersized atlas)
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The draw backend rejected the upload
    #[error("Upload failed: {0}")]
    Upload(#[from] RenderError),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
