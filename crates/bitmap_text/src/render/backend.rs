//! Draw Backend Trait
//!
//! Defines the interface between text surfaces and the 2D drawing layer.
//! Keeps layout, reveal and scrollbar logic independent of SDL/wgpu/Vulkan
//! specifics.

use crate::assets::ImageData;
use crate::foundation::math::{Color, Rect};

/// Handle to a glyph atlas uploaded to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtlasHandle(pub u64);

/// Errors raised by a draw backend
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The backend failed to execute a primitive
    #[error("Backend error: {0}")]
    Backend(String),

    /// A blit referenced an atlas the backend never received
    #[error("Unknown atlas handle: {0:?}")]
    UnknownAtlas(AtlasHandle),
}

/// Backend-agnostic 2D drawing interface
///
/// Text surfaces issue these per glyph and per frame with no batching
/// contract; a backend is free to batch internally.
pub trait DrawBackend {
    /// Upload a decoded atlas image and get a handle for later blits
    fn upload_atlas(&mut self, image: &ImageData) -> Result<AtlasHandle, RenderError>;

    /// Copy `src` from an atlas to `dst` on screen, modulated by `tint`
    ///
    /// `tint` multiplies the atlas texels per channel, alpha included.
    fn blit(
        &mut self,
        atlas: AtlasHandle,
        src: Rect,
        dst: Rect,
        tint: Color,
    ) -> Result<(), RenderError>;

    /// Set the colour used by [`fill_rect`](Self::fill_rect) and
    /// [`stroke_rect`](Self::stroke_rect)
    fn set_draw_color(&mut self, color: Color) -> Result<(), RenderError>;

    /// Fill a rectangle with the current draw colour
    fn fill_rect(&mut self, rect: Rect) -> Result<(), RenderError>;

    /// Outline a rectangle with the current draw colour
    fn stroke_rect(&mut self, rect: Rect) -> Result<(), RenderError>;
}
