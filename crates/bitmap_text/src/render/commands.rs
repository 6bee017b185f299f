//! Recorded draw commands
//!
//! [`CommandRecorder`] is a [`DrawBackend`] that keeps every primitive it is
//! asked to draw. Headless hosts replay the list into a real renderer; tests
//! assert on it directly.

use std::collections::HashMap;

use super::backend::{AtlasHandle, DrawBackend, RenderError};
use crate::assets::ImageData;
use crate::foundation::math::{Color, Rect};

/// A single recorded draw primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Textured copy from a glyph atlas
    Blit {
        /// Source atlas
        atlas: AtlasHandle,
        /// Source rectangle inside the atlas
        src: Rect,
        /// Destination rectangle on screen
        dst: Rect,
        /// Colour/alpha modulation
        tint: Color,
    },
    /// Draw colour change
    SetDrawColor(Color),
    /// Filled rectangle
    FillRect(Rect),
    /// Rectangle outline
    StrokeRect(Rect),
}

/// Draw backend that records commands instead of drawing
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    atlases: HashMap<AtlasHandle, (u32, u32)>,
    next_atlas: u64,
}

impl CommandRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last [`clear`](Self::clear)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, keeping uploaded atlases
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Take the recorded commands, leaving the recorder empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded blits as `(src, dst, tint)`
    pub fn blits(&self) -> impl Iterator<Item = (Rect, Rect, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Blit { src, dst, tint, .. } => Some((*src, *dst, *tint)),
            _ => None,
        })
    }

    /// Number of recorded blits
    pub fn blit_count(&self) -> usize {
        self.blits().count()
    }

    /// Size of an uploaded atlas
    pub fn atlas_size(&self, atlas: AtlasHandle) -> Option<(u32, u32)> {
        self.atlases.get(&atlas).copied()
    }
}

impl DrawBackend for CommandRecorder {
    fn upload_atlas(&mut self, image: &ImageData) -> Result<AtlasHandle, RenderError> {
        let handle = AtlasHandle(self.next_atlas);
        self.next_atlas += 1;
        self.atlases.insert(handle, (image.width, image.height));

        log::trace!("Recorded atlas upload {:?} ({}x{})", handle, image.width, image.height);
        Ok(handle)
    }

    fn blit(
        &mut self,
        atlas: AtlasHandle,
        src: Rect,
        dst: Rect,
        tint: Color,
    ) -> Result<(), RenderError> {
        if !self.atlases.contains_key(&atlas) {
            return Err(RenderError::UnknownAtlas(atlas));
        }
        self.commands.push(DrawCommand::Blit { atlas, src, dst, tint });
        Ok(())
    }

    fn set_draw_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::SetDrawColor(color));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::FillRect(rect));
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::StrokeRect(rect));
        Ok(())
    }
}
