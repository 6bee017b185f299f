//! Text surface trait
//!
//! The shared interface of everything that draws text: plain presenters,
//! scrollable text and text boxes. Colour and message setters default to
//! the underlying [`TextPresenter`]; input handlers default to ignoring the
//! event.

use crate::foundation::math::{Color, Rect};
use crate::input::{KeyCode, PointerEvent};
use crate::render::{DrawBackend, RenderError};
use crate::text::TextPresenter;

/// A drawable text widget
pub trait TextSurface {
    /// Presenter that owns the message and effects
    fn presenter(&self) -> &TextPresenter;

    /// Mutable presenter, for effect setters
    fn presenter_mut(&mut self) -> &mut TextPresenter;

    /// Screen area the surface covers
    fn bounds(&self) -> Rect;

    /// Advance animations by `elapsed_ms` and draw
    fn draw(&mut self, elapsed_ms: u32, backend: &mut dyn DrawBackend) -> Result<(), RenderError>;

    /// Resize the surface
    fn set_size(&mut self, width: i32, height: i32);

    /// Move the surface
    fn set_position(&mut self, x: i32, y: i32) {
        self.presenter_mut().set_position(x, y);
    }

    /// Replace the message
    fn set_message(&mut self, message: &str) {
        self.presenter_mut().set_message(message);
    }

    /// Glyph colour, alpha included
    fn set_color(&mut self, color: Color) {
        self.presenter_mut().set_color(color);
    }

    /// Glyph alpha only
    fn set_alpha(&mut self, alpha: u8) {
        self.presenter_mut().set_alpha(alpha);
    }

    /// Shadow colour, alpha included
    fn set_shadow_color(&mut self, color: Color) {
        self.presenter_mut().set_shadow_color(color);
    }

    /// Shadow alpha only
    fn set_shadow_alpha(&mut self, alpha: u8) {
        self.presenter_mut().set_shadow_alpha(alpha);
    }

    /// React to a pointer event in screen coordinates
    ///
    /// Returns true when the surface wants a redraw (hover or scroll change).
    fn handle_pointer(&mut self, _event: &PointerEvent) -> bool {
        false
    }

    /// React to a key press; returns true when something changed
    fn keydown(&mut self, _key: KeyCode) -> bool {
        false
    }
}

impl TextSurface for TextPresenter {
    fn presenter(&self) -> &TextPresenter {
        self
    }

    fn presenter_mut(&mut self) -> &mut TextPresenter {
        self
    }

    fn bounds(&self) -> Rect {
        self.viewport()
    }

    fn draw(&mut self, elapsed_ms: u32, backend: &mut dyn DrawBackend) -> Result<(), RenderError> {
        Self::draw(self, elapsed_ms, backend)
    }

    fn set_size(&mut self, width: i32, height: i32) {
        Self::set_size(self, width, height);
    }
}
