//! Text widgets
//!
//! Surfaces built on [`TextPresenter`](crate::text::TextPresenter): plain
//! text, scrollable text with a scrollbar, and auto-sized text boxes, plus a
//! manager that runs them frame by frame.

pub mod manager;
pub mod scrollable;
pub mod scrollbar;
pub mod surface;
pub mod text_box;

pub use manager::{WidgetId, WidgetManager};
pub use scrollable::ScrollableText;
pub use scrollbar::{ScrollAction, Scrollbar, ScrollbarGeometry, ScrollbarZone};
pub use surface::TextSurface;
pub use text_box::TextBox;

use crate::foundation::math::Rect;
use crate::input::{KeyCode, PointerEvent};
use crate::render::{DrawBackend, RenderError};
use crate::text::TextPresenter;

/// Any text widget
#[derive(Debug, Clone)]
pub enum TextWidget {
    /// Text without a scrollbar
    Plain(TextPresenter),
    /// Text with a scrollbar
    Scrollable(ScrollableText),
    /// Label on an auto-sized panel
    Box(TextBox),
}

impl TextWidget {
    fn surface(&self) -> &dyn TextSurface {
        match self {
            Self::Plain(text) => text,
            Self::Scrollable(text) => text,
            Self::Box(text) => text,
        }
    }

    fn surface_mut(&mut self) -> &mut dyn TextSurface {
        match self {
            Self::Plain(text) => text,
            Self::Scrollable(text) => text,
            Self::Box(text) => text,
        }
    }
}

impl TextSurface for TextWidget {
    fn presenter(&self) -> &TextPresenter {
        self.surface().presenter()
    }

    fn presenter_mut(&mut self) -> &mut TextPresenter {
        self.surface_mut().presenter_mut()
    }

    fn bounds(&self) -> Rect {
        self.surface().bounds()
    }

    fn draw(&mut self, elapsed_ms: u32, backend: &mut dyn DrawBackend) -> Result<(), RenderError> {
        self.surface_mut().draw(elapsed_ms, backend)
    }

    fn set_size(&mut self, width: i32, height: i32) {
        self.surface_mut().set_size(width, height);
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.surface_mut().set_position(x, y);
    }

    fn set_message(&mut self, message: &str) {
        self.surface_mut().set_message(message);
    }

    fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        self.surface_mut().handle_pointer(event)
    }

    fn keydown(&mut self, key: KeyCode) -> bool {
        self.surface_mut().keydown(key)
    }
}

impl From<TextPresenter> for TextWidget {
    fn from(text: TextPresenter) -> Self {
        Self::Plain(text)
    }
}

impl From<ScrollableText> for TextWidget {
    fn from(text: ScrollableText) -> Self {
        Self::Scrollable(text)
    }
}

impl From<TextBox> for TextWidget {
    fn from(text: TextBox) -> Self {
        Self::Box(text)
    }
}
