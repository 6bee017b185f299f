//! Text box: a one-line label on a bordered, filled panel sized to the
//! message.

use std::sync::Arc;

use super::surface::TextSurface;
use crate::foundation::math::{Color, Rect};
use crate::render::{DrawBackend, RenderError};
use crate::text::{BitmapFont, TextPresenter};

/// Border colour of a text box
pub const BOX_BORDER: Color = Color::rgb(0x40, 0x40, 0x40);
/// Fill colour of a text box
pub const BOX_FILL: Color = Color::rgb(0x80, 0x80, 0x80);

/// Label padding inside the border, in pixels
const PADDING: (i32, i32) = (2, 1);

/// Auto-sized label panel
#[derive(Debug, Clone)]
pub struct TextBox {
    origin: (i32, i32),
    label: TextPresenter,
    border: Color,
    fill: Color,
}

impl TextBox {
    /// Create a box with its top-left corner at `(x, y)`
    pub fn new(font: Arc<BitmapFont>, x: i32, y: i32, message: impl Into<String>) -> Self {
        let label = TextPresenter::new(font, Rect::new(x, y, 0, 0), message);
        let mut text_box = Self {
            origin: (x, y),
            label,
            border: BOX_BORDER,
            fill: BOX_FILL,
        };
        text_box.fit_label();
        text_box
    }

    /// Override the panel colours
    pub fn with_colors(mut self, border: Color, fill: Color) -> Self {
        self.border = border;
        self.fill = fill;
        self
    }

    /// Outer rectangle: one cell of margin plus one per character, and two
    /// pixels of padding above and below a cell row
    pub fn frame(&self) -> Rect {
        let metrics = self.label.font().metrics();
        let cell_w = metrics.cell_width as i32;
        let len = self.label.message().chars().count() as i32;
        Rect::new(
            self.origin.0,
            self.origin.1,
            cell_w + cell_w * len,
            metrics.cell_height as i32 + 4,
        )
    }

    fn fit_label(&mut self) {
        let frame = self.frame();
        let inner = frame.inset(1);
        self.label.set_position(inner.x + PADDING.0, inner.y + PADDING.1);
        self.label.set_size(frame.w, self.label.font().metrics().cell_height as i32);
    }
}

impl TextSurface for TextBox {
    fn presenter(&self) -> &TextPresenter {
        &self.label
    }

    fn presenter_mut(&mut self) -> &mut TextPresenter {
        &mut self.label
    }

    fn bounds(&self) -> Rect {
        self.frame()
    }

    fn draw(&mut self, elapsed_ms: u32, backend: &mut dyn DrawBackend) -> Result<(), RenderError> {
        if self.label.message().is_empty() {
            return Ok(());
        }

        let frame = self.frame();
        backend.set_draw_color(self.border)?;
        backend.stroke_rect(frame)?;
        backend.set_draw_color(self.fill)?;
        backend.fill_rect(frame.inset(1))?;

        self.label.draw(elapsed_ms, backend)
    }

    /// Boxes size themselves to their message; requested sizes are ignored
    fn set_size(&mut self, width: i32, height: i32) {
        log::debug!("Ignoring {}x{} resize of auto-sized text box", width, height);
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.origin = (x, y);
        self.fit_label();
    }

    fn set_message(&mut self, message: &str) {
        self.label.set_message(message);
        self.fit_label();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{FontRegistry, ImageData};
    use crate::render::{CommandRecorder, DrawCommand};
    use crate::text::GlyphMetrics;

    fn text_box(message: &str) -> (TextBox, CommandRecorder) {
        let mut backend = CommandRecorder::new();
        let font = FontRegistry::new()
            .register_image(
                "6x7",
                &ImageData::solid_color(65 * 6, 7, [0xff; 4]),
                GlyphMetrics::DEFAULT,
                &mut backend,
            )
            .expect("register");
        (TextBox::new(font, 10, 20, message), backend)
    }

    #[test]
    fn test_frame_fits_message() {
        let (text_box, _) = text_box("HELLO WORLD");
        assert_eq!(text_box.frame(), Rect::new(10, 20, 72, 11));
        assert_eq!(text_box.presenter().line_count(), 1);
        assert_eq!(text_box.presenter().viewport().x, 13);
        assert_eq!(text_box.presenter().viewport().y, 22);
    }

    #[test]
    fn test_draws_border_fill_then_label() {
        let (mut text_box, mut backend) = text_box("OK");
        text_box.draw(0, &mut backend).expect("draw");

        let commands = backend.commands();
        assert_eq!(commands[0], DrawCommand::SetDrawColor(BOX_BORDER));
        assert_eq!(commands[1], DrawCommand::StrokeRect(Rect::new(10, 20, 18, 11)));
        assert_eq!(commands[2], DrawCommand::SetDrawColor(BOX_FILL));
        assert_eq!(commands[3], DrawCommand::FillRect(Rect::new(11, 21, 16, 9)));

        let dsts: Vec<Rect> = backend.blits().map(|(_, dst, _)| dst).collect();
        assert_eq!(dsts, vec![Rect::new(13, 22, 6, 7), Rect::new(19, 22, 6, 7)]);
    }

    #[test]
    fn test_empty_box_draws_nothing() {
        let (mut text_box, mut backend) = text_box("");
        text_box.draw(0, &mut backend).expect("draw");
        assert!(backend.commands().is_empty());
    }

    #[test]
    fn test_message_and_position_refit() {
        let (mut text_box, _) = text_box("A");
        text_box.set_message("LONGER");
        assert_eq!(text_box.frame().w, 42);

        text_box.set_position(0, 0);
        assert_eq!(text_box.presenter().viewport().x, 3);
        text_box.set_size(1, 1);
        assert_eq!(text_box.frame().w, 42);
    }
}
