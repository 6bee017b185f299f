//! Text presenter
//!
//! Owns a message, its layout and the per-surface effect state, and turns
//! them into glyph blits every frame. Order of work in [`TextPresenter::draw`]:
//!
//! 1. blink: a hidden phase skips the frame entirely, reveal included
//! 2. typewriter: how many characters this frame may show
//! 3. optional debug frame around the viewport
//! 4. visible lines from the scroll position, shadow pass before each glyph
//! 5. caret at the point the reveal stopped

use std::sync::Arc;

use super::{Blink, BitmapFont, TextLayout, Typewriter};
use crate::core::TextStyleConfig;
use crate::foundation::math::{Color, Rect};
use crate::render::{DrawBackend, RenderError};

/// Laid-out, animated text inside a pixel viewport
#[derive(Debug, Clone)]
pub struct TextPresenter {
    viewport: Rect,
    message: String,
    font: Arc<BitmapFont>,
    layout: TextLayout,
    scroll: usize,
    typewriter: Typewriter,
    blink: Blink,
    shadow_offset: (i32, i32),
    color: Color,
    shadow_color: Color,
    caret: Option<char>,
    draw_frame: bool,
}

impl TextPresenter {
    /// Lay `message` out inside `viewport` with default styling
    pub fn new(font: Arc<BitmapFont>, viewport: Rect, message: impl Into<String>) -> Self {
        let message = message.into();
        let layout = TextLayout::compute(&message, viewport.w, viewport.h, font.metrics());

        Self {
            viewport,
            message,
            font,
            layout,
            scroll: 0,
            typewriter: Typewriter::default(),
            blink: Blink::default(),
            shadow_offset: (0, 0),
            color: Color::WHITE,
            shadow_color: Color::BLACK,
            caret: None,
            draw_frame: false,
        }
    }

    /// Build a presenter and apply a style in one go
    pub fn with_style(
        font: Arc<BitmapFont>,
        viewport: Rect,
        message: impl Into<String>,
        style: &TextStyleConfig,
    ) -> Self {
        let mut presenter = Self::new(font, viewport, message);
        presenter.apply_style(style);
        presenter
    }

    /// Take effects and colours from a style config
    ///
    /// The font section is ignored; fonts come from the registry.
    pub fn apply_style(&mut self, style: &TextStyleConfig) {
        self.typewriter.set_ticks_per_char(style.ticks_per_char);
        self.blink.set(style.blink_on_ms, style.blink_off_ms);
        self.shadow_offset = style.shadow_offset;
        self.color = style.color;
        self.shadow_color = style.shadow_color;
        self.caret = style.caret;
        self.draw_frame = style.draw_frame;
    }

    // Content

    /// Current message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the message; the layout is rebuilt and the reveal restarts
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.typewriter.reset();
        self.relayout();
    }

    /// Font used for layout and drawing
    pub fn font(&self) -> &Arc<BitmapFont> {
        &self.font
    }

    /// Switch fonts; the layout is rebuilt and the reveal restarts
    pub fn set_font(&mut self, font: Arc<BitmapFont>) {
        self.font = font;
        self.typewriter.reset();
        self.relayout();
    }

    /// Viewport in screen pixels
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Resize the viewport and rebuild the layout
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.viewport.w = width;
        self.viewport.h = height;
        self.relayout();
    }

    /// Move the viewport; the layout is unaffected
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.viewport.x = x;
        self.viewport.y = y;
    }

    /// Current layout
    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    /// Number of display lines
    pub fn line_count(&self) -> usize {
        self.layout.line_count()
    }

    /// Lines visible at once
    pub fn window_lines(&self) -> usize {
        self.layout.window_lines()
    }

    fn relayout(&mut self) {
        self.layout = TextLayout::compute(
            &self.message,
            self.viewport.w,
            self.viewport.h,
            self.font.metrics(),
        );
        self.scroll = self.scroll.min(self.layout.max_scroll());

        log::debug!(
            "Laid out {} chars into {} lines ({} per line, {} visible)",
            self.layout.char_count(),
            self.layout.line_count(),
            self.layout.chars_per_line(),
            self.layout.window_lines()
        );
    }

    // Scrolling

    /// Index of the first visible line
    pub fn scroll_position(&self) -> usize {
        self.scroll
    }

    /// Jump to a line, clamped to the last line
    pub fn set_scroll_position(&mut self, position: usize) {
        self.scroll = position.min(self.layout.max_scroll());
    }

    /// Scroll by a signed number of lines, saturating at both ends
    pub fn set_scroll_offset(&mut self, delta: isize) {
        let position = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta.unsigned_abs())
        };
        self.set_scroll_position(position);
    }

    // Effects

    /// Typewriter delay per character; 0 shows everything at once
    pub fn set_ticks_per_char(&mut self, ticks_per_char: u32) {
        self.typewriter.set_ticks_per_char(ticks_per_char);
    }

    /// Typewriter state
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    /// Characters the typewriter has revealed so far, out of the laid-out
    /// character count
    pub fn revealed_chars(&self) -> usize {
        self.typewriter.revealed(self.layout.char_count())
    }

    /// Blink periods; both zero disables blinking
    pub fn set_blink(&mut self, on_ms: u32, off_ms: u32) {
        self.blink.set(on_ms, off_ms);
    }

    /// Blink state
    pub fn blink(&self) -> &Blink {
        &self.blink
    }

    /// Shadow offset; `(0, 0)` disables the shadow
    pub fn set_shadow(&mut self, dx: i32, dy: i32) {
        self.shadow_offset = (dx, dy);
    }

    /// Glyph colour
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set glyph colour, alpha included
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Set glyph alpha only
    pub fn set_alpha(&mut self, alpha: u8) {
        self.color.a = alpha;
    }

    /// Shadow colour
    pub fn shadow_color(&self) -> Color {
        self.shadow_color
    }

    /// Set shadow colour, alpha included
    pub fn set_shadow_color(&mut self, color: Color) {
        self.shadow_color = color;
    }

    /// Set shadow alpha only
    pub fn set_shadow_alpha(&mut self, alpha: u8) {
        self.shadow_color.a = alpha;
    }

    /// Glyph drawn after the last revealed character
    pub fn set_caret(&mut self, caret: Option<char>) {
        self.caret = caret;
    }

    /// Outline the viewport on every draw
    pub fn set_draw_frame(&mut self, enabled: bool) {
        self.draw_frame = enabled;
    }

    // Drawing

    /// Advance effects by `elapsed_ms` and draw the visible text
    pub fn draw(
        &mut self,
        elapsed_ms: u32,
        backend: &mut dyn DrawBackend,
    ) -> Result<(), RenderError> {
        if !self.blink.advance(elapsed_ms) {
            return Ok(());
        }
        let cap = self.typewriter.advance(elapsed_ms, self.layout.char_count());

        if self.draw_frame {
            backend.set_draw_color(self.color)?;
            backend.stroke_rect(self.viewport)?;
        }

        let metrics = self.font.metrics();
        let cell_w = metrics.cell_width as i32;
        let cell_h = metrics.cell_height as i32;
        let line_h = metrics.line_height() as i32;

        let mut drawn = 0usize;
        let mut y = self.viewport.y;
        let visible = self
            .layout
            .lines()
            .iter()
            .skip(self.scroll)
            .take(self.layout.window_lines());

        for line in visible {
            if y + cell_h > self.viewport.bottom() {
                break;
            }

            let mut x = self.viewport.x;
            for ch in line.chars() {
                if cap.is_reached(drawn) {
                    return self.draw_caret(x, y, backend);
                }
                self.draw_glyph(ch, Rect::new(x, y, cell_w, cell_h), backend)?;
                x += cell_w;
                drawn += 1;
            }
            y += line_h;
        }

        Ok(())
    }

    fn draw_glyph(
        &self,
        ch: char,
        dst: Rect,
        backend: &mut dyn DrawBackend,
    ) -> Result<(), RenderError> {
        let src = self.font.glyph_rect(ch);
        let (dx, dy) = self.shadow_offset;
        if (dx, dy) != (0, 0) {
            backend.blit(self.font.atlas(), src, dst.offset(dx, dy), self.shadow_color)?;
        }
        backend.blit(self.font.atlas(), src, dst, self.color)
    }

    fn draw_caret(&self, x: i32, y: i32, backend: &mut dyn DrawBackend) -> Result<(), RenderError> {
        let Some(caret) = self.caret else {
            return Ok(());
        };
        let metrics = self.font.metrics();
        let dst = Rect::new(x, y, metrics.cell_width as i32, metrics.cell_height as i32);
        backend.blit(self.font.atlas(), self.font.glyph_rect(caret), dst, self.color)
    }
}
