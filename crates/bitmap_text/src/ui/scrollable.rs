//! Scrollable text
//!
//! A [`TextPresenter`] beside a [`Scrollbar`] strip. The strip takes its
//! width from the right edge of the region, so text wraps to the remaining
//! width. Pointer events are translated into region-local coordinates before
//! they reach the scrollbar.

use std::sync::Arc;

use super::scrollbar::{ScrollAction, Scrollbar, ScrollbarZone};
use super::surface::TextSurface;
use crate::core::{ScrollbarConfig, TextStyleConfig};
use crate::foundation::math::Rect;
use crate::input::{KeyCode, MouseButton, PointerEvent, PointerKind};
use crate::render::{DrawBackend, RenderError};
use crate::text::{BitmapFont, TextPresenter};

/// Text with a scrollbar
#[derive(Debug, Clone)]
pub struct ScrollableText {
    text: TextPresenter,
    region: Rect,
    scrollbar: Scrollbar,
    style: ScrollbarConfig,
}

impl ScrollableText {
    /// Lay `message` out in `region`, minus the scrollbar strip
    pub fn new(
        font: Arc<BitmapFont>,
        region: Rect,
        message: impl Into<String>,
        config: &ScrollbarConfig,
    ) -> Self {
        let text = TextPresenter::new(font, text_viewport(region, config.width), message);
        let mut scrollable = Self {
            text,
            region,
            scrollbar: Scrollbar::new(config),
            style: config.clone(),
        };
        scrollable.sync_scrollbar();
        scrollable
    }

    /// Build scrollable text with a text style applied
    pub fn with_style(
        font: Arc<BitmapFont>,
        region: Rect,
        message: impl Into<String>,
        style: &TextStyleConfig,
        config: &ScrollbarConfig,
    ) -> Self {
        let mut scrollable = Self::new(font, region, message, config);
        scrollable.text.apply_style(style);
        scrollable
    }

    /// Scrollbar state
    pub fn scrollbar(&self) -> &Scrollbar {
        &self.scrollbar
    }

    /// Index of the first visible line
    pub fn scroll_position(&self) -> usize {
        self.text.scroll_position()
    }

    /// Jump to a line, clamped
    pub fn set_scroll_position(&mut self, position: usize) {
        self.apply(ScrollAction::SetPosition(position));
    }

    /// Scroll by a signed number of lines, saturating
    pub fn set_scroll_offset(&mut self, delta: isize) {
        self.apply(ScrollAction::Offset(delta));
    }

    /// Apply a scroll action; returns true when the position moved
    fn apply(&mut self, action: ScrollAction) -> bool {
        let before = self.text.scroll_position();
        match action {
            ScrollAction::None => {}
            ScrollAction::Offset(delta) => self.text.set_scroll_offset(delta),
            ScrollAction::SetPosition(position) => self.text.set_scroll_position(position),
        }
        self.sync_scrollbar();
        before != self.text.scroll_position()
    }

    fn sync_scrollbar(&mut self) {
        self.scrollbar.sync(
            self.region.w,
            self.region.h,
            self.text.line_count(),
            self.text.window_lines(),
            self.text.scroll_position(),
        );
    }

    fn draw_scrollbar(&self, backend: &mut dyn DrawBackend) -> Result<(), RenderError> {
        let geometry = self.scrollbar.geometry();
        let strip = geometry.strip.offset(self.region.x, self.region.y);
        if strip.is_empty() {
            return Ok(());
        }

        let style = &self.style;
        let hovered = self.scrollbar.is_hovered() || self.scrollbar.is_dragging();
        let arrow_height = style.arrow_height.min(strip.h);

        backend.set_draw_color(style.track_color)?;
        backend.fill_rect(strip)?;

        if arrow_height > 0 {
            let zone = self.scrollbar.zone();
            let up = Rect::new(strip.x, strip.y, strip.w, arrow_height);
            let down = Rect::new(strip.x, strip.bottom() - arrow_height, strip.w, arrow_height);

            let arrow_fill = |lit: bool| if lit { style.hover_color } else { style.arrow_color };
            backend.set_draw_color(arrow_fill(zone == ScrollbarZone::UpArrow))?;
            backend.fill_rect(up)?;
            backend.set_draw_color(arrow_fill(zone == ScrollbarZone::DownArrow))?;
            backend.fill_rect(down)?;
        }

        if geometry.thumb_enabled {
            let thumb = geometry.thumb_rect().offset(self.region.x, self.region.y);
            backend.set_draw_color(if hovered { style.hover_color } else { style.thumb_color })?;
            backend.fill_rect(thumb)?;
        }

        backend.set_draw_color(style.border_color)?;
        backend.stroke_rect(strip)
    }
}

fn text_viewport(region: Rect, bar_width: i32) -> Rect {
    Rect::new(region.x, region.y, (region.w - bar_width).max(0), region.h)
}

impl TextSurface for ScrollableText {
    fn presenter(&self) -> &TextPresenter {
        &self.text
    }

    fn presenter_mut(&mut self) -> &mut TextPresenter {
        &mut self.text
    }

    fn bounds(&self) -> Rect {
        self.region
    }

    fn draw(&mut self, elapsed_ms: u32, backend: &mut dyn DrawBackend) -> Result<(), RenderError> {
        self.sync_scrollbar();
        self.text.draw(elapsed_ms, backend)?;
        self.draw_scrollbar(backend)
    }

    fn set_size(&mut self, width: i32, height: i32) {
        self.region.w = width;
        self.region.h = height;
        let viewport = text_viewport(self.region, self.scrollbar.width());
        self.text.set_size(viewport.w, viewport.h);
        self.sync_scrollbar();
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.region.x = x;
        self.region.y = y;
        self.text.set_position(x, y);
    }

    fn set_message(&mut self, message: &str) {
        self.text.set_message(message);
        self.sync_scrollbar();
    }

    fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        self.sync_scrollbar();
        let x = event.x - self.region.x;
        let y = event.y - self.region.y;

        let (hover_changed, action) = match event.kind {
            PointerKind::Move => self.scrollbar.pointer_move(x, y),
            PointerKind::Down if event.button == MouseButton::Left => {
                (false, self.scrollbar.pointer_down(x, y))
            }
            PointerKind::Down => (false, ScrollAction::None),
            PointerKind::Up => (false, self.scrollbar.pointer_up(x, y)),
            PointerKind::Wheel(lines) if self.region.contains(event.x, event.y) => {
                (false, ScrollAction::Offset(lines as isize))
            }
            PointerKind::Wheel(_) => (false, ScrollAction::None),
        };

        let scrolled = self.apply(action);
        if scrolled {
            log::trace!("Scrolled to line {}", self.text.scroll_position());
        }
        hover_changed || scrolled
    }

    fn keydown(&mut self, key: KeyCode) -> bool {
        let page = self.text.window_lines() as isize;
        let action = match key {
            KeyCode::Up => ScrollAction::Offset(-1),
            KeyCode::Down => ScrollAction::Offset(1),
            KeyCode::PageUp => ScrollAction::Offset(-page),
            KeyCode::PageDown => ScrollAction::Offset(page),
            KeyCode::Home => ScrollAction::SetPosition(0),
            KeyCode::End => ScrollAction::SetPosition(usize::MAX),
        };
        self.apply(action)
    }
}
