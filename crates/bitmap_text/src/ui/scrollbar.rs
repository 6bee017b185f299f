//! Scrollbar controller
//!
//! Geometry, hit-testing and drag state for the strip on the right edge of
//! scrollable text. The controller never owns the scroll position: it is told
//! the current line counts and position through [`Scrollbar::sync`], and its
//! pointer handlers answer with a [`ScrollAction`] for the owner to apply.
//!
//! All coordinates here are local to the owning viewport.

use crate::core::ScrollbarConfig;
use crate::foundation::math::Rect;

/// Vertical zone of the strip under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollbarZone {
    /// Outside the strip, or on a separator pixel
    #[default]
    None,
    /// Top arrow band
    UpArrow,
    /// Bottom arrow band
    DownArrow,
    /// The thumb itself
    Thumb,
    /// Track between the up arrow and the thumb
    TrackAbove,
    /// Track between the thumb and the down arrow
    TrackBelow,
}

/// What the owner should do to its scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAction {
    /// Leave it alone
    #[default]
    None,
    /// Scroll by a signed number of lines
    Offset(isize),
    /// Jump to a line
    SetPosition(usize),
}

/// Derived strip layout, recomputed on every [`Scrollbar::sync`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollbarGeometry {
    /// Whole strip
    pub strip: Rect,
    /// First track row
    pub track_top: i32,
    /// Track rows between the arrow bands and their separators
    pub track_height: i32,
    /// Thumb rows; at least 1 whenever the track has rows
    pub thumb_height: i32,
    /// First thumb row
    pub thumb_top: i32,
    /// Thumb is drawn and draggable
    pub thumb_enabled: bool,
}

impl ScrollbarGeometry {
    /// Lay the strip out for a viewport and its scroll state
    pub fn compute(
        viewport_width: i32,
        viewport_height: i32,
        bar_width: i32,
        arrow_height: i32,
        line_count: usize,
        window_lines: usize,
        scroll: usize,
    ) -> Self {
        let strip = Rect::new(viewport_width - bar_width, 0, bar_width, viewport_height);
        let track_top = arrow_height + 1;
        let track_height = viewport_height - 2 * arrow_height - 2;

        let thumb_height = if track_height > 0 {
            let visible = window_lines as i64;
            let span = (line_count as i64 + visible - 1).max(0);
            if span == 0 {
                track_height
            } else {
                (i64::from(track_height) * visible / span).clamp(1, i64::from(track_height)) as i32
            }
        } else {
            0
        };

        // travel * scroll / (line_count - 1), a full-travel ratio with one line
        let travel = (track_height - thumb_height).max(0);
        let thumb_offset = if line_count > 1 {
            let last = line_count as i64 - 1;
            i64::from(travel) * (scroll as i64).min(last) / last
        } else {
            i64::from(travel)
        };
        let thumb_top = track_top + thumb_offset as i32;

        Self {
            strip,
            track_top,
            track_height,
            thumb_height,
            thumb_top,
            thumb_enabled: track_height > 0 && line_count > 1,
        }
    }

    /// Rows the thumb can move
    pub const fn travel(&self) -> i32 {
        self.track_height - self.thumb_height
    }

    /// One past the last track row
    pub const fn track_bottom(&self) -> i32 {
        self.track_top + self.track_height
    }

    /// Thumb rectangle
    pub const fn thumb_rect(&self) -> Rect {
        Rect::new(self.strip.x, self.thumb_top, self.strip.w, self.thumb_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragSession {
    anchor_pointer_y: i32,
    anchor_thumb_y: i32,
    anchor_scroll: usize,
}

/// Scrollbar state for one scrollable surface
#[derive(Debug, Clone)]
pub struct Scrollbar {
    width: i32,
    arrow_height: i32,
    viewport: (i32, i32),
    line_count: usize,
    window_lines: usize,
    scroll: usize,
    geometry: ScrollbarGeometry,
    zone: ScrollbarZone,
    hovered: bool,
    pressed: Option<ScrollbarZone>,
    drag: Option<DragSession>,
}

impl Scrollbar {
    /// Create a scrollbar with the configured strip width and arrow size
    pub fn new(config: &ScrollbarConfig) -> Self {
        Self {
            width: config.width,
            arrow_height: config.arrow_height,
            viewport: (0, 0),
            line_count: 0,
            window_lines: 0,
            scroll: 0,
            geometry: ScrollbarGeometry::default(),
            zone: ScrollbarZone::None,
            hovered: false,
            pressed: None,
            drag: None,
        }
    }

    /// Strip width in pixels
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Current geometry
    pub fn geometry(&self) -> &ScrollbarGeometry {
        &self.geometry
    }

    /// Zone found by the last [`locate`](Self::locate)
    pub fn zone(&self) -> ScrollbarZone {
        self.zone
    }

    /// Pointer is over the strip
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// A thumb drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Recompute geometry from the owner's viewport size and scroll state
    pub fn sync(
        &mut self,
        viewport_width: i32,
        viewport_height: i32,
        line_count: usize,
        window_lines: usize,
        scroll: usize,
    ) {
        self.viewport = (viewport_width, viewport_height);
        self.line_count = line_count;
        self.window_lines = window_lines;
        self.scroll = scroll;
        self.geometry = ScrollbarGeometry::compute(
            viewport_width,
            viewport_height,
            self.width,
            self.arrow_height,
            line_count,
            window_lines,
            scroll,
        );
        if !self.geometry.thumb_enabled {
            self.drag = None;
        }
    }

    /// Classify a local point without touching any state
    pub fn classify(&self, x: i32, y: i32) -> ScrollbarZone {
        let geometry = &self.geometry;
        if !geometry.strip.contains(x, y) {
            return ScrollbarZone::None;
        }

        let (_, height) = self.viewport;
        if y < self.arrow_height {
            return ScrollbarZone::UpArrow;
        }
        if y >= height - self.arrow_height {
            return ScrollbarZone::DownArrow;
        }
        if !geometry.thumb_enabled {
            return ScrollbarZone::None;
        }

        let thumb_bottom = geometry.thumb_top + geometry.thumb_height;
        if (geometry.thumb_top..thumb_bottom).contains(&y) {
            ScrollbarZone::Thumb
        } else if (geometry.track_top..geometry.thumb_top).contains(&y) {
            ScrollbarZone::TrackAbove
        } else if (thumb_bottom..geometry.track_bottom()).contains(&y) {
            ScrollbarZone::TrackBelow
        } else {
            ScrollbarZone::None
        }
    }

    /// Record where the pointer is; returns true when the hover flag flipped
    pub fn locate(&mut self, x: i32, y: i32) -> bool {
        self.zone = self.classify(x, y);
        let hovered = self.geometry.strip.contains(x, y);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    /// Primary button pressed at a local point
    pub fn pointer_down(&mut self, x: i32, y: i32) -> ScrollAction {
        self.locate(x, y);
        self.pressed = match self.zone {
            ScrollbarZone::None => None,
            ScrollbarZone::Thumb => {
                self.drag = Some(DragSession {
                    anchor_pointer_y: y,
                    anchor_thumb_y: self.geometry.thumb_top,
                    anchor_scroll: self.scroll,
                });
                log::trace!("Scrollbar drag started at y={} (thumb {})", y, self.geometry.thumb_top);
                Some(ScrollbarZone::Thumb)
            }
            zone => Some(zone),
        };
        ScrollAction::None
    }

    /// Pointer moved to a local point
    ///
    /// Returns whether the hover flag flipped, and the scroll change a drag
    /// asks for.
    pub fn pointer_move(&mut self, x: i32, y: i32) -> (bool, ScrollAction) {
        let changed = self.locate(x, y);
        let action = self.drag.map_or(ScrollAction::None, |drag| self.drag_to(y, drag));
        (changed, action)
    }

    /// Button released at a local point
    ///
    /// Always ends a drag. A press and release on the same arrow or track
    /// zone is a click.
    pub fn pointer_up(&mut self, x: i32, y: i32) -> ScrollAction {
        let dragged = self.drag.take().is_some();
        let pressed = self.pressed.take();
        self.locate(x, y);

        if dragged || pressed != Some(self.zone) {
            return ScrollAction::None;
        }

        let page = self.window_lines as isize;
        match self.zone {
            ScrollbarZone::UpArrow => ScrollAction::Offset(-1),
            ScrollbarZone::DownArrow => ScrollAction::Offset(1),
            ScrollbarZone::TrackAbove => ScrollAction::Offset(-page),
            ScrollbarZone::TrackBelow => ScrollAction::Offset(page),
            ScrollbarZone::Thumb | ScrollbarZone::None => ScrollAction::None,
        }
    }

    fn drag_to(&self, y: i32, drag: DragSession) -> ScrollAction {
        let geometry = &self.geometry;
        let travel = geometry.travel();
        if travel <= 0 || !geometry.thumb_enabled {
            return ScrollAction::None;
        }

        let thumb_y = (drag.anchor_thumb_y + (y - drag.anchor_pointer_y))
            .clamp(geometry.track_top, geometry.track_top + travel);
        if thumb_y == drag.anchor_thumb_y {
            return ScrollAction::SetPosition(drag.anchor_scroll);
        }

        let ratio = f64::from(thumb_y - geometry.track_top) / f64::from(travel);
        let position = (ratio * self.line_count as f64).round() as usize;
        ScrollAction::SetPosition(position.min(self.line_count.saturating_sub(1)))
    }
}
