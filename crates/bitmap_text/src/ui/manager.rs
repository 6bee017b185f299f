//! Widget Manager
//!
//! Owns the host's text widgets and runs their frame: queued input is
//! applied first, then every widget draws in creation order. Pointer events
//! reach every widget so drags and hover exits are seen even when the
//! pointer leaves a widget; key presses go to the focused widget only.

use std::collections::{BTreeMap, VecDeque};

use super::{TextSurface, TextWidget};
use crate::input::{InputEvent, KeyCode, PointerEvent, PointerKind};
use crate::render::{DrawBackend, RenderError};

/// Widget identifier, increasing in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(pub u64);

/// Central text widget manager
#[derive(Debug, Default)]
pub struct WidgetManager {
    widgets: BTreeMap<WidgetId, TextWidget>,
    next_id: u64,
    pending: VecDeque<InputEvent>,
    focus: Option<WidgetId>,
    frame_counter: u64,
}

impl WidgetManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a widget; later widgets draw on top
    pub fn add(&mut self, widget: impl Into<TextWidget>) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.widgets.insert(id, widget.into());
        id
    }

    /// Remove a widget
    pub fn remove(&mut self, id: WidgetId) -> Option<TextWidget> {
        if self.focus == Some(id) {
            self.focus = None;
        }
        self.widgets.remove(&id)
    }

    /// Widget by id
    pub fn get(&self, id: WidgetId) -> Option<&TextWidget> {
        self.widgets.get(&id)
    }

    /// Mutable widget by id
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut TextWidget> {
        self.widgets.get_mut(&id)
    }

    /// Number of widgets
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// True when no widgets are registered
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Widget receiving key presses
    pub fn focus(&self) -> Option<WidgetId> {
        self.focus
    }

    /// Give a widget keyboard focus
    pub fn set_focus(&mut self, id: Option<WidgetId>) {
        self.focus = id.filter(|id| self.widgets.contains_key(id));
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }

    /// Queue an event for the next frame
    pub fn queue(&mut self, event: impl Into<InputEvent>) {
        self.pending.push_back(event.into());
    }

    /// Events waiting for the next frame
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Apply every queued event; returns true when any widget wants a redraw
    pub fn dispatch(&mut self) -> bool {
        let mut redraw = false;
        while let Some(event) = self.pending.pop_front() {
            redraw |= match event {
                InputEvent::Pointer(pointer) => self.dispatch_pointer(&pointer),
                InputEvent::Key(key) => self.dispatch_key(key),
            };
        }
        redraw
    }

    /// Apply queued input, then draw every widget
    ///
    /// Returns the redraw hint from input handling.
    pub fn frame(
        &mut self,
        elapsed_ms: u32,
        backend: &mut dyn DrawBackend,
    ) -> Result<bool, RenderError> {
        let redraw = self.dispatch();
        for widget in self.widgets.values_mut() {
            widget.draw(elapsed_ms, backend)?;
        }
        self.frame_counter += 1;

        log::trace!(
            "Frame {}: {} widgets, {} ms elapsed",
            self.frame_counter,
            self.widgets.len(),
            elapsed_ms
        );
        Ok(redraw)
    }

    fn dispatch_pointer(&mut self, event: &PointerEvent) -> bool {
        if event.kind == PointerKind::Down {
            // Topmost widget under the pointer takes focus
            self.focus = self
                .widgets
                .iter()
                .rev()
                .find(|(_, widget)| widget.bounds().contains(event.x, event.y))
                .map(|(id, _)| *id);
        }

        self.widgets
            .values_mut()
            .fold(false, |redraw, widget| widget.handle_pointer(event) || redraw)
    }

    fn dispatch_key(&mut self, key: KeyCode) -> bool {
        self.focus
            .and_then(|id| self.widgets.get_mut(&id))
            .is_some_and(|widget| widget.keydown(key))
    }
}
