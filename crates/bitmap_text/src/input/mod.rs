//! Input events
//!
//! Host-neutral pointer and keyboard events. Hosts translate their window
//! system's events into these and hand them to widgets or the
//! [`WidgetManager`](crate::ui::WidgetManager); coordinates are screen pixels.

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Left mouse button
    #[default]
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// What happened to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Pointer moved
    Move,
    /// Button pressed
    Down,
    /// Button released
    Up,
    /// Wheel turned by this many lines; positive scrolls towards the end
    Wheel(i32),
}

/// A pointer event at a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Event kind
    pub kind: PointerKind,
    /// Screen x
    pub x: i32,
    /// Screen y
    pub y: i32,
    /// Button involved; ignored for moves and wheel turns
    pub button: MouseButton,
}

impl PointerEvent {
    /// Pointer moved to `(x, y)`
    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Move, x, y, MouseButton::Left)
    }

    /// `button` pressed at `(x, y)`
    pub const fn down(x: i32, y: i32, button: MouseButton) -> Self {
        Self::new(PointerKind::Down, x, y, button)
    }

    /// `button` released at `(x, y)`
    pub const fn up(x: i32, y: i32, button: MouseButton) -> Self {
        Self::new(PointerKind::Up, x, y, button)
    }

    /// Wheel turned by `lines` with the pointer at `(x, y)`
    pub const fn wheel(x: i32, y: i32, lines: i32) -> Self {
        Self::new(PointerKind::Wheel(lines), x, y, MouseButton::Left)
    }

    const fn new(kind: PointerKind, x: i32, y: i32, button: MouseButton) -> Self {
        Self { kind, x, y, button }
    }
}

/// Keys scrollable text reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// One line up
    Up,
    /// One line down
    Down,
    /// One window up
    PageUp,
    /// One window down
    PageDown,
    /// First line
    Home,
    /// Last line
    End,
}

/// Input event queued for a widget manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer activity
    Pointer(PointerEvent),
    /// Key press
    Key(KeyCode),
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}

impl From<KeyCode> for InputEvent {
    fn from(key: KeyCode) -> Self {
        Self::Key(key)
    }
}
