//! # Bitmap Text
//!
//! Fixed-cell bitmap font text for games and tools: word-wrapping layout,
//! a frame-driven presenter with typewriter reveal, blinking and drop
//! shadows, and scrollable text with a mouse-driven scrollbar.
//!
//! ## Features
//!
//! - **Layout**: greedy word wrap with one-word lookahead, recomputed only
//!   when the message or viewport size changes
//! - **Effects**: typewriter reveal with caret, on/off blink, drop shadow
//! - **Scrolling**: clamped scroll position, scrollbar hit-testing, thumb
//!   drag, arrow and page clicks, wheel and keyboard
//! - **Backend-agnostic**: everything draws through [`render::DrawBackend`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitmap_text::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     bitmap_text::foundation::logging::init();
//!
//!     let config = EngineConfig::default();
//!     let mut backend = CommandRecorder::new();
//!     let mut fonts = FontRegistry::new().with_search_dir("assets");
//!     let font = fonts.load(&config.text.font.bitmap, config.text.font.metrics(), &mut backend)?;
//!
//!     let mut text = TextPresenter::with_style(
//!         font,
//!         Rect::new(8, 8, 160, 70),
//!         "HELLO, WORLD",
//!         &config.text,
//!     );
//!     text.draw(16, &mut backend)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Shared configuration
pub mod config;
pub mod core;

pub mod foundation;
pub mod assets;
pub mod render;
pub mod input;
pub mod text;
pub mod ui;

pub use crate::core::EngineConfig;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, FontRegistry, ImageData},
        core::{Config, ConfigError, EngineConfig, ScrollbarConfig, TextStyleConfig},
        foundation::{
            math::{Color, Rect},
            time::FrameClock,
        },
        input::{InputEvent, KeyCode, MouseButton, PointerEvent, PointerKind},
        render::{CommandRecorder, DrawBackend, DrawCommand, RenderError},
        text::{BitmapFont, GlyphMetrics, TextLayout, TextPresenter},
        ui::{ScrollableText, TextBox, TextSurface, TextWidget, WidgetId, WidgetManager},
    };
}
