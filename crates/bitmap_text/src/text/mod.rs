//! Bitmap text
//!
//! Fonts, layout and the per-surface effects (typewriter reveal and blink)
//! that [`TextPresenter`] combines into draw calls.

pub mod blink;
pub mod font;
pub mod layout;
pub mod presenter;
pub mod reveal;

pub use blink::Blink;
pub use font::{glyph_column, BitmapFont, GlyphMetrics, FIRST_GLYPH};
pub use layout::{chars_per_line, window_lines, wrap_lines, TextLayout};
pub use presenter::TextPresenter;
pub use reveal::{RevealCap, Typewriter};
