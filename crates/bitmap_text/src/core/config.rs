//! # Unified Configuration
//!
//! Serializable settings for fonts, text styling and scrollbars, grouped
//! under a single [`EngineConfig`] that hosts can load from TOML or RON.
//!
//! Every struct is `#[serde(default)]`, so a config file only needs the keys
//! it wants to override.

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError, ConfigFormat};
use crate::foundation::math::Color;
use crate::text::GlyphMetrics;

/// # Font Configuration
///
/// Which glyph atlas to use and how big its cells are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Atlas bitmap name, as registered in the font registry or a file path
    pub bitmap: String,
    /// Cell width in pixels, including the spacing column
    pub cell_width: u32,
    /// Cell height in pixels, including the spacing row
    pub cell_height: u32,
    /// Extra pixels between lines
    pub leading: u32,
}

impl FontConfig {
    /// Glyph metrics described by this config
    pub fn metrics(&self) -> GlyphMetrics {
        GlyphMetrics::new(self.cell_width, self.cell_height, self.leading)
    }
}

impl Config for FontConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.bitmap.is_empty() {
            return Err(ConfigError::Invalid("font bitmap name cannot be empty".to_string()));
        }
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "font cell size must be non-zero, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }
        Ok(())
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            bitmap: "fonts/6x7.bmp".to_string(),
            cell_width: GlyphMetrics::DEFAULT.cell_width,
            cell_height: GlyphMetrics::DEFAULT.cell_height,
            leading: GlyphMetrics::DEFAULT.leading,
        }
    }
}

/// # Text Style Configuration
///
/// Effects and colours applied by a text surface. Alpha is carried in the
/// colours' `a` channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyleConfig {
    /// Font selection
    pub font: FontConfig,
    /// Typewriter delay per character in ms; 0 shows everything at once
    pub ticks_per_char: u32,
    /// Blink visible period in ms
    pub blink_on_ms: u32,
    /// Blink hidden period in ms; both periods 0 disables blinking
    pub blink_off_ms: u32,
    /// Shadow offset in pixels; `(0, 0)` disables the shadow
    pub shadow_offset: (i32, i32),
    /// Glyph colour modulation
    pub color: Color,
    /// Shadow colour modulation
    pub shadow_color: Color,
    /// Glyph drawn where the typewriter cut the text off
    pub caret: Option<char>,
    /// Outline the viewport (debug aid)
    pub draw_frame: bool,
}

impl Default for TextStyleConfig {
    fn default() -> Self {
        Self {
            font: FontConfig::default(),
            ticks_per_char: 0,
            blink_on_ms: 0,
            blink_off_ms: 0,
            shadow_offset: (0, 0),
            color: Color::WHITE,
            shadow_color: Color::BLACK,
            caret: None,
            draw_frame: false,
        }
    }
}

impl Config for TextStyleConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.font.validate()?;
        if let Some(caret) = self.caret {
            if !(' '..='~').contains(&caret) {
                return Err(ConfigError::Invalid(format!(
                    "caret must be a printable ASCII character, got {caret:?}"
                )));
            }
        }
        Ok(())
    }
}

/// # Scrollbar Configuration
///
/// Size and palette of the scrollbar strip on scrollable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarConfig {
    /// Strip width in pixels, taken from the right edge of the viewport
    pub width: i32,
    /// Height of each arrow band in pixels
    pub arrow_height: i32,
    /// Track fill
    pub track_color: Color,
    /// Thumb fill
    pub thumb_color: Color,
    /// Arrow band fill
    pub arrow_color: Color,
    /// Thumb and arrow fill while the pointer is over the strip
    pub hover_color: Color,
    /// Outline around the strip
    pub border_color: Color,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            width: 7,
            arrow_height: 7,
            track_color: Color::rgb(0x20, 0x20, 0x20),
            thumb_color: Color::rgb(0x80, 0x80, 0x80),
            arrow_color: Color::rgb(0x60, 0x60, 0x60),
            hover_color: Color::rgb(0xa0, 0xa0, 0xa0),
            border_color: Color::rgb(0x40, 0x40, 0x40),
        }
    }
}

impl Config for ScrollbarConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 {
            return Err(ConfigError::Invalid(format!(
                "scrollbar width must be positive, got {}",
                self.width
            )));
        }
        if self.arrow_height < 0 {
            return Err(ConfigError::Invalid(format!(
                "scrollbar arrow height cannot be negative, got {}",
                self.arrow_height
            )));
        }
        Ok(())
    }
}

/// # Engine Configuration
///
/// Top-level configuration hosts load at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Default text style for new surfaces
    pub text: TextStyleConfig,
    /// Scrollbar appearance
    pub scrollbar: ScrollbarConfig,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            text: TextStyleConfig::default(),
            scrollbar: ScrollbarConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the default text style
    pub fn with_text(mut self, text: TextStyleConfig) -> Self {
        self.text = text;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.text.validate()?;
        self.scrollbar.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
        assert_eq!(FontConfig::default().metrics(), GlyphMetrics::DEFAULT);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            log_level = "debug"

            [text]
            ticks_per_char = 40
            caret = "_"

            [text.font]
            leading = 2
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.text.ticks_per_char, 40);
        assert_eq!(config.text.caret, Some('_'));
        assert_eq!(config.text.font.leading, 2);
        assert_eq!(config.text.font.cell_width, 6);
        assert_eq!(config.scrollbar, ScrollbarConfig::default());
    }

    #[test]
    fn test_ron_round_trip() {
        let mut config = EngineConfig::default();
        config.text.shadow_offset = (1, 1);
        config.scrollbar.width = 9;

        let ron = config.to_string_as(ConfigFormat::Ron).expect("serializes");
        let parsed = EngineConfig::from_ron_str(&ron).expect("parses");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_zero_cell_width_rejected() {
        let result = FontConfig::from_toml_str("cell_width = 0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_ascii_caret_rejected() {
        let result = TextStyleConfig::from_toml_str("caret = \"\u{e9}\"");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_scrollbar_width_must_be_positive() {
        let result = ScrollbarConfig::from_toml_str("width = 0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
