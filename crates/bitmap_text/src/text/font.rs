//! Fixed-cell bitmap fonts
//!
//! An atlas is a single row of equally sized cells. Cell 0 is the space
//! character and every following cell is the next character code, so the
//! stock 6x7 atlas covers `' '..='`'` (65 glyphs): punctuation, digits and
//! uppercase letters. Lowercase input is folded to uppercase before lookup.

use serde::{Deserialize, Serialize};

use crate::assets::AssetError;
use crate::foundation::math::Rect;
use crate::render::AtlasHandle;

/// First character code present in an atlas
pub const FIRST_GLYPH: char = ' ';

/// Cell size and line spacing of a fixed-width font
///
/// Cells include one spare column on the right and one spare row at the
/// bottom that separate neighbouring characters; descenders may use the
/// bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlyphMetrics {
    /// Cell width in pixels
    pub cell_width: u32,
    /// Cell height in pixels
    pub cell_height: u32,
    /// Extra pixels between lines
    pub leading: u32,
}

impl GlyphMetrics {
    /// The stock 6x7 font with no leading
    pub const DEFAULT: Self = Self::new(6, 7, 0);

    /// Create metrics
    pub const fn new(cell_width: u32, cell_height: u32, leading: u32) -> Self {
        Self {
            cell_width,
            cell_height,
            leading,
        }
    }

    /// Vertical distance between the tops of consecutive lines
    pub const fn line_height(&self) -> u32 {
        self.cell_height + self.leading
    }
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Atlas column for `ch`, given how many cells the atlas holds
///
/// Codes below space or past the last cell map to column 0, the blank glyph.
pub fn glyph_column(ch: char, glyph_count: u32) -> u32 {
    let code = u32::from(ch.to_ascii_uppercase());
    match code.checked_sub(u32::from(FIRST_GLYPH)) {
        Some(column) if column < glyph_count => column,
        _ => 0,
    }
}

/// A glyph atlas uploaded to a draw backend, plus its metrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapFont {
    name: String,
    atlas: AtlasHandle,
    atlas_size: (u32, u32),
    metrics: GlyphMetrics,
    glyph_count: u32,
}

impl BitmapFont {
    /// Describe an uploaded atlas
    ///
    /// Fails when the cells are zero sized or the atlas can't hold a single
    /// cell.
    pub fn new(
        name: impl Into<String>,
        atlas: AtlasHandle,
        atlas_size: (u32, u32),
        metrics: GlyphMetrics,
    ) -> Result<Self, AssetError> {
        let name = name.into();
        if metrics.cell_width == 0 || metrics.cell_height == 0 {
            return Err(AssetError::InvalidData(format!(
                "{name}: cell size {}x{} is empty",
                metrics.cell_width, metrics.cell_height
            )));
        }

        let glyph_count = atlas_size.0 / metrics.cell_width;
        if glyph_count == 0 || atlas_size.1 < metrics.cell_height {
            return Err(AssetError::InvalidData(format!(
                "{name}: atlas {}x{} is smaller than one {}x{} cell",
                atlas_size.0, atlas_size.1, metrics.cell_width, metrics.cell_height
            )));
        }

        Ok(Self {
            name,
            atlas,
            atlas_size,
            metrics,
            glyph_count,
        })
    }

    /// Registry name of the atlas
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backend handle for blits
    pub fn atlas(&self) -> AtlasHandle {
        self.atlas
    }

    /// Atlas image size in pixels
    pub fn atlas_size(&self) -> (u32, u32) {
        self.atlas_size
    }

    /// Cell metrics
    pub fn metrics(&self) -> GlyphMetrics {
        self.metrics
    }

    /// Number of cells in the atlas
    pub fn glyph_count(&self) -> u32 {
        self.glyph_count
    }

    /// Same atlas with different cell metrics
    pub fn with_metrics(&self, metrics: GlyphMetrics) -> Result<Self, AssetError> {
        Self::new(self.name.clone(), self.atlas, self.atlas_size, metrics)
    }

    /// Atlas column for a character
    pub fn column(&self, ch: char) -> u32 {
        glyph_column(ch, self.glyph_count)
    }

    /// Source rectangle of an atlas column
    pub fn source_rect(&self, column: u32) -> Rect {
        let column = if column < self.glyph_count { column } else { 0 };
        Rect::new(
            (column * self.metrics.cell_width) as i32,
            0,
            self.metrics.cell_width as i32,
            self.metrics.cell_height as i32,
        )
    }

    /// Source rectangle for a character
    pub fn glyph_rect(&self, ch: char) -> Rect {
        self.source_rect(self.column(ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock_font() -> BitmapFont {
        BitmapFont::new("stock", AtlasHandle(0), (65 * 6, 7), GlyphMetrics::DEFAULT)
            .expect("valid font")
    }

    #[test]
    fn test_lowercase_folds_to_uppercase() {
        assert_eq!(glyph_column('a', 65), glyph_column('A', 65));
        assert_eq!(glyph_column('z', 65), u32::from('Z') - 32);
    }

    #[test]
    fn test_out_of_range_codes_are_blank() {
        assert_eq!(glyph_column('\t', 65), 0);
        assert_eq!(glyph_column('\u{7f}', 65), 0);
        assert_eq!(glyph_column('{', 65), 0);
        assert_eq!(glyph_column('\u{e9}', 65), 0);
        assert_eq!(glyph_column('`', 65), 64);
    }

    #[test]
    fn test_source_rect_steps_by_cell_width() {
        let font = stock_font();
        assert_eq!(font.glyph_count(), 65);
        assert_eq!(font.glyph_rect(' '), Rect::new(0, 0, 6, 7));
        assert_eq!(font.glyph_rect('!'), Rect::new(6, 0, 6, 7));
        assert_eq!(font.glyph_rect('a'), Rect::new(33 * 6, 0, 6, 7));
        assert_eq!(font.source_rect(500), Rect::new(0, 0, 6, 7));
    }

    #[test]
    fn test_zero_cells_rejected() {
        let result = BitmapFont::new("bad", AtlasHandle(0), (60, 7), GlyphMetrics::new(0, 7, 0));
        assert!(matches!(result, Err(AssetError::InvalidData(_))));

        let result = BitmapFont::new("tiny", AtlasHandle(0), (5, 7), GlyphMetrics::DEFAULT);
        assert!(matches!(result, Err(AssetError::InvalidData(_))));
    }

    #[test]
    fn test_with_metrics_keeps_atlas() {
        let font = stock_font();
        let wide = font.with_metrics(GlyphMetrics::new(13, 7, 1)).expect("valid");
        assert_eq!(wide.atlas(), font.atlas());
        assert_eq!(wide.glyph_count(), 30);
        assert_eq!(wide.metrics().line_height(), 8);
    }
}
