//! Image loading for glyph atlases
//!
//! Decodes BMP and PNG atlases into RGBA8 pixels ready for a draw backend.

use std::path::Path;

use crate::assets::AssetError;

/// Decoded RGBA8 image
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data, row-major
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            return Err(AssetError::NotFound(path_ref.display().to_string()));
        }

        log::debug!("Loading atlas image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path_ref.display(), e)))?;
        Ok(Self::from_dynamic(img))
    }

    /// Decode an image held in memory (embedded assets)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("in-memory image: {e}")))?;
        Ok(Self::from_dynamic(img))
    }

    fn from_dynamic(img: image::DynamicImage) -> Self {
        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::debug!("Decoded atlas image {}x{}", width, height);

        Self {
            data: rgba_img.into_raw(),
            width,
            height,
        }
    }

    /// Create a solid colour image (placeholder atlases and tests)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        let data = color.iter().copied().cycle().take(pixel_count * 4).collect();

        Self {
            data,
            width,
            height,
        }
    }

    /// RGBA value at `(x, y)`, if inside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y as usize) * (self.width as usize) + x as usize) * 4;
        self.data
            .get(offset..offset + 4)
            .and_then(|px| px.try_into().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color_fills_every_pixel() {
        let img = ImageData::solid_color(3, 2, [1, 2, 3, 4]);
        assert_eq!(img.data.len(), 3 * 2 * 4);
        assert_eq!(img.pixel(2, 1), Some([1, 2, 3, 4]));
        assert_eq!(img.pixel(3, 0), None);
    }

    #[test]
    fn test_png_bytes_decode() {
        let mut encoded = Vec::new();
        let source = image::RgbaImage::from_pixel(12, 7, image::Rgba([9, 8, 7, 255]));
        image::DynamicImage::ImageRgba8(source)
            .write_to(&mut std::io::Cursor::new(&mut encoded), image::ImageFormat::Png)
            .expect("encode png");

        let img = ImageData::from_bytes(&encoded).expect("decode png");
        assert_eq!((img.width, img.height), (12, 7));
        assert_eq!(img.pixel(5, 3), Some([9, 8, 7, 255]));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        assert!(matches!(
            ImageData::from_bytes(b"not an image"),
            Err(AssetError::LoadFailed(_))
        ));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        assert!(matches!(
            ImageData::from_file("definitely/not/here.bmp"),
            Err(AssetError::NotFound(_))
        ));
    }
}
