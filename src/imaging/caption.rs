//! Caption text and the renderers that draw it.
//!
//! The thumbnail transform only needs something that can put a line of text
//! onto an RGB canvas: [`CaptionRenderer`]. [`CaptionFont`] is the real one,
//! rasterizing a TrueType/OpenType font with `ab_glyph` through `imageproc`.
//! Locating the font file is [`font`](crate::font)'s job.

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use std::path::Path;

use super::codec::ImageInfo;
use crate::config::ConfigError;
use crate::size::human_size;

/// Caption ink.
pub const CAPTION_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Draws a single line of caption text onto a canvas.
pub trait CaptionRenderer {
    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str);
}

/// `"{width}x{height} ({FORMAT}) [{size}]"` for the original image.
pub fn caption_text(info: &ImageInfo, byte_len: usize) -> String {
    format!(
        "{}x{} ({}) [{}]",
        info.width,
        info.height,
        info.format_name().to_uppercase(),
        human_size(byte_len as f64)
    )
}

/// A loaded font at a fixed pixel size.
pub struct CaptionFont {
    font: FontVec,
    scale: PxScale,
}

impl CaptionFont {
    /// Parse font data. `source` only labels the error.
    pub fn from_bytes(data: Vec<u8>, size: f32, source: &Path) -> Result<Self, ConfigError> {
        let font = FontVec::try_from_vec(data).map_err(|e| ConfigError::InvalidFont {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            font,
            scale: PxScale::from(size),
        })
    }

    /// Read and parse a font file.
    pub fn load(path: &Path, size: f32) -> Result<Self, ConfigError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data, size, path)
    }

    pub fn size(&self) -> f32 {
        self.scale.y
    }
}

impl std::fmt::Debug for CaptionFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptionFont")
            .field("size", &self.scale.y)
            .finish_non_exhaustive()
    }
}

impl CaptionRenderer for CaptionFont {
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str) {
        imageproc::drawing::draw_text_mut(canvas, CAPTION_COLOR, x, y, self.scale, &self.font, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontResolver, SystemFontResolver, load_caption_font};
    use image::ImageFormat;

    fn info(format: ImageFormat, width: u32, height: u32) -> ImageInfo {
        ImageInfo {
            format,
            width,
            height,
        }
    }

    #[test]
    fn caption_text_layout() {
        let text = caption_text(&info(ImageFormat::Png, 600, 600), 3000);
        assert_eq!(text, "600x600 (PNG) [2.9 KiB]");
    }

    #[test]
    fn caption_text_jpeg() {
        let text = caption_text(&info(ImageFormat::Jpeg, 1920, 1080), 512);
        assert_eq!(text, "1920x1080 (JPEG) [512.0 B]");
    }

    #[test]
    fn invalid_font_bytes_are_config_error() {
        let result = CaptionFont::from_bytes(b"not a font".to_vec(), 14.0, Path::new("bogus.ttf"));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidFont { path, .. }) if path == Path::new("bogus.ttf")
        ));
    }

    #[test]
    fn missing_font_file_is_io_error() {
        let result = CaptionFont::load(Path::new("/nonexistent/font.ttf"), 14.0);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn system_font_draws_dark_pixels() {
        let Ok(font) = load_caption_font(&SystemFontResolver::new(), None, 14.0) else {
            eprintln!("skipping: no system font available");
            return;
        };
        assert_eq!(font.size(), 14.0);

        let mut canvas = RgbImage::from_pixel(200, 16, Rgb([255, 255, 255]));
        font.draw(&mut canvas, 4, 0, "600x600 (PNG)");
        assert!(canvas.pixels().any(|p| p.0[0] < 128));
    }

    #[test]
    fn system_resolver_unknown_name_fails() {
        let resolver = SystemFontResolver::new();
        assert!(resolver.resolve("no-such-font-0f3a.ttf").is_err());
    }
}
