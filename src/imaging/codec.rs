//! Format sniffing, decoding and JPEG encoding on in-memory buffers.

use image::{DynamicImage, ImageFormat, ImageReader, RgbImage};
use jpeg_encoder::{ColorType, Encoder};
use serde::Serialize;
use std::io::Cursor;
use thiserror::Error;

use super::params::Quality;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("Unrecognized image data")]
    Unrecognized,
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("Failed to encode thumbnail: {0}")]
    Encode(#[source] jpeg_encoder::EncodingError),
    #[error("Thumbnail {width}x{height} exceeds the JPEG size limit")]
    TooLarge { width: u32, height: u32 },
}

/// Header-level identification of an encoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    #[serde(serialize_with = "serialize_format")]
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    /// Lowercase format name, e.g. `"png"` or `"jpeg"`.
    pub fn format_name(&self) -> &'static str {
        format_name(self.format)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

fn serialize_format<S: serde::Serializer>(format: &ImageFormat, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(format_name(*format))
}

/// Lowercase codec name for `format`.
pub fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "png",
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::Gif => "gif",
        ImageFormat::WebP => "webp",
        ImageFormat::Tiff => "tiff",
        ImageFormat::Bmp => "bmp",
        ImageFormat::Ico => "ico",
        ImageFormat::Avif => "avif",
        ImageFormat::Pnm => "ppm",
        ImageFormat::Tga => "tga",
        ImageFormat::OpenExr => "exr",
        ImageFormat::Qoi => "qoi",
        other => other.extensions_str().first().copied().unwrap_or("unknown"),
    }
}

/// Identify the container and read dimensions from the header only.
pub fn identify(bytes: &[u8]) -> Result<ImageInfo, ImagingError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ImagingError::Decode(e.into()))?;
    let format = reader.format().ok_or(ImagingError::Unrecognized)?;
    let (width, height) = reader.into_dimensions().map_err(ImagingError::Decode)?;
    Ok(ImageInfo {
        format,
        width,
        height,
    })
}

/// Lowercase name of the format `bytes` are encoded in.
pub fn get_img_ext(bytes: &[u8]) -> Result<&'static str, ImagingError> {
    identify(bytes).map(|info| info.format_name())
}

/// Fully decode `bytes`, returning the pixels with their header info.
pub fn decode(bytes: &[u8]) -> Result<(ImageInfo, DynamicImage), ImagingError> {
    let info = identify(bytes)?;
    let image =
        image::load_from_memory_with_format(bytes, info.format).map_err(ImagingError::Decode)?;
    Ok((info, image))
}

/// Encode `image` as a progressive JPEG with optimized Huffman tables.
pub fn encode_jpeg(image: &RgbImage, quality: Quality) -> Result<Vec<u8>, ImagingError> {
    let too_large = || ImagingError::TooLarge {
        width: image.width(),
        height: image.height(),
    };
    let width = u16::try_from(image.width()).map_err(|_| too_large())?;
    let height = u16::try_from(image.height()).map_err(|_| too_large())?;

    let mut buffer = Vec::new();
    let mut encoder = Encoder::new(&mut buffer, quality.value());
    encoder.set_progressive(true);
    encoder.set_optimized_huffman_tables(true);
    encoder
        .encode(image.as_raw(), width, height, ColorType::Rgb)
        .map_err(ImagingError::Encode)?;
    Ok(buffer)
}

/// Whether `jpeg` declares a progressive (SOF2) frame.
pub fn is_progressive_jpeg(jpeg: &[u8]) -> bool {
    frame_marker(jpeg) == Some(0xC2)
}

/// The SOFn marker of the frame header, found by walking the segments that
/// precede the first scan.
fn frame_marker(jpeg: &[u8]) -> Option<u8> {
    let mut rest = jpeg.strip_prefix(&[0xFF, 0xD8])?;
    loop {
        let &[0xFF, marker, hi, lo, ..] = rest else {
            return None;
        };
        match marker {
            // C4, C8 and CC share the range but are not frame headers
            0xC4 | 0xC8 | 0xCC => {}
            0xC0..=0xCF => return Some(marker),
            0xDA => return None,
            _ => {}
        }
        let len = usize::from(u16::from_be_bytes([hi, lo]));
        rest = rest.get(2 + len..)?;
    }
}
