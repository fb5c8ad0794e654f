//! Shared test utilities: synthetic encoded images and a caption renderer
//! that records what it was asked to draw.

use image::{ImageEncoder, RgbImage, RgbaImage};
use std::sync::Mutex;

use crate::imaging::CaptionRenderer;

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// A `width`×`height` RGB PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = gradient(width, height);
    let mut buf = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

/// A `width`×`height` RGBA PNG with a translucent left half.
pub fn rgba_png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        let alpha = if x < width / 2 { 64 } else { 255 };
        image::Rgba([200, 30, 30, alpha])
    });
    let mut buf = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgba8)
        .unwrap();
    buf
}

/// A `width`×`height` baseline JPEG.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = gradient(width, height);
    let mut buf = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

/// Caption renderer that draws nothing and remembers every call.
#[derive(Debug, Default)]
pub struct RecordingCaption {
    calls: Mutex<Vec<(i32, i32, String)>>,
}

impl RecordingCaption {
    pub fn calls(&self) -> Vec<(i32, i32, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CaptionRenderer for RecordingCaption {
    fn draw(&self, _canvas: &mut RgbImage, x: i32, y: i32, text: &str) {
        self.calls.lock().unwrap().push((x, y, text.to_string()));
    }
}
