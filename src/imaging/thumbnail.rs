//! Captioned thumbnails.
//!
//! ```text
//! ┌──────────────┐
//! │              │  source scaled into the bounding box (Lanczos3)
//! │    image     │
//! │              │
//! ├──────────────┤
//! │  600x600 (PNG) [2.9 KiB]   16px white caption strip
//! └──────────────┘
//! ```
//!
//! The geometry is computed up front by [`plan_thumbnail`]; [`make_thumbnail`]
//! executes the plan and re-encodes the canvas as a progressive JPEG. The
//! plan comes back with the bytes so callers can report it without parsing
//! the source again.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use super::calculations::{caption_origin, canvas_dimensions, fit_within};
use super::caption::{CaptionRenderer, caption_text};
use super::codec::{ImageInfo, ImagingError, decode, encode_jpeg};
use super::params::ThumbnailParams;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Everything about a thumbnail that can be decided without pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailPlan {
    /// Size of the scaled source image.
    pub scaled: (u32, u32),
    /// Size of the final canvas, caption strip included.
    pub canvas: (u32, u32),
    pub caption: String,
    pub caption_origin: (i32, i32),
}

/// An encoded thumbnail and the plan it was composed from.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub plan: ThumbnailPlan,
    /// JPEG bytes.
    pub data: Vec<u8>,
}

/// Plan a thumbnail for an image of `info`, originally `byte_len` bytes long.
pub fn plan_thumbnail(info: &ImageInfo, byte_len: usize, params: &ThumbnailParams) -> ThumbnailPlan {
    let scaled = fit_within(info.dimensions(), (params.max_width, params.max_height));
    ThumbnailPlan {
        scaled,
        canvas: canvas_dimensions(scaled),
        caption: caption_text(info, byte_len),
        caption_origin: caption_origin(scaled),
    }
}

/// Turn encoded image `bytes` into a captioned JPEG thumbnail.
pub fn make_thumbnail(
    bytes: &[u8],
    params: &ThumbnailParams,
    caption: &impl CaptionRenderer,
) -> Result<Thumbnail, ImagingError> {
    let (info, image) = decode(bytes)?;
    let plan = plan_thumbnail(&info, bytes.len(), params);
    tracing::debug!(?plan, "composing thumbnail");

    let rgb = image.to_rgb8();
    let scaled = if (rgb.width(), rgb.height()) == plan.scaled {
        rgb
    } else {
        imageops::resize(&rgb, plan.scaled.0, plan.scaled.1, FilterType::Lanczos3)
    };

    let mut canvas = RgbImage::from_pixel(plan.canvas.0, plan.canvas.1, BACKGROUND);
    imageops::replace(&mut canvas, &scaled, 0, 0);

    let (x, y) = plan.caption_origin;
    caption.draw(&mut canvas, x, y, &plan.caption);

    let data = encode_jpeg(&canvas, params.quality)?;
    Ok(Thumbnail { plan, data })
}
