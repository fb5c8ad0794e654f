//! Image handling on in-memory buffers.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Sniff** | `ImageReader::with_guessed_format` + header-only `into_dimensions` |
//! | **Decode** | `image::load_from_memory_with_format` |
//! | **Scale** | `imageops::resize` with `Lanczos3`, never enlarging |
//! | **Caption** | `imageproc::drawing::draw_text_mut` over an `ab_glyph` font |
//! | **Encode** | `jpeg_encoder::Encoder`: progressive, optimized Huffman tables, quality 95 by default |
//!
//! The module is split into:
//! - **Calculations**: pure dimension math (unit testable)
//! - **Parameters**: what thumbnail to produce
//! - **Codec**: sniffing, decoding, JPEG encoding
//! - **Caption**: caption text and the [`CaptionRenderer`] seam
//! - **Thumbnail**: the plan + compose + encode transform

mod calculations;
pub mod caption;
pub mod codec;
mod params;
pub mod thumbnail;

pub use calculations::{CAPTION_STRIP_HEIGHT, fit_within};
pub use caption::{CaptionFont, CaptionRenderer, caption_text};
pub use codec::{ImageInfo, ImagingError, decode, get_img_ext, identify, is_progressive_jpeg};
pub use params::{Quality, ThumbnailParams};
pub use thumbnail::{Thumbnail, ThumbnailPlan, make_thumbnail, plan_thumbnail};
