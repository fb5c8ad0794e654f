//! Pure dimension math for thumbnails.
//!
//! All functions here are pure and testable without any I/O or images.

/// Height of the white band appended below the scaled image.
pub const CAPTION_STRIP_HEIGHT: u32 = 16;

/// Scale `source` down to fit inside `bounds`, preserving aspect ratio.
///
/// Images that already fit are returned unchanged; nothing is enlarged.
/// Neither side collapses below one pixel.
///
/// # Examples
/// ```
/// # use images_upload_cli::imaging::fit_within;
/// assert_eq!(fit_within((600, 600), (300, 300)), (300, 300));
/// assert_eq!(fit_within((800, 600), (300, 300)), (300, 225));
/// assert_eq!(fit_within((100, 50), (300, 300)), (100, 50));
/// ```
pub fn fit_within(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (max_w, max_h) = bounds;

    if src_w <= max_w && src_h <= max_h {
        return source;
    }

    let scale = (max_w as f64 / src_w as f64).min(max_h as f64 / src_h as f64);
    let w = ((src_w as f64 * scale).round() as u32).clamp(1, max_w.max(1));
    let h = ((src_h as f64 * scale).round() as u32).clamp(1, max_h.max(1));
    (w, h)
}

/// Canvas size for a scaled image plus its caption strip.
pub fn canvas_dimensions(scaled: (u32, u32)) -> (u32, u32) {
    (scaled.0, scaled.1 + CAPTION_STRIP_HEIGHT)
}

/// Where the caption text starts: a fifth of the way in, at the top of the strip.
pub fn caption_origin(scaled: (u32, u32)) -> (i32, i32) {
    let x = i32::try_from(scaled.0 / 5).unwrap_or(i32::MAX);
    let y = i32::try_from(scaled.1).unwrap_or(i32::MAX);
    (x, y)
}
