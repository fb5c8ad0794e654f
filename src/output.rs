//! CLI output formatting.
//!
//! ```text
//! $ imgup info pic.png
//! pic.png
//!     Format: png
//!     Dimensions: 600x600
//!     Size: 2.9 KiB
//!
//! $ imgup thumbnail pic.png
//! pic.png → pic-thumb.jpg
//!     Thumbnail: 300x316 (jpeg)
//!     Caption: 600x600 (PNG) [2.9 KiB]
//!     Size: 11.2 KiB
//! ```
//!
//! Each `format_*` function is pure and returns lines; `print_*` writes them
//! to stdout.

use serde::Serialize;
use std::path::Path;

use crate::imaging::{ImageInfo, ThumbnailPlan};
use crate::size::human_size;

/// What `imgup info` reports about one file.
#[derive(Debug, Clone, Serialize)]
pub struct ImageSummary {
    #[serde(flatten)]
    pub info: ImageInfo,
    pub bytes: usize,
    pub size: String,
}

impl ImageSummary {
    pub fn new(info: ImageInfo, bytes: usize) -> Self {
        Self {
            info,
            bytes,
            size: human_size(bytes as f64),
        }
    }
}

pub fn format_info(path: &Path, summary: &ImageSummary) -> Vec<String> {
    vec![
        path.display().to_string(),
        format!("    Format: {}", summary.info.format_name()),
        format!(
            "    Dimensions: {}x{}",
            summary.info.width, summary.info.height
        ),
        format!("    Size: {}", summary.size),
    ]
}

pub fn print_info(path: &Path, summary: &ImageSummary) {
    for line in format_info(path, summary) {
        println!("{}", line);
    }
}

pub fn format_thumbnail(
    source: &Path,
    output: &Path,
    plan: &ThumbnailPlan,
    encoded_len: usize,
) -> Vec<String> {
    vec![
        format!("{} → {}", source.display(), output.display()),
        format!("    Thumbnail: {}x{} (jpeg)", plan.canvas.0, plan.canvas.1),
        format!("    Caption: {}", plan.caption),
        format!("    Size: {}", human_size(encoded_len as f64)),
    ]
}

pub fn print_thumbnail(source: &Path, output: &Path, plan: &ThumbnailPlan, encoded_len: usize) {
    for line in format_thumbnail(source, output, plan, encoded_len) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::{ThumbnailParams, plan_thumbnail};
    use image::ImageFormat;

    fn png_info() -> ImageInfo {
        ImageInfo {
            format: ImageFormat::Png,
            width: 600,
            height: 600,
        }
    }

    #[test]
    fn info_lines() {
        let summary = ImageSummary::new(png_info(), 3000);
        let lines = format_info(Path::new("pic.png"), &summary);
        assert_eq!(
            lines,
            vec![
                "pic.png",
                "    Format: png",
                "    Dimensions: 600x600",
                "    Size: 2.9 KiB",
            ]
        );
    }

    #[test]
    fn summary_json_is_flat() {
        let summary = ImageSummary::new(png_info(), 1024);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["format"], "png");
        assert_eq!(json["width"], 600);
        assert_eq!(json["bytes"], 1024);
        assert_eq!(json["size"], "1.0 KiB");
    }

    #[test]
    fn thumbnail_lines() {
        let plan = plan_thumbnail(&png_info(), 3000, &ThumbnailParams::default());
        let lines = format_thumbnail(
            Path::new("pic.png"),
            Path::new("pic-thumb.jpg"),
            &plan,
            2048,
        );
        assert_eq!(lines[0], "pic.png → pic-thumb.jpg");
        assert_eq!(lines[1], "    Thumbnail: 300x316 (jpeg)");
        assert_eq!(lines[2], "    Caption: 600x600 (PNG) [2.9 KiB]");
        assert_eq!(lines[3], "    Size: 2.0 KiB");
    }
}
