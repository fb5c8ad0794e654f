//! Parameter types for the thumbnail transform.
//!
//! These describe *what* to produce. [`thumbnail`](super::thumbnail) turns
//! them into a [`ThumbnailPlan`](super::thumbnail::ThumbnailPlan) and then
//! into pixels.

use crate::config::ThumbnailConfig;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u32) -> Self {
        // Clamped into 1..=100, so the narrowing is lossless
        Self(value.clamp(1, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(95)
    }
}

/// Bounding box and encoding settings for a captioned thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailParams {
    pub max_width: u32,
    pub max_height: u32,
    pub quality: Quality,
}

impl ThumbnailParams {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
            quality: Quality::default(),
        }
    }
}

impl Default for ThumbnailParams {
    fn default() -> Self {
        Self::new(300, 300)
    }
}

impl From<&ThumbnailConfig> for ThumbnailParams {
    fn from(config: &ThumbnailConfig) -> Self {
        Self {
            max_width: config.width,
            max_height: config.height,
            quality: Quality::new(config.quality),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_95() {
        assert_eq!(Quality::default().value(), 95);
    }

    #[test]
    fn default_params_use_300_box() {
        let params = ThumbnailParams::default();
        assert_eq!((params.max_width, params.max_height), (300, 300));
        assert_eq!(params.quality.value(), 95);
    }

    #[test]
    fn params_from_config() {
        let config = ThumbnailConfig {
            width: 640,
            height: 480,
            quality: 80,
            ..ThumbnailConfig::default()
        };
        let params = ThumbnailParams::from(&config);
        assert_eq!(params.max_width, 640);
        assert_eq!(params.max_height, 480);
        assert_eq!(params.quality.value(), 80);
    }
}
