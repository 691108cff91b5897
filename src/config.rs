use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Inclusive band for the rotated rectangle's side ratio (long / short).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AspectRatioBand {
    pub min: f32,
    pub max: f32,
}

impl AspectRatioBand {
    pub fn contains(&self, ratio: f32) -> bool {
        ratio >= self.min && ratio <= self.max
    }
}

/// A named HSV range. Bounds use the half-degree hue scale (0..=179) with
/// saturation and value in 0..=255, matching common post-it reference values.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorRange {
    pub name: String,
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

/// Static pipeline parameters, loaded once at startup and never mutated.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Minimum contour area; a contour with exactly this area is kept.
    pub min_area: f32,

    /// Side-ratio band for rotated rectangles; None disables the check.
    pub aspect_ratio: Option<AspectRatioBand>,

    /// Axis-aligned boxes strictly narrower than this are dropped.
    pub min_box_width: u32,
    /// Axis-aligned boxes strictly shorter than this are dropped.
    pub min_box_height: u32,

    /// Color table for the color-range segmenter; masks are unioned, so
    /// entry order does not matter.
    pub colors: Vec<ColorRange>,

    /// Saturation floor for the saturation segmenter (inclusive).
    pub saturation_threshold: u8,

    /// Gaussian sigma applied before edge detection.
    pub blur_sigma: f32,
    pub canny_low: f32,
    pub canny_high: f32,

    /// Side of the square structuring element for mask cleaning.
    pub kernel_size: u32,

    /// Boxes overlapping a kept box by strictly more than this fraction of
    /// their own area are suppressed.
    pub nms_overlap: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_area: 500.0,
            aspect_ratio: Some(AspectRatioBand { min: 0.6, max: 1.8 }),
            min_box_width: 20,
            min_box_height: 20,
            colors: default_colors(),
            saturation_threshold: 100,
            blur_sigma: 1.5,
            canny_low: 50.0,
            canny_high: 100.0,
            kernel_size: 5,
            nms_overlap: 0.3,
        }
    }
}

impl PipelineConfig {
    /// Load a config from a TOML file. Fields not present in the file keep
    /// their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }
}

/// Reference HSV ranges for typical post-it colors.
fn default_colors() -> Vec<ColorRange> {
    [
        ("orange", [10, 100, 150], [30, 180, 255]),
        ("blue", [88, 117, 150], [108, 177, 210]),
        ("green", [64, 128, 112], [84, 188, 172]),
        ("yellow", [14, 200, 180], [34, 255, 255]),
        ("pink", [140, 50, 50], [170, 255, 255]),
    ]
    .into_iter()
    .map(|(name, lower, upper)| ColorRange {
        name: name.to_string(),
        lower,
        upper,
    })
    .collect()
}
