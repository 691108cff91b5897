use image::{GrayImage, Luma, RgbImage};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

use crate::config::ColorRange;

/// What kind of binary image a segmenter produces. Edge maps are left alone
/// by the mask cleaner; filled masks get opened and closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    Filled,
    Edges,
}

/// Turns the source image into a binary image from which closed regions can
/// be extracted. Strategies are freely substitutable; exactly one is active
/// per run.
pub trait Segmenter {
    fn segment(&self, image: &RgbImage) -> GrayImage;
    fn mask_kind(&self) -> MaskKind;
    fn name(&self) -> &'static str;
}

/// Marks pixels falling inside any of a set of named HSV ranges.
pub struct ColorRangeSegmenter {
    pub ranges: Vec<ColorRange>,
}

impl Segmenter for ColorRangeSegmenter {
    fn segment(&self, image: &RgbImage) -> GrayImage {
        let (width, height) = image.dimensions();
        let mut mask = GrayImage::new(width, height);
        for (x, y, pixel) in image.enumerate_pixels() {
            let hsv = rgb_to_hsv(pixel.0[0], pixel.0[1], pixel.0[2]);
            // Union over all ranges; entry order cannot change the result.
            let hit = self
                .ranges
                .iter()
                .any(|range| in_range(hsv, range.lower, range.upper));
            if hit {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
        mask
    }

    fn mask_kind(&self) -> MaskKind {
        MaskKind::Filled
    }

    fn name(&self) -> &'static str {
        "color-range"
    }
}

/// Marks pixels whose saturation reaches a fixed floor. Works when the notes
/// are the only strongly colored objects in the scene.
pub struct SaturationSegmenter {
    pub threshold: u8,
}

impl Segmenter for SaturationSegmenter {
    fn segment(&self, image: &RgbImage) -> GrayImage {
        let (width, height) = image.dimensions();
        let mut mask = GrayImage::new(width, height);
        for (x, y, pixel) in image.enumerate_pixels() {
            let (_, s, _) = rgb_to_hsv(pixel.0[0], pixel.0[1], pixel.0[2]);
            if s >= self.threshold {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
        mask
    }

    fn mask_kind(&self) -> MaskKind {
        MaskKind::Filled
    }

    fn name(&self) -> &'static str {
        "saturation"
    }
}

/// Canny edge map over a blurred grayscale conversion. Produces edge
/// fragments rather than filled blobs; contour extraction closes shapes
/// over them.
pub struct EdgeSegmenter {
    pub blur_sigma: f32,
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl Segmenter for EdgeSegmenter {
    fn segment(&self, image: &RgbImage) -> GrayImage {
        let gray = image::imageops::grayscale(image);
        let blurred = gaussian_blur_f32(&gray, self.blur_sigma);
        canny(&blurred, self.low_threshold, self.high_threshold)
    }

    fn mask_kind(&self) -> MaskKind {
        MaskKind::Edges
    }

    fn name(&self) -> &'static str {
        "edges"
    }
}

fn in_range(hsv: (u8, u8, u8), lower: [u8; 3], upper: [u8; 3]) -> bool {
    let (h, s, v) = hsv;
    h >= lower[0] && h <= upper[0]
        && s >= lower[1] && s <= upper[1]
        && v >= lower[2] && v <= upper[2]
}

/// RGB to HSV on the half-degree scale: hue 0..=179, saturation and value
/// 0..=255.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let r = r as f32;
    let g = g as f32;
    let b = b as f32;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { delta / max * 255.0 } else { 0.0 };
    let h = if delta > 0.0 {
        let degrees = if max == r {
            60.0 * (g - b) / delta
        } else if max == g {
            120.0 + 60.0 * (b - r) / delta
        } else {
            240.0 + 60.0 * (r - g) / delta
        };
        let degrees = if degrees < 0.0 { degrees + 360.0 } else { degrees };
        degrees / 2.0
    } else {
        0.0
    };

    (h.round() as u8, s.round() as u8, v.round() as u8)
}
