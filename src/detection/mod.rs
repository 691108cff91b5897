pub mod contours;
pub mod morphology;
pub mod nms;
pub mod rectify;
pub mod segment;
pub mod shape;

use image::RgbImage;

use crate::config::PipelineConfig;
use crate::events::{Event, EventSink};
use crate::models::{DetectedNote, Quad};
use segment::{MaskKind, Segmenter};

/// Which segmentation strategy to run. Exactly one is active per run; the
/// downstream stages only see a binary image either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmenterKind {
    ColorRange,
    Saturation,
    Edges,
}

/// Whether surviving regions are perspective-rectified or sliced out as
/// axis-aligned crops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Rectify,
    Crop,
}

/// The detection pipeline: segmentation, mask cleaning, contour extraction,
/// shape filtering, rectification or cropping, and optional overlap
/// suppression. Strictly linear per image, no retries.
pub struct NoteDetector {
    config: PipelineConfig,
    segmenter: SegmenterKind,
    mode: OutputMode,
    dedup: bool,
}

impl NoteDetector {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            segmenter: SegmenterKind::ColorRange,
            mode: OutputMode::Rectify,
            dedup: false,
        }
    }

    pub fn with_segmenter(mut self, kind: SegmenterKind) -> Self {
        self.segmenter = kind;
        self
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable the overlap-suppression stage. Only meaningful in crop mode,
    /// where candidates are axis-aligned boxes that may overlap.
    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    fn build_segmenter(&self) -> Box<dyn Segmenter> {
        match self.segmenter {
            SegmenterKind::ColorRange => Box::new(segment::ColorRangeSegmenter {
                ranges: self.config.colors.clone(),
            }),
            SegmenterKind::Saturation => Box::new(segment::SaturationSegmenter {
                threshold: self.config.saturation_threshold,
            }),
            SegmenterKind::Edges => Box::new(segment::EdgeSegmenter {
                blur_sigma: self.config.blur_sigma,
                low_threshold: self.config.canny_low,
                high_threshold: self.config.canny_high,
            }),
        }
    }

    /// Run the pipeline on one source image. Returns the detected notes in
    /// top-to-bottom, left-to-right order of their source position.
    pub fn detect(&self, image: &RgbImage, sink: &dyn EventSink) -> Vec<DetectedNote> {
        sink.emit(&Event::Loaded {
            width: image.width(),
            height: image.height(),
        });

        let segmenter = self.build_segmenter();
        let mask = segmenter.segment(image);
        let foreground = mask.pixels().filter(|p| p.0[0] > 0).count() as u64;
        sink.emit(&Event::Segmented {
            strategy: segmenter.name(),
            foreground,
        });

        // Edge maps stay as-is; opening would erase the thin fragments the
        // contour tracer needs.
        let mask = if segmenter.mask_kind() == MaskKind::Filled {
            let cleaned = morphology::clean_mask(&mask, self.config.kernel_size);
            sink.emit(&Event::Cleaned);
            cleaned
        } else {
            mask
        };

        let all_contours = contours::find_outer_contours(&mask);
        sink.emit(&Event::ContoursFound {
            count: all_contours.len(),
        });

        let mut notes = match self.mode {
            OutputMode::Rectify => self.rectify_contours(image, &all_contours, sink),
            OutputMode::Crop => self.crop_contours(image, &all_contours, sink),
        };

        notes.sort_by_key(|note| (note.anchor.1, note.anchor.0));
        notes
    }

    fn rectify_contours(
        &self,
        image: &RgbImage,
        all_contours: &[Vec<imageproc::point::Point<i32>>],
        sink: &dyn EventSink,
    ) -> Vec<DetectedNote> {
        let mut notes = Vec::new();
        for contour in all_contours {
            if !shape::area_passes(contour, self.config.min_area) {
                continue;
            }
            let rect = shape::min_area_rect(contour);
            if !shape::rect_passes(&rect, self.config.aspect_ratio) {
                continue;
            }
            let quad = Quad::from_unordered(rect.corners());
            // A failed projection is a non-candidate, not an error.
            if let Some(rectified) = rectify::rectify_quad(image, &quad) {
                let tl = quad.top_left();
                notes.push(DetectedNote {
                    image: rectified,
                    anchor: (tl.x.max(0.0).round() as u32, tl.y.max(0.0).round() as u32),
                });
            }
        }
        sink.emit(&Event::RegionsFiltered {
            kept: notes.len(),
            total: all_contours.len(),
        });
        notes
    }

    fn crop_contours(
        &self,
        image: &RgbImage,
        all_contours: &[Vec<imageproc::point::Point<i32>>],
        sink: &dyn EventSink,
    ) -> Vec<DetectedNote> {
        let boxes: Vec<_> = all_contours
            .iter()
            .filter(|contour| shape::area_passes(contour, self.config.min_area))
            .map(|contour| shape::bounding_box(contour))
            .filter(|bbox| {
                shape::box_passes(bbox, self.config.min_box_width, self.config.min_box_height)
            })
            .collect();
        sink.emit(&Event::RegionsFiltered {
            kept: boxes.len(),
            total: all_contours.len(),
        });

        let boxes = if self.dedup {
            let total = boxes.len();
            let kept = nms::suppress(&boxes, self.config.nms_overlap);
            sink.emit(&Event::Deduplicated {
                kept: kept.len(),
                total,
            });
            kept
        } else {
            boxes
        };

        boxes
            .into_iter()
            .map(|bbox| DetectedNote {
                image: rectify::crop_box(image, &bbox),
                anchor: (bbox.x1, bbox.y1),
            })
            .collect()
    }
}
