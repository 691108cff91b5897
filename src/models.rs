/// A 2D point with subpixel precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2f {
    pub x: f32,
    pub y: f32,
}

impl Point2f {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point2f) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned box in the source image, half-open on the bottom-right
/// (width = x2 - x1, height = y2 - y1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }

    pub fn area(&self) -> f32 {
        self.width() as f32 * self.height() as f32
    }

    /// Area of the intersection with another box, 0.0 if disjoint.
    pub fn intersection_area(&self, other: &BoundingBox) -> f32 {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2);
        let y2 = self.y2.min(other.y2);
        if x2 <= x1 || y2 <= y1 {
            return 0.0;
        }
        (x2 - x1) as f32 * (y2 - y1) as f32
    }
}

/// Minimum-area rotated rectangle around a contour.
#[derive(Debug, Clone, Copy)]
pub struct RotatedRect {
    pub center: Point2f,
    pub width: f32,
    pub height: f32,
    /// Rotation of the width axis, in degrees.
    pub angle_degrees: f32,
}

impl RotatedRect {
    /// Side ratio, always >= 1 (long side over short side).
    /// None when the rectangle is degenerate (zero side).
    pub fn ratio(&self) -> Option<f32> {
        let long = self.width.max(self.height);
        let short = self.width.min(self.height);
        if short <= 0.0 {
            return None;
        }
        Some(long / short)
    }

    /// The four corner points, in no particular order.
    pub fn corners(&self) -> [Point2f; 4] {
        let rad = self.angle_degrees.to_radians();
        let (sin, cos) = rad.sin_cos();
        let w2 = self.width / 2.0;
        let h2 = self.height / 2.0;
        [(-w2, -h2), (w2, -h2), (w2, h2), (-w2, h2)].map(|(x, y)| {
            Point2f::new(
                self.center.x + x * cos - y * sin,
                self.center.y + x * sin + y * cos,
            )
        })
    }
}

/// A quadrilateral with corners in canonical order:
/// top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy)]
pub struct Quad(pub [Point2f; 4]);

impl Quad {
    /// Orders four corner points canonically. The result depends only on the
    /// coordinates, not on the order the points are given in: top-left
    /// minimizes x + y, bottom-right maximizes it, top-right minimizes
    /// y - x, bottom-left maximizes it.
    pub fn from_unordered(points: [Point2f; 4]) -> Self {
        let sum = |p: &Point2f| p.x + p.y;
        let diff = |p: &Point2f| p.y - p.x;

        let pick = |key: &dyn Fn(&Point2f) -> f32, want_max: bool| -> Point2f {
            let mut best = points[0];
            for p in &points[1..] {
                let better = if want_max {
                    key(p) > key(&best)
                } else {
                    key(p) < key(&best)
                };
                if better {
                    best = *p;
                }
            }
            best
        };

        let tl = pick(&sum, false);
        let br = pick(&sum, true);
        let tr = pick(&diff, false);
        let bl = pick(&diff, true);
        Quad([tl, tr, br, bl])
    }

    pub fn top_left(&self) -> Point2f {
        self.0[0]
    }

    pub fn top_right(&self) -> Point2f {
        self.0[1]
    }

    pub fn bottom_right(&self) -> Point2f {
        self.0[2]
    }

    pub fn bottom_left(&self) -> Point2f {
        self.0[3]
    }
}

/// One detected note: the rectified (or cropped) pixels plus the region's
/// top-left corner in the source image, used for deterministic numbering.
pub struct DetectedNote {
    pub image: image::RgbImage,
    pub anchor: (u32, u32),
}
