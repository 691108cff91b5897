use imageproc::geometry::convex_hull;
use imageproc::point::Point;

use crate::config::AspectRatioBand;
use crate::models::{BoundingBox, Point2f, RotatedRect};

/// Contour area by the shoelace formula over the border polygon.
pub fn contour_area(points: &[Point<i32>]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0i64;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        twice_area += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
    }
    twice_area.abs() as f32 / 2.0
}

/// A contour survives the area filter when its area reaches the floor;
/// exactly `min_area` passes.
pub fn area_passes(points: &[Point<i32>], min_area: f32) -> bool {
    contour_area(points) >= min_area
}

/// A rotated rectangle survives when it is non-degenerate and its side
/// ratio falls inside the (inclusive) band. No band means no ratio check.
pub fn rect_passes(rect: &RotatedRect, band: Option<AspectRatioBand>) -> bool {
    match rect.ratio() {
        None => false,
        Some(ratio) => band.is_none_or(|b| b.contains(ratio)),
    }
}

/// Boxes strictly below either minimum are rejected.
pub fn box_passes(bbox: &BoundingBox, min_width: u32, min_height: u32) -> bool {
    bbox.width() >= min_width && bbox.height() >= min_height
}

/// Axis-aligned bounding box of a contour, half-open on the bottom-right.
pub fn bounding_box(points: &[Point<i32>]) -> BoundingBox {
    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    BoundingBox {
        x1: min_x.max(0) as u32,
        y1: min_y.max(0) as u32,
        x2: (max_x + 1).max(0) as u32,
        y2: (max_y + 1).max(0) as u32,
    }
}

/// Minimum-area rotated rectangle enclosing a contour: rotating calipers
/// over the convex hull. One hull edge is always flush with the optimal
/// rectangle, so it suffices to test each edge direction.
pub fn min_area_rect(points: &[Point<i32>]) -> RotatedRect {
    let hull = convex_hull(points.to_vec());
    if hull.len() < 3 {
        return degenerate_rect(points);
    }

    let mut best_area = f32::MAX;
    let mut best = degenerate_rect(points);

    for i in 0..hull.len() {
        let a = hull[i];
        let b = hull[(i + 1) % hull.len()];
        let ex = (b.x - a.x) as f32;
        let ey = (b.y - a.y) as f32;
        let len = (ex * ex + ey * ey).sqrt();
        if len < f32::EPSILON {
            continue;
        }
        let (nx, ny) = (ex / len, ey / len);
        // Perpendicular to the edge direction.
        let (px, py) = (-ny, nx);

        let mut min_n = f32::MAX;
        let mut max_n = f32::MIN;
        let mut min_p = f32::MAX;
        let mut max_p = f32::MIN;
        for point in &hull {
            let dx = (point.x - a.x) as f32;
            let dy = (point.y - a.y) as f32;
            let along = nx * dx + ny * dy;
            let across = px * dx + py * dy;
            min_n = min_n.min(along);
            max_n = max_n.max(along);
            min_p = min_p.min(across);
            max_p = max_p.max(across);
        }

        let width = max_n - min_n;
        let height = max_p - min_p;
        let area = width * height;
        if area < best_area {
            best_area = area;
            let center_n = (min_n + max_n) / 2.0;
            let center_p = (min_p + max_p) / 2.0;
            best = RotatedRect {
                center: Point2f::new(
                    a.x as f32 + center_n * nx + center_p * px,
                    a.y as f32 + center_n * ny + center_p * py,
                ),
                width,
                height,
                angle_degrees: ey.atan2(ex).to_degrees(),
            };
        }
    }

    best
}

/// Fallback for contours whose hull collapses to a point or segment.
fn degenerate_rect(points: &[Point<i32>]) -> RotatedRect {
    let bbox = bounding_box(points);
    let width = bbox.x2.saturating_sub(bbox.x1 + 1) as f32;
    let height = bbox.y2.saturating_sub(bbox.y1 + 1) as f32;
    RotatedRect {
        center: Point2f::new(
            (bbox.x1 + bbox.x2) as f32 / 2.0,
            (bbox.y1 + bbox.y2) as f32 / 2.0,
        ),
        width,
        height,
        angle_degrees: 0.0,
    }
}
