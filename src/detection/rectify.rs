use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};

use crate::models::{BoundingBox, Quad};

/// Output dimensions of a rectified quadrilateral, measured from its edge
/// lengths rather than from the original (possibly rotated) shape.
pub fn rectified_dimensions(quad: &Quad) -> (u32, u32) {
    let bottom = quad.bottom_right().distance(&quad.bottom_left());
    let top = quad.top_right().distance(&quad.top_left());
    let right = quad.bottom_right().distance(&quad.top_right());
    let left = quad.bottom_left().distance(&quad.top_left());
    (
        bottom.max(top).round() as u32,
        right.max(left).round() as u32,
    )
}

/// Straightens the region bounded by `quad` into an upright rectangle via
/// the unique projective transform from its corners, resampling bilinearly.
/// Degenerate quads (zero-sized output or no unique projection) yield None.
pub fn rectify_quad(source: &RgbImage, quad: &Quad) -> Option<RgbImage> {
    let (width, height) = rectified_dimensions(quad);
    if width == 0 || height == 0 {
        return None;
    }

    let src = [
        (quad.top_left().x, quad.top_left().y),
        (quad.top_right().x, quad.top_right().y),
        (quad.bottom_right().x, quad.bottom_right().y),
        (quad.bottom_left().x, quad.bottom_left().y),
    ];
    let dst = [
        (0.0, 0.0),
        (width as f32 - 1.0, 0.0),
        (width as f32 - 1.0, height as f32 - 1.0),
        (0.0, height as f32 - 1.0),
    ];
    let projection = Projection::from_control_points(src, dst)?;

    let mut out = RgbImage::new(width, height);
    warp_into(
        source,
        &projection,
        Interpolation::Bilinear,
        Rgb([0, 0, 0]),
        &mut out,
    );
    Some(out)
}

/// Direct slice of an axis-aligned box, no resampling.
pub fn crop_box(source: &RgbImage, bbox: &BoundingBox) -> RgbImage {
    image::imageops::crop_imm(source, bbox.x1, bbox.y1, bbox.width(), bbox.height()).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point2f;

    fn gradient_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([
                (x * 255 / width) as u8,
                (y * 255 / height) as u8,
                128,
            ])
        })
    }

    fn all_permutations(points: [Point2f; 4]) -> Vec<[Point2f; 4]> {
        let mut out = Vec::with_capacity(24);
        let mut idx = [0usize, 1, 2, 3];
        permute(&mut idx, 0, &mut |order| {
            out.push([
                points[order[0]],
                points[order[1]],
                points[order[2]],
                points[order[3]],
            ]);
        });
        out
    }

    fn permute(idx: &mut [usize; 4], k: usize, visit: &mut impl FnMut(&[usize; 4])) {
        if k == 4 {
            visit(idx);
            return;
        }
        for i in k..4 {
            idx.swap(k, i);
            permute(idx, k + 1, visit);
            idx.swap(k, i);
        }
    }

    #[test]
    fn corner_ordering_is_permutation_invariant() {
        let corners = [
            Point2f::new(12.0, 8.0),   // tl
            Point2f::new(80.0, 15.0),  // tr
            Point2f::new(90.0, 70.0),  // br
            Point2f::new(5.0, 60.0),   // bl
        ];
        let permutations = all_permutations(corners);
        assert_eq!(permutations.len(), 24);
        for perm in permutations {
            let quad = Quad::from_unordered(perm);
            assert_eq!(quad.top_left(), corners[0]);
            assert_eq!(quad.top_right(), corners[1]);
            assert_eq!(quad.bottom_right(), corners[2]);
            assert_eq!(quad.bottom_left(), corners[3]);
        }
    }

    #[test]
    fn upright_quad_matches_direct_crop() {
        let source = gradient_image(100, 80);
        let quad = Quad::from_unordered([
            Point2f::new(10.0, 10.0),
            Point2f::new(50.0, 10.0),
            Point2f::new(50.0, 40.0),
            Point2f::new(10.0, 40.0),
        ]);

        let rectified = rectify_quad(&source, &quad).unwrap();
        assert_eq!(rectified.dimensions(), (40, 30));

        let cropped = crop_box(
            &source,
            &BoundingBox { x1: 10, y1: 10, x2: 50, y2: 40 },
        );
        // The warp spreads a 41-sample span over 40 pixels, so allow a small
        // interpolation tolerance.
        for (x, y) in [(0u32, 0u32), (20, 15), (39, 29)] {
            let a = rectified.get_pixel(x, y).0;
            let b = cropped.get_pixel(x, y).0;
            for c in 0..3 {
                assert!(
                    (a[c] as i32 - b[c] as i32).abs() <= 8,
                    "pixel ({x},{y}) channel {c}: {} vs {}",
                    a[c],
                    b[c]
                );
            }
        }
    }

    #[test]
    fn rectifying_solid_region_keeps_its_color() {
        let mut source = RgbImage::from_pixel(120, 120, Rgb([0, 0, 0]));
        for y in 20..80 {
            for x in 30..70 {
                source.put_pixel(x, y, Rgb([200, 150, 50]));
            }
        }
        let quad = Quad::from_unordered([
            Point2f::new(30.0, 20.0),
            Point2f::new(69.0, 20.0),
            Point2f::new(69.0, 79.0),
            Point2f::new(30.0, 79.0),
        ]);
        let rectified = rectify_quad(&source, &quad).unwrap();
        assert_eq!(rectified.dimensions(), (39, 59));
        let center = rectified.get_pixel(19, 29).0;
        assert_eq!(center, [200, 150, 50]);
    }

    #[test]
    fn zero_sized_quad_is_skipped() {
        let source = gradient_image(50, 50);
        let quad = Quad::from_unordered([
            Point2f::new(10.0, 10.0),
            Point2f::new(10.0, 10.0),
            Point2f::new(10.0, 10.0),
            Point2f::new(10.0, 10.0),
        ]);
        assert!(rectify_quad(&source, &quad).is_none());
    }

    #[test]
    fn crop_dimensions_are_box_dimensions() {
        let source = gradient_image(60, 60);
        let bbox = BoundingBox { x1: 5, y1: 8, x2: 25, y2: 38 };
        let cropped = crop_box(&source, &bbox);
        assert_eq!(cropped.dimensions(), (20, 30));
        assert_eq!(cropped.get_pixel(0, 0), source.get_pixel(5, 8));
    }
}
