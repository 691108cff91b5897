use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;

/// Outer borders of connected foreground regions. Hole contours are
/// discarded; only the outermost boundary of each region survives.
pub fn find_outer_contours(mask: &GrayImage) -> Vec<Vec<Point<i32>>> {
    find_contours::<i32>(mask)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .map(|c| c.points)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn fill_rect(mask: &mut GrayImage, x0: u32, y0: u32, w: u32, h: u32) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
    }

    #[test]
    fn one_contour_per_region() {
        let mut mask = GrayImage::new(60, 40);
        fill_rect(&mut mask, 5, 5, 10, 10);
        fill_rect(&mut mask, 30, 20, 15, 12);
        let contours = find_outer_contours(&mask);
        assert_eq!(contours.len(), 2);
    }

    #[test]
    fn hole_borders_are_ignored() {
        let mut mask = GrayImage::new(40, 40);
        fill_rect(&mut mask, 5, 5, 20, 20);
        // Punch a hole; its border must not show up as a contour.
        for y in 12..18 {
            for x in 12..18 {
                mask.put_pixel(x, y, Luma([0]));
            }
        }
        let contours = find_outer_contours(&mask);
        assert_eq!(contours.len(), 1);
    }

    #[test]
    fn empty_mask_yields_no_contours() {
        let mask = GrayImage::new(20, 20);
        assert!(find_outer_contours(&mask).is_empty());
    }
}
