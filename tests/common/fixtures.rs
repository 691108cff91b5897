use image::{Rgb, RgbImage};

/// A post-it yellow that lands inside the default "yellow" HSV range.
pub const NOTE_YELLOW: Rgb<u8> = Rgb([255, 200, 0]);

/// Neutral desk background, low saturation.
pub const BACKGROUND: Rgb<u8> = Rgb([120, 120, 120]);

/// Creates an empty 800x600 desk scene.
pub fn empty_scene() -> RgbImage {
    RgbImage::from_pixel(800, 600, BACKGROUND)
}

/// Paints an upright filled rectangle.
pub fn add_rect(scene: &mut RgbImage, x0: u32, y0: u32, width: u32, height: u32, color: Rgb<u8>) {
    for y in y0..y0 + height {
        for x in x0..x0 + width {
            scene.put_pixel(x, y, color);
        }
    }
}

/// Paints a filled rectangle rotated by `angle_degrees` around its center.
pub fn add_rotated_rect(
    scene: &mut RgbImage,
    center: (f32, f32),
    width: f32,
    height: f32,
    angle_degrees: f32,
    color: Rgb<u8>,
) {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let (sw, sh) = scene.dimensions();
    for y in 0..sh {
        for x in 0..sw {
            let dx = x as f32 - center.0;
            let dy = y as f32 - center.1;
            // Rotate the pixel back into the rectangle's frame.
            let u = dx * cos + dy * sin;
            let v = -dx * sin + dy * cos;
            if u.abs() <= width / 2.0 && v.abs() <= height / 2.0 {
                scene.put_pixel(x, y, color);
            }
        }
    }
}

/// The standard test scene: two well-separated 120x180 notes plus a 10x10
/// speck in the same color, whose area falls below the default floor.
pub fn two_notes_and_a_speck() -> RgbImage {
    let mut scene = empty_scene();
    add_rect(&mut scene, 100, 80, 120, 180, NOTE_YELLOW);
    add_rect(&mut scene, 500, 330, 120, 180, NOTE_YELLOW);
    add_rect(&mut scene, 400, 30, 10, 10, NOTE_YELLOW);
    scene
}
