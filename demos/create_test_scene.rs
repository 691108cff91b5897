use image::{Rgb, RgbImage};

/// Generates a synthetic desk photo with three post-it notes: two upright
/// yellow ones and a tilted pink one. Useful for trying the detector
/// without a real photograph:
///
///   cargo run --example create_test_scene
///   cargo run -- test_scene.png -v
fn main() {
    let mut scene = RgbImage::from_pixel(800, 600, Rgb([110, 105, 95]));

    fill_rect(&mut scene, 80, 60, 120, 180, Rgb([255, 200, 0]));
    fill_rect(&mut scene, 550, 320, 120, 180, Rgb([255, 200, 0]));
    fill_rotated(&mut scene, (380.0, 420.0), 130.0, 130.0, 15.0, Rgb([230, 70, 160]));

    scene.save("test_scene.png").unwrap();
    println!("Created test_scene.png (800x600, 3 notes)");
}

fn fill_rect(scene: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgb<u8>) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            scene.put_pixel(x, y, color);
        }
    }
}

fn fill_rotated(
    scene: &mut RgbImage,
    center: (f32, f32),
    w: f32,
    h: f32,
    angle_degrees: f32,
    color: Rgb<u8>,
) {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let (sw, sh) = scene.dimensions();
    for y in 0..sh {
        for x in 0..sw {
            let dx = x as f32 - center.0;
            let dy = y as f32 - center.1;
            let u = dx * cos + dy * sin;
            let v = -dx * sin + dy * cos;
            if u.abs() <= w / 2.0 && v.abs() <= h / 2.0 {
                scene.put_pixel(x, y, color);
            }
        }
    }
}
