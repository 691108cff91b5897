use image::GrayImage;
use imageproc::distance_transform::Norm;
use imageproc::morphology::{close, open};

/// Opening removes isolated noise pixels, closing fills small interior gaps.
/// `kernel_size` is the side of the square structuring element; imageproc
/// takes a radius, so a 5x5 kernel maps to k = 2.
pub fn clean_mask(mask: &GrayImage, kernel_size: u32) -> GrayImage {
    let k = (kernel_size / 2) as u8;
    if k == 0 {
        return mask.clone();
    }
    let opened = open(mask, Norm::LInf, k);
    close(&opened, Norm::LInf, k)
}
