//! Black-and-white conversion.

use image::{imageops, GrayImage, RgbImage};

/// Convert to single-channel luminance at the same dimensions.
pub fn grayscale(image: &RgbImage) -> GrayImage {
    imageops::grayscale(image)
}
