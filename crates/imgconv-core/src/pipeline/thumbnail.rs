//! Fixed-size thumbnail generation.

use image::{imageops, imageops::FilterType, RgbImage};

/// Thumbnail edge length in pixels. Not configurable.
pub const THUMBNAIL_SIZE: u32 = 100;

/// Resample to exactly `THUMBNAIL_SIZE` x `THUMBNAIL_SIZE`.
///
/// The aspect ratio is not preserved, so non-square inputs are stretched.
pub fn thumbnail(image: &RgbImage) -> RgbImage {
    imageops::resize(image, THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Triangle)
}
