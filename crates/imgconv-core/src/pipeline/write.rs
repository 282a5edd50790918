//! Writing output images to disk.

use image::{DynamicImage, ImageFormat};
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};

use super::sniff::SniffedFormat;

/// Pick the encoder for `path`.
///
/// The extension decides when it names a supported container; otherwise the
/// sniffed input format is reused so the file is still readable.
pub fn output_format(path: &Path, fallback: SniffedFormat) -> ImageFormat {
    match ImageFormat::from_path(path) {
        Ok(format @ (ImageFormat::Bmp | ImageFormat::Jpeg | ImageFormat::Png)) => format,
        _ => fallback.image_format(),
    }
}

/// Encode `image` to `path`, replacing any existing file.
pub fn write_image(
    image: &DynamicImage,
    path: &Path,
    fallback: SniffedFormat,
) -> PipelineResult<()> {
    let format = output_format(path, fallback);
    image
        .save_with_format(path, format)
        .map_err(|e| PipelineError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
