//! Input validation before anything is decoded.

use std::path::Path;

use crate::error::ValidationError;

use super::sniff::SniffedFormat;

/// Checks the input image and output directory before loading.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. the input path exists
/// 2. the output path exists and is a directory
/// 3. the input content is an allowed image format
pub struct Validator;

impl Validator {
    /// Validate both paths, returning the sniffed input format.
    pub fn validate(input: &Path, output_dir: &Path) -> Result<SniffedFormat, ValidationError> {
        if !input.exists() {
            return Err(ValidationError::InvalidInputPath(input.to_path_buf()));
        }

        if !output_dir.exists() || !output_dir.is_dir() {
            return Err(ValidationError::InvalidOutputDirectory(
                output_dir.to_path_buf(),
            ));
        }

        match SniffedFormat::sniff_file(input) {
            Some(format) if format.is_supported() => {
                tracing::trace!("Sniffed {:?} as {}", input, format);
                Ok(format)
            }
            _ => Err(ValidationError::UnsupportedFormat(input.to_path_buf())),
        }
    }
}
