//! Image loading with resource limits and timeout support.

use image::{DynamicImage, GenericImageView, ImageReader};
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::LimitsConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::types::SourceImage;

use super::sniff::SniffedFormat;

/// Loads a validated input file into a [`SourceImage`].
pub struct ImageLoader {
    limits: LimitsConfig,
}

impl ImageLoader {
    /// Create a new loader with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Decode `path` as `format` off the async runtime.
    ///
    /// The file size is checked before decoding and the dimensions after.
    pub async fn load(&self, path: &Path, format: SniffedFormat) -> PipelineResult<SourceImage> {
        self.check_file_size(path)?;

        let path_owned = path.to_path_buf();
        let image = run_blocking_with_timeout(
            path,
            "decode",
            self.limits.decode_timeout_ms,
            move || Self::decode_sync(&path_owned, format),
        )
        .await?;

        let (width, height) = image.dimensions();
        if width > self.limits.max_image_dimension || height > self.limits.max_image_dimension {
            return Err(PipelineError::ImageTooLarge {
                path: path.to_path_buf(),
                width,
                height,
                max_dim: self.limits.max_image_dimension,
            });
        }

        // Drops alpha and reduces deeper samples so both transforms start
        // from the same 8-bit colour buffer.
        Ok(SourceImage::new(path, image.into_rgb8(), format))
    }

    fn check_file_size(&self, path: &Path) -> PipelineResult<()> {
        let metadata = std::fs::metadata(path).map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot read metadata: {}", e),
        })?;

        let max_bytes = self.limits.max_file_size_mb.saturating_mul(1024 * 1024);
        if metadata.len() > max_bytes {
            return Err(PipelineError::FileTooLarge {
                path: path.to_path_buf(),
                size_mb: metadata.len() / (1024 * 1024),
                max_mb: self.limits.max_file_size_mb,
            });
        }
        Ok(())
    }

    /// Synchronous decode (runs in spawn_blocking).
    fn decode_sync(path: &Path, format: SniffedFormat) -> PipelineResult<DynamicImage> {
        let file = std::fs::File::open(path).map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot open file: {}", e),
        })?;

        ImageReader::with_format(BufReader::new(file), format.image_format())
            .decode()
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

/// Run `work` on the blocking pool, giving up after `timeout_ms`.
///
/// A timed-out task keeps running to completion in the background; only the
/// result is discarded.
pub(crate) async fn run_blocking_with_timeout<T, F>(
    path: &Path,
    stage: &str,
    timeout_ms: u64,
    work: F,
) -> PipelineResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> PipelineResult<T> + Send + 'static,
{
    let result = timeout(
        Duration::from_millis(timeout_ms),
        tokio::task::spawn_blocking(work),
    )
    .await;

    match result {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => Err(PipelineError::Task {
            path: path.to_path_buf(),
            stage: stage.to_string(),
            message: e.to_string(),
        }),
        Err(_) => Err(PipelineError::Timeout {
            path: path.to_path_buf(),
            stage: stage.to_string(),
            timeout_ms,
        }),
    }
}
