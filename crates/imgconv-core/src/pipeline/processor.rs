//! Orchestration: validate, load, then run both conversions concurrently.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinHandle;

use crate::config::Config;
use crate::error::{PipelineError, PipelineResult, Result};
use crate::types::{ConversionOutput, ConversionSummary, OutputKind, OutputTarget};

use super::convert::Converter;
use super::decode::ImageLoader;
use super::validate::Validator;

/// A validated, loaded image ready to be converted.
///
/// Construction performs every check; a constructed value never fails
/// validation later.
#[derive(Debug)]
pub struct ImageConverter {
    converter: Converter,
}

impl ImageConverter {
    /// Validate `input` and `output_dir`, then decode the input.
    ///
    /// Nothing is written if this fails.
    pub async fn open(config: &Config, input: &Path, output_dir: &Path) -> Result<Self> {
        let start = Instant::now();
        let format = Validator::validate(input, output_dir)?;
        tracing::trace!("  Validate: {:?}", start.elapsed());

        let decode_start = Instant::now();
        let source = ImageLoader::new(config.limits.clone())
            .load(input, format)
            .await?;
        tracing::debug!(
            "Loaded {:?} as {} ({}x{}) in {:?}",
            input,
            format,
            source.width(),
            source.height(),
            decode_start.elapsed()
        );

        Ok(Self {
            converter: Converter::new(Arc::new(source), OutputTarget::new(output_dir)),
        })
    }

    /// Validate, load and convert in one call.
    pub async fn convert(
        config: &Config,
        input: &Path,
        output_dir: &Path,
    ) -> Result<ConversionSummary> {
        Self::open(config, input, output_dir).await?.run().await
    }

    /// Run both conversions at once and wait for both.
    ///
    /// A failing conversion does not cancel the other one. When either
    /// fails, the grayscale error is reported first.
    pub async fn run(&self) -> Result<ConversionSummary> {
        let start = Instant::now();

        let grayscale = self.spawn(OutputKind::Grayscale);
        let thumbnail = self.spawn(OutputKind::Thumbnail);
        let (grayscale, thumbnail) = tokio::join!(grayscale, thumbnail);

        let grayscale = self.report(OutputKind::Grayscale, grayscale);
        let thumbnail = self.report(OutputKind::Thumbnail, thumbnail);
        tracing::debug!("Conversions finished in {:?}", start.elapsed());

        match (grayscale, thumbnail) {
            (Ok(grayscale), Ok(thumbnail)) => Ok(ConversionSummary {
                grayscale,
                thumbnail,
            }),
            (Err(e), _) | (_, Err(e)) => Err(e.into()),
        }
    }

    fn spawn(&self, kind: OutputKind) -> JoinHandle<PipelineResult<ConversionOutput>> {
        let converter = self.converter.clone();
        tokio::task::spawn_blocking(move || converter.convert(kind))
    }

    fn report(
        &self,
        kind: OutputKind,
        joined: std::result::Result<PipelineResult<ConversionOutput>, tokio::task::JoinError>,
    ) -> PipelineResult<ConversionOutput> {
        let result = joined.unwrap_or_else(|e| {
            Err(PipelineError::Task {
                path: self.converter.output_path(kind),
                stage: kind.to_string(),
                message: e.to_string(),
            })
        });

        match &result {
            Ok(output) => tracing::info!(
                "Wrote {:?} ({}x{})",
                output.path,
                output.width,
                output.height
            ),
            Err(e) => tracing::error!("{} conversion failed: {}", kind, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ImgconvError, ValidationError};
    use image::{Rgb, RgbImage};

    fn write_png(dir: &Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(12, 9, Rgb([90, 160, 30]))
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();
        path
    }

    #[tokio::test]
    async fn test_open_fails_fast_on_validation() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageConverter::open(&Config::default(), &dir.path().join("x.png"), dir.path())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ImgconvError::Validation(ValidationError::InvalidInputPath(_))
        ));
    }

    #[tokio::test]
    async fn test_run_writes_both_outputs() {
        let input_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let input = write_png(input_dir.path(), "leaf.png");

        let summary = ImageConverter::convert(&Config::default(), &input, out_dir.path())
            .await
            .unwrap();

        assert_eq!(summary.grayscale.path, out_dir.path().join("leaf_bw.png"));
        assert_eq!((summary.grayscale.width, summary.grayscale.height), (12, 9));
        assert_eq!(summary.thumbnail.path, out_dir.path().join("leaf_thumbnail.png"));
        assert_eq!((summary.thumbnail.width, summary.thumbnail.height), (100, 100));
        assert!(summary.grayscale.path.exists());
        assert!(summary.thumbnail.path.exists());
    }

    #[tokio::test]
    async fn test_failed_sibling_does_not_cancel_the_other() {
        let input_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let input = write_png(input_dir.path(), "leaf.png");
        std::fs::create_dir(out_dir.path().join("leaf_thumbnail.png")).unwrap();

        let converter = ImageConverter::open(&Config::default(), &input, out_dir.path())
            .await
            .unwrap();
        let err = converter.run().await.unwrap_err();

        assert!(matches!(
            err,
            ImgconvError::Pipeline(PipelineError::Write { .. })
        ));
        assert!(out_dir.path().join("leaf_bw.png").is_file());
    }

    #[tokio::test]
    async fn test_grayscale_error_reported_first() {
        let input_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let input = write_png(input_dir.path(), "leaf.png");
        std::fs::create_dir(out_dir.path().join("leaf_bw.png")).unwrap();
        std::fs::create_dir(out_dir.path().join("leaf_thumbnail.png")).unwrap();

        let err = ImageConverter::convert(&Config::default(), &input, out_dir.path())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("leaf_bw.png"));
    }
}
