//! The two conversions over a loaded source image.
//!
//! Each operation reads the shared source and writes exactly one file. Neither
//! depends on the other's output, so they can run in any order or at once.

use image::DynamicImage;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::PipelineResult;
use crate::types::{ConversionOutput, OutputKind, OutputTarget, SourceImage};

use super::grayscale::grayscale;
use super::thumbnail::thumbnail;
use super::write::write_image;

/// Produces the grayscale copy and the thumbnail of one source image.
#[derive(Debug, Clone)]
pub struct Converter {
    source: Arc<SourceImage>,
    target: OutputTarget,
}

impl Converter {
    pub fn new(source: Arc<SourceImage>, target: OutputTarget) -> Self {
        Self { source, target }
    }

    /// Where the output of `kind` is written.
    pub fn output_path(&self, kind: OutputKind) -> PathBuf {
        self.target.path_for(&self.source, kind)
    }

    /// Run the conversion for `kind`.
    pub fn convert(&self, kind: OutputKind) -> PipelineResult<ConversionOutput> {
        match kind {
            OutputKind::Grayscale => self.to_grayscale(),
            OutputKind::Thumbnail => self.to_thumbnail(),
        }
    }

    /// Write `{base}_bw{ext}`: single-channel luminance, source dimensions.
    pub fn to_grayscale(&self) -> PipelineResult<ConversionOutput> {
        let image = DynamicImage::ImageLuma8(grayscale(&self.source.pixels));
        self.write(OutputKind::Grayscale, image)
    }

    /// Write `{base}_thumbnail{ext}`: a 100x100 resample.
    pub fn to_thumbnail(&self) -> PipelineResult<ConversionOutput> {
        let image = DynamicImage::ImageRgb8(thumbnail(&self.source.pixels));
        self.write(OutputKind::Thumbnail, image)
    }

    fn write(&self, kind: OutputKind, image: DynamicImage) -> PipelineResult<ConversionOutput> {
        let start = std::time::Instant::now();
        let path = self.output_path(kind);
        write_image(&image, &path, self.source.format)?;
        tracing::debug!("Wrote {} output {:?} in {:?}", kind, path, start.elapsed());

        Ok(ConversionOutput {
            kind,
            path,
            width: image.width(),
            height: image.height(),
        })
    }
}
