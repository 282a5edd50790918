//! Core data types shared by the loader and the converter.

use image::RgbImage;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::pipeline::sniff::SniffedFormat;

/// A decoded input image and the name parts every output is derived from.
///
/// Built once by the loader and never mutated afterwards; both conversions
/// read it concurrently through an `Arc`.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Path the image was loaded from, as given by the user
    pub path: PathBuf,

    /// Decoded pixels, normalized to 8-bit RGB
    pub pixels: RgbImage,

    /// File name without its extension
    pub base_name: String,

    /// Original extension including the leading dot, or empty
    pub extension: String,

    /// Container detected from the file content
    pub format: SniffedFormat,
}

impl SourceImage {
    /// Wrap decoded pixels, deriving the base name and extension from `path`.
    pub fn new(path: &Path, pixels: RgbImage, format: SniffedFormat) -> Self {
        let (base_name, extension) = split_file_name(path);
        Self {
            path: path.to_path_buf(),
            pixels,
            base_name,
            extension,
            format,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Split the final path component into stem and dotted extension.
///
/// `photo.png` gives `("photo", ".png")`, `archive.tar.gz` gives
/// `("archive.tar", ".gz")` and `.hidden` has no extension.
pub fn split_file_name(path: &Path) -> (String, String) {
    let base_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    (base_name, extension)
}

/// The directory both outputs are written into.
///
/// Known to exist and to be a directory at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    dir: PathBuf,
}

impl OutputTarget {
    pub(crate) fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the output of `kind` for `source`: `{dir}/{base}_{suffix}{ext}`.
    pub fn path_for(&self, source: &SourceImage, kind: OutputKind) -> PathBuf {
        self.dir.join(format!(
            "{}_{}{}",
            source.base_name,
            kind.suffix(),
            source.extension
        ))
    }
}

/// The two derived artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// Single-channel luminance copy at the source dimensions
    Grayscale,
    /// Fixed-size resample
    Thumbnail,
}

impl OutputKind {
    /// File name suffix; distinct per kind so outputs never collide.
    pub fn suffix(self) -> &'static str {
        match self {
            OutputKind::Grayscale => "bw",
            OutputKind::Thumbnail => "thumbnail",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Grayscale => write!(f, "grayscale"),
            OutputKind::Thumbnail => write!(f, "thumbnail"),
        }
    }
}

/// A file written by one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    pub kind: OutputKind,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Both outputs of a successful run.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub grayscale: ConversionOutput,
    pub thumbnail: ConversionOutput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_file_name_simple() {
        let (base, ext) = split_file_name(Path::new("dir/photo.png"));
        assert_eq!(base, "photo");
        assert_eq!(ext, ".png");
    }

    #[test]
    fn test_split_file_name_keeps_last_extension_only() {
        let (base, ext) = split_file_name(Path::new("archive.tar.gz"));
        assert_eq!(base, "archive.tar");
        assert_eq!(ext, ".gz");
    }

    #[test]
    fn test_split_file_name_without_extension() {
        let (base, ext) = split_file_name(Path::new("/tmp/photo"));
        assert_eq!(base, "photo");
        assert_eq!(ext, "");

        let (base, ext) = split_file_name(Path::new(".hidden"));
        assert_eq!(base, ".hidden");
        assert_eq!(ext, "");
    }

    #[test]
    fn test_split_file_name_preserves_case() {
        let (base, ext) = split_file_name(Path::new("IMG_0001.JPG"));
        assert_eq!(base, "IMG_0001");
        assert_eq!(ext, ".JPG");
    }

    #[test]
    fn test_output_paths_are_distinct() {
        let source = SourceImage::new(
            Path::new("in/cat.jpg"),
            RgbImage::new(2, 2),
            SniffedFormat::Jpeg,
        );
        let target = OutputTarget::new(Path::new("/tmp/out"));
        let bw = target.path_for(&source, OutputKind::Grayscale);
        let thumb = target.path_for(&source, OutputKind::Thumbnail);
        assert_eq!(bw, Path::new("/tmp/out/cat_bw.jpg"));
        assert_eq!(thumb, Path::new("/tmp/out/cat_thumbnail.jpg"));
        assert_ne!(bw, thumb);
    }
}
