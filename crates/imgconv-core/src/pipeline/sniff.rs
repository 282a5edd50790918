//! Content-based format detection from file signatures.
//!
//! The file extension is never consulted here: a PNG named `photo.jpg` is a
//! PNG, and a text file named `notes.png` is unrecognized.

use image::ImageFormat;
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Labels accepted as input, matched against [`SniffedFormat::label`].
pub const SUPPORTED_FORMATS: [&str; 4] = ["bmp", "jpeg", "jpg", "png"];

/// Bytes read from the start of a file for classification.
const HEADER_LEN: u64 = 16;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Formats the sniffer can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SniffedFormat {
    Bmp,
    Jpeg,
    Png,
}

impl SniffedFormat {
    /// Classify a header. Returns `None` for anything unrecognized.
    pub fn from_header(header: &[u8]) -> Option<Self> {
        // JPEG: FF D8 FF
        if header.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        // PNG: full 8-byte signature
        if header.starts_with(&PNG_SIGNATURE) {
            return Some(Self::Png);
        }

        // BMP: BM
        if header.starts_with(b"BM") {
            return Some(Self::Bmp);
        }

        None
    }

    /// Classify the file at `path` by its first bytes.
    ///
    /// Unreadable paths (including directories) are unrecognized.
    pub fn sniff_file(path: &Path) -> Option<Self> {
        let file = std::fs::File::open(path).ok()?;
        let mut header = Vec::with_capacity(HEADER_LEN as usize);
        file.take(HEADER_LEN).read_to_end(&mut header).ok()?;
        Self::from_header(&header)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }

    /// Whether this format's label is on the allow-list.
    pub fn is_supported(self) -> bool {
        is_supported_label(self.label())
    }

    /// The codec used to decode this format, and to encode outputs when the
    /// file extension does not name one.
    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Bmp => ImageFormat::Bmp,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
        }
    }
}

impl fmt::Display for SniffedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Check a format label against [`SUPPORTED_FORMATS`].
pub fn is_supported_label(label: &str) -> bool {
    SUPPORTED_FORMATS.contains(&label)
}
