//! imgconv core - turn one image into a black-and-white copy and a thumbnail.
//!
//! # Architecture
//!
//! ```text
//! Validate paths → Sniff format → Decode ─┬─ Grayscale → {base}_bw{ext}
//!                                         └─ Thumbnail → {base}_thumbnail{ext}
//! ```
//!
//! Validation fails fast before anything is decoded. The two conversions
//! share the decoded image read-only and run concurrently.
//!
//! # Usage
//!
//! ```rust,ignore
//! use imgconv_core::{Config, ImageConverter};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> imgconv_core::Result<()> {
//!     let config = Config::load()?;
//!     let summary =
//!         ImageConverter::convert(&config, Path::new("photo.png"), Path::new("out")).await?;
//!     println!("{}", summary.thumbnail.path.display());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{
    ConfigError, ImgconvError, PipelineError, PipelineResult, Result, ValidationError,
};
pub use pipeline::{
    Converter, ImageConverter, SniffedFormat, Validator, SUPPORTED_FORMATS, THUMBNAIL_SIZE,
};
pub use types::{ConversionOutput, ConversionSummary, OutputKind, OutputTarget, SourceImage};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line printed when both outputs were written.
pub const SUCCESS_MESSAGE: &str = "Conversion and thumbnail creation successful!";
