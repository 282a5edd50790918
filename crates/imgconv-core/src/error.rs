//! Error types for imgconv.
//!
//! Validation errors are raised before any conversion work starts and carry
//! the exact user-facing message. Pipeline errors cover loading and writing.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for imgconv operations.
#[derive(Error, Debug)]
pub enum ImgconvError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input or output rejected before loading
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Loading or conversion failed
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// The three checks performed before an image is loaded, in check order.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Input path does not exist
    #[error("Invalid input image path: {0}")]
    InvalidInputPath(PathBuf),

    /// Output path is missing or is not a directory
    #[error("Invalid output directory path: {0}")]
    InvalidOutputDirectory(PathBuf),

    /// Sniffed content is not an allowed image format
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Errors raised while loading the source image or writing outputs.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Writing an output image failed
    #[error("Write error for {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Operation timed out
    #[error("Timeout in {stage} stage for {path} after {timeout_ms}ms")]
    Timeout {
        path: PathBuf,
        stage: String,
        timeout_ms: u64,
    },

    /// File exceeds size limit
    #[error("File too large: {path} ({size_mb}MB > {max_mb}MB)")]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        max_mb: u64,
    },

    /// Image dimensions exceed limit
    #[error("Image too large: {path} ({width}x{height} > {max_dim})")]
    ImageTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max_dim: u32,
    },

    /// A blocking worker panicked or was cancelled
    #[error("{stage} task failed for {path}: {message}")]
    Task {
        path: PathBuf,
        stage: String,
        message: String,
    },
}

/// Convenience type alias for imgconv results.
pub type Result<T> = std::result::Result<T, ImgconvError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
