//! Image conversion pipeline components.
//!
//! - **sniff**: Classify files by signature against the format allow-list
//! - **validate**: Check input and output paths before loading
//! - **decode**: Load the input into an RGB buffer with limits and a timeout
//! - **grayscale**: Luminance conversion
//! - **thumbnail**: Fixed 100x100 resample
//! - **write**: Encode outputs, picking the container from the extension
//! - **convert**: The two per-output operations over a shared source
//! - **processor**: Orchestrates validation, loading and concurrent dispatch

pub mod convert;
pub mod decode;
pub mod grayscale;
pub mod processor;
pub mod sniff;
pub mod thumbnail;
pub mod validate;
pub mod write;

// Re-exports for convenient access
pub use convert::Converter;
pub use decode::ImageLoader;
pub use processor::ImageConverter;
pub use sniff::{SniffedFormat, SUPPORTED_FORMATS};
pub use thumbnail::THUMBNAIL_SIZE;
pub use validate::Validator;
