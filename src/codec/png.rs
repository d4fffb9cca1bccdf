//! PNG container module
//!
//! This module provides lossless PNG reading and writing over the png
//! library, including the text-chunk metadata that makes a matrix PNG
//! self-describing. The codec core never touches chunk structure directly.

mod reader;
mod standard_reader;
mod standard_writer;
mod writer;
pub mod types;

pub use reader::PngReader;
pub use standard_reader::StandardPngReader;
pub use standard_writer::StandardPngWriter;
pub use types::{
    DecodeConfig, DecodeConfigBuilder, EncodeConfig, EncodeConfigBuilder, ImageMetadata,
    PixelFormat, PixelGrid, PngCompression, RecoveredMetadata,
};
pub use writer::PngWriter;
