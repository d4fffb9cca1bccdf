//! Matrix-PNG codec module
//!
//! This module implements the reversible colormap codec: encoding 2-D
//! numeric matrices into PNG images a human can read off a color ramp, and
//! recovering the matrix, exactly at quantization-level granularity, from
//! the image bytes.

pub mod colormap;
pub mod common;
pub mod conversions;
pub mod decode;
pub mod encode;
pub mod matrix;
pub mod png;
pub mod quantize;

pub use common::{CodecError, Result};

pub use colormap::{Color, Scheme};

pub use quantize::Normalization;

pub use matrix::{Matrix, MatrixReader, MatrixWriter, TextMatrixReader, TextMatrixWriter};

pub use self::png::{
    DecodeConfig, DecodeConfigBuilder, EncodeConfig, EncodeConfigBuilder, ImageMetadata,
    PixelFormat, PixelGrid, PngCompression, PngReader, PngWriter, RecoveredMetadata,
    StandardPngReader, StandardPngWriter,
};

pub use decode::decode;
pub use encode::encode;

pub use conversions::{MatrixToPngPipeline, PngToMatrixPipeline};
