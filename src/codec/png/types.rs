//! PNG-side data types and conversion configuration

use crate::codec::colormap::Scheme;
use crate::codec::common::error::{CodecError, Result};
use crate::codec::quantize::Normalization;

/// Pixel layout of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// One 8-bit intensity per pixel
    Grayscale,
    /// Three interleaved 8-bit channels per pixel
    Rgb,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Grayscale => 1,
            PixelFormat::Rgb => 3,
        }
    }
}

/// A 2-D grid of 8-bit pixel samples, row-major interleaved.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    /// Width of the grid in pixels (matrix columns)
    pub width: usize,
    /// Height of the grid in pixels (matrix rows)
    pub height: usize,
    /// Pixel layout
    pub format: PixelFormat,
    /// Sample data, `width * height * bytes_per_pixel` entries
    pub data: Vec<u8>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize, format: PixelFormat, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 || data.len() != width * height * format.bytes_per_pixel() {
            return Err(CodecError::InvalidDimensions(width, height));
        }
        Ok(Self { width, height, format, data })
    }

    /// Reverses the row order in place. Used to render row 0 of the matrix
    /// at the bottom of the image when the y axis ascends upward.
    pub fn flip_vertical(&mut self) {
        let stride = self.width * self.format.bytes_per_pixel();
        for row in 0..self.height / 2 {
            let top = row * stride;
            let bottom = (self.height - 1 - row) * stride;
            for i in 0..stride {
                self.data.swap(top + i, bottom + i);
            }
        }
    }
}

/// PNG compression presets
#[derive(Debug, Clone, Copy)]
pub enum PngCompression {
    /// Fastest compression (largest file)
    Fast,
    /// Default zlib level
    Default,
    /// Best compression (slowest)
    Best,
}

/// Configuration for matrix to PNG conversion
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    /// Colormap scheme to encode with
    pub scheme: Scheme,
    /// Explicit `(z_min, z_max)` range override; inferred from the matrix
    /// when absent
    pub z_range: Option<(f64, f64)>,
    /// Clamp values outside an overridden range to the range ends instead
    /// of failing with `RangeError`. Clamping is lossy at the tails.
    pub clamp_out_of_range: bool,
    /// Units label stored alongside the value range
    pub z_units: Option<String>,
    /// Whether the y axis ascends upward (row 0 at the bottom of the image)
    pub y_ascend_up: bool,
    /// Transpose the matrix before encoding, for data indexed `[x][y]`
    /// rather than `[row][col]`
    pub transpose: bool,
    /// PNG compression preset
    pub compression: PngCompression,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::ExtendedBlackBody,
            z_range: None,
            clamp_out_of_range: false,
            z_units: None,
            y_ascend_up: true,
            transpose: false,
            compression: PngCompression::Default,
        }
    }
}

impl EncodeConfig {
    pub fn builder() -> EncodeConfigBuilder {
        EncodeConfigBuilder::default()
    }
}

/// Builder for EncodeConfig
#[derive(Default)]
pub struct EncodeConfigBuilder {
    scheme: Option<Scheme>,
    z_range: Option<Option<(f64, f64)>>,
    clamp_out_of_range: Option<bool>,
    z_units: Option<Option<String>>,
    y_ascend_up: Option<bool>,
    transpose: Option<bool>,
    compression: Option<PngCompression>,
}

impl EncodeConfigBuilder {
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn z_range(mut self, z_range: Option<(f64, f64)>) -> Self {
        self.z_range = Some(z_range);
        self
    }

    pub fn clamp_out_of_range(mut self, clamp: bool) -> Self {
        self.clamp_out_of_range = Some(clamp);
        self
    }

    pub fn z_units(mut self, z_units: Option<String>) -> Self {
        self.z_units = Some(z_units);
        self
    }

    pub fn y_ascend_up(mut self, y_ascend_up: bool) -> Self {
        self.y_ascend_up = Some(y_ascend_up);
        self
    }

    pub fn transpose(mut self, transpose: bool) -> Self {
        self.transpose = Some(transpose);
        self
    }

    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn build(self) -> EncodeConfig {
        let default = EncodeConfig::default();
        EncodeConfig {
            scheme: self.scheme.unwrap_or(default.scheme),
            z_range: self.z_range.unwrap_or(default.z_range),
            clamp_out_of_range: self.clamp_out_of_range.unwrap_or(default.clamp_out_of_range),
            z_units: self.z_units.unwrap_or(default.z_units),
            y_ascend_up: self.y_ascend_up.unwrap_or(default.y_ascend_up),
            transpose: self.transpose.unwrap_or(default.transpose),
            compression: self.compression.unwrap_or(default.compression),
        }
    }
}

/// Configuration for PNG to matrix conversion. Every field is an override
/// for (or fallback to) the metadata embedded in the PNG itself.
#[derive(Debug, Clone, Default)]
pub struct DecodeConfig {
    /// Colormap scheme; normally recovered from the `colormap` text chunk
    pub scheme: Option<Scheme>,
    /// `(z_min, z_max)` range; normally recovered from text chunks
    pub z_range: Option<(f64, f64)>,
    /// Expected matrix dimensions `(rows, cols)`, checked against the image
    pub expected_dimensions: Option<(usize, usize)>,
}

impl DecodeConfig {
    pub fn builder() -> DecodeConfigBuilder {
        DecodeConfigBuilder::default()
    }
}

/// Builder for DecodeConfig
#[derive(Default)]
pub struct DecodeConfigBuilder {
    scheme: Option<Scheme>,
    z_range: Option<(f64, f64)>,
    expected_dimensions: Option<(usize, usize)>,
}

impl DecodeConfigBuilder {
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn z_range(mut self, z_min: f64, z_max: f64) -> Self {
        self.z_range = Some((z_min, z_max));
        self
    }

    pub fn expected_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.expected_dimensions = Some((rows, cols));
        self
    }

    pub fn build(self) -> DecodeConfig {
        DecodeConfig {
            scheme: self.scheme,
            z_range: self.z_range,
            expected_dimensions: self.expected_dimensions,
        }
    }
}

/// Metadata persisted into the PNG as text chunks so a standalone image
/// file stays self-describing.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMetadata {
    pub scheme: Scheme,
    pub normalization: Normalization,
    pub z_units: Option<String>,
    pub x_min: f64,
    pub x_max: f64,
    pub x_units: Option<String>,
    pub y_min: f64,
    pub y_max: f64,
    pub y_units: Option<String>,
    pub y_ascend_up: bool,
}

impl ImageMetadata {
    /// Key/value pairs written as iTXt chunks.
    pub fn text_chunks(&self) -> Vec<(String, String)> {
        let mut chunks = vec![
            ("colormap".to_string(), self.scheme.name().to_string()),
            ("z_min".to_string(), self.normalization.z_min.to_string()),
            ("z_max".to_string(), self.normalization.z_max.to_string()),
            ("x_min".to_string(), self.x_min.to_string()),
            ("x_max".to_string(), self.x_max.to_string()),
            ("y_min".to_string(), self.y_min.to_string()),
            ("y_max".to_string(), self.y_max.to_string()),
            (
                "y_ascend".to_string(),
                if self.y_ascend_up { "up" } else { "down" }.to_string(),
            ),
        ];
        if let Some(units) = &self.z_units {
            chunks.push(("z_units".to_string(), units.clone()));
        }
        if let Some(units) = &self.x_units {
            chunks.push(("x_units".to_string(), units.clone()));
        }
        if let Some(units) = &self.y_units {
            chunks.push(("y_units".to_string(), units.clone()));
        }
        chunks
    }
}

/// Metadata recovered from a PNG's text chunks. Fields are optional because
/// an image may have been produced without them; the decode pipeline merges
/// these with the caller's `DecodeConfig`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecoveredMetadata {
    pub scheme: Option<Scheme>,
    pub z_min: Option<f64>,
    pub z_max: Option<f64>,
    pub z_units: Option<String>,
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub x_units: Option<String>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub y_units: Option<String>,
    pub y_ascend_up: Option<bool>,
}

impl RecoveredMetadata {
    /// Applies one text chunk. Unrecognized keywords are ignored so foreign
    /// annotations do not break decoding.
    pub fn apply_chunk(&mut self, keyword: &str, text: &str) -> Result<()> {
        match keyword {
            "colormap" => self.scheme = Some(Scheme::from_name(text)?),
            "z_min" => self.z_min = Some(parse_value(keyword, text)?),
            "z_max" => self.z_max = Some(parse_value(keyword, text)?),
            "x_min" => self.x_min = Some(parse_value(keyword, text)?),
            "x_max" => self.x_max = Some(parse_value(keyword, text)?),
            "y_min" => self.y_min = Some(parse_value(keyword, text)?),
            "y_max" => self.y_max = Some(parse_value(keyword, text)?),
            "z_units" => self.z_units = Some(text.to_string()),
            "x_units" => self.x_units = Some(text.to_string()),
            "y_units" => self.y_units = Some(text.to_string()),
            "y_ascend" => {
                self.y_ascend_up = Some(match text {
                    "up" => true,
                    "down" => false,
                    _ => {
                        return Err(CodecError::InvalidMetadataError {
                            key: keyword.to_string(),
                            value: text.to_string(),
                        });
                    }
                })
            }
            _ => {}
        }
        Ok(())
    }
}

fn parse_value(keyword: &str, text: &str) -> Result<f64> {
    text.parse().map_err(|_| CodecError::InvalidMetadataError {
        key: keyword.to_string(),
        value: text.to_string(),
    })
}
