//! Pixel grid to matrix decoding.
//!
//! The inverse of `encode`: each pixel is mapped back to its quantization
//! level and the level to its representative value. A pixel color that the
//! scheme cannot produce aborts the decode with `UnknownColorError` and the
//! offending cell's coordinates; no partial matrix is returned.

use tracing::debug;

use crate::codec::colormap::{Color, Scheme};
use crate::codec::common::error::{CodecError, Result};
use crate::codec::matrix::types::Matrix;
use crate::codec::png::types::{PixelFormat, PixelGrid};
use crate::codec::quantize::Normalization;

/// Decodes a pixel grid back into a matrix.
///
/// The recovered matrix equals the quantization of the original, not the
/// original itself: each cell is within `normalization.max_quantization_error()`
/// of the value that was encoded.
pub fn decode(grid: &PixelGrid, scheme: Scheme, normalization: &Normalization) -> Result<Matrix> {
    if grid.format != scheme.pixel_format() {
        return Err(CodecError::UnsupportedFormat(format!(
            "{:?} pixels cannot hold {} colors",
            grid.format,
            scheme.name()
        )));
    }
    if normalization.levels != scheme.levels() {
        return Err(CodecError::DecodeError(format!(
            "normalization has {} levels but {} defines {}",
            normalization.levels,
            scheme.name(),
            scheme.levels()
        )));
    }

    debug!(
        "Decoding {}x{} grid with {} (range [{}, {}])",
        grid.width, grid.height, scheme.name(), normalization.z_min, normalization.z_max
    );

    let bpp = grid.format.bytes_per_pixel();
    let mut values = Vec::with_capacity(grid.width * grid.height);
    for row in 0..grid.height {
        for col in 0..grid.width {
            let offset = (row * grid.width + col) * bpp;
            let color = match grid.format {
                PixelFormat::Grayscale => Color::Gray(grid.data[offset]),
                PixelFormat::Rgb => Color::Rgb([
                    grid.data[offset],
                    grid.data[offset + 1],
                    grid.data[offset + 2],
                ]),
            };
            let level = scheme.inverse(color).ok_or_else(|| {
                let rgb = match color {
                    Color::Gray(intensity) => [intensity, intensity, intensity],
                    Color::Rgb(rgb) => rgb,
                };
                CodecError::UnknownColorError { row, col, color: rgb }
            })?;
            values.push(normalization.reconstruct(level));
        }
    }

    Matrix::new(grid.height, grid.width, values)
}
