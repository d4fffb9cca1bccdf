//! Matrix to pixel grid encoding.
//!
//! A pure transform: the matrix is validated, normalized, quantized to
//! levels and mapped through the scheme's forward ramp. No I/O happens
//! here; the PNG container is the writer's concern.

use tracing::debug;

use crate::codec::colormap::Color;
use crate::codec::common::error::{CodecError, Result};
use crate::codec::matrix::types::Matrix;
use crate::codec::png::types::{EncodeConfig, ImageMetadata, PixelGrid};
use crate::codec::quantize::Normalization;

/// Encodes a matrix into a pixel grid plus the metadata needed to invert
/// the mapping.
///
/// Values outside an explicit `z_range` override fail with `RangeError`
/// unless `clamp_out_of_range` is set, in which case they clamp to the
/// range ends (lossy at the tails, by design). With an inferred range no
/// value can fall outside it.
///
/// With `config.transpose` the matrix is flipped about its diagonal first,
/// so data indexed `[x][y]` renders with x running horizontally. Error
/// coordinates then refer to the transposed orientation.
pub fn encode(matrix: &Matrix, config: &EncodeConfig) -> Result<(PixelGrid, ImageMetadata)> {
    let transposed;
    let matrix = if config.transpose {
        transposed = matrix.transpose();
        &transposed
    } else {
        matrix
    };
    check_finite(matrix)?;

    let levels = config.scheme.levels();
    let normalization = match config.z_range {
        Some((z_min, z_max)) => Normalization::new(z_min, z_max, levels)?,
        None => Normalization::from_matrix(matrix, levels)?,
    };

    debug!(
        "Encoding {}x{} matrix with {} ({} levels, range [{}, {}])",
        matrix.rows, matrix.cols, config.scheme.name(), levels, normalization.z_min, normalization.z_max
    );

    let format = config.scheme.pixel_format();
    let mut data = Vec::with_capacity(matrix.rows * matrix.cols * format.bytes_per_pixel());
    for row in 0..matrix.rows {
        for col in 0..matrix.cols {
            let raw = normalization.quantize(matrix.get(row, col));
            let level = if config.clamp_out_of_range {
                raw.clamp(0, (levels - 1) as i64) as u32
            } else if raw < 0 || raw >= levels as i64 {
                return Err(CodecError::RangeError { level: raw, levels, row, col });
            } else {
                raw as u32
            };
            match config.scheme.forward(level)? {
                Color::Gray(intensity) => data.push(intensity),
                Color::Rgb(rgb) => data.extend_from_slice(&rgb),
            }
        }
    }

    let mut grid = PixelGrid::new(matrix.cols, matrix.rows, format, data)?;
    if config.y_ascend_up {
        grid.flip_vertical();
    }

    let metadata = ImageMetadata {
        scheme: config.scheme,
        normalization,
        z_units: config.z_units.clone(),
        x_min: 0.0,
        x_max: matrix.cols as f64,
        x_units: None,
        y_min: 0.0,
        y_max: matrix.rows as f64,
        y_units: None,
        y_ascend_up: config.y_ascend_up,
    };
    Ok((grid, metadata))
}

fn check_finite(matrix: &Matrix) -> Result<()> {
    for row in 0..matrix.rows {
        for col in 0..matrix.cols {
            if !matrix.get(row, col).is_finite() {
                return Err(CodecError::NonFiniteValueError { row, col });
            }
        }
    }
    Ok(())
}
