//! Shared normalization and quantization utilities.
//!
//! Quantization is the sole source of round-trip imprecision: a recovered
//! matrix equals the original bucketed into `levels` equally spaced values
//! between `z_min` and `z_max`, with a per-cell error bound of
//! `(z_max - z_min) / (2 * (levels - 1))`.

use crate::codec::common::error::{CodecError, Result};
use crate::codec::matrix::types::Matrix;

/// Normalization parameters for one encode or decode call.
///
/// Computed once per encode (from the matrix range or an explicit override)
/// and required, identically, at decode time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub z_min: f64,
    pub z_max: f64,
    pub levels: u32,
}

impl Normalization {
    pub fn new(z_min: f64, z_max: f64, levels: u32) -> Result<Self> {
        // Schemes always supply levels >= 2; the range is caller data.
        assert!(levels >= 2, "normalization requires at least two levels");
        if !z_min.is_finite() || !z_max.is_finite() || z_max <= z_min {
            return Err(CodecError::DegenerateRangeError { z_min, z_max });
        }
        Ok(Self { z_min, z_max, levels })
    }

    /// Infers the range from the matrix in a single pass. Assumes the matrix
    /// has already been checked for non-finite values.
    pub fn from_matrix(matrix: &Matrix, levels: u32) -> Result<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &value in &matrix.data {
            min = min.min(value);
            max = max.max(value);
        }
        Self::new(min, max, levels)
    }

    /// Width of one quantization bucket.
    pub fn delta(&self) -> f64 {
        (self.z_max - self.z_min) / (self.levels - 1) as f64
    }

    /// Worst-case per-cell reconstruction error.
    pub fn max_quantization_error(&self) -> f64 {
        self.delta() / 2.0
    }

    /// Quantizes a value to a raw level. The result is unclamped and may
    /// fall outside `[0, levels - 1]` when the value lies outside the range.
    pub fn quantize(&self, value: f64) -> i64 {
        let normalized = (value - self.z_min) / (self.z_max - self.z_min);
        (normalized * (self.levels - 1) as f64).round() as i64
    }

    /// Reconstructs the representative value of a level. The top level is
    /// pinned to `z_max` so that a range inferred from a recovered matrix
    /// is bit-identical to the original and a second encode/decode trip
    /// reproduces the recovered matrix exactly.
    pub fn reconstruct(&self, level: u32) -> f64 {
        if level == self.levels - 1 {
            self.z_max
        } else {
            self.z_min + level as f64 * self.delta()
        }
    }
}
