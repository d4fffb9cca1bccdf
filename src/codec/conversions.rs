//! Pipeline conversions module
//!
//! This module contains orchestration logic for the matrix to PNG and PNG
//! to matrix conversions.

mod matrix_to_png;
mod png_to_matrix;
mod tests;

pub use matrix_to_png::MatrixToPngPipeline;
pub use png_to_matrix::PngToMatrixPipeline;
