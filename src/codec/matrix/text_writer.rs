//! Plain-text matrix writer.
//!
//! Emits one comma-separated line per matrix row. Floats are written with
//! Rust's shortest round-trip formatting, so `TextMatrixReader` recovers the
//! exact same `f64` values.

use std::io::Write;

use tracing::debug;

use crate::codec::common::error::Result;
use crate::codec::matrix::types::Matrix;
use crate::codec::matrix::writer::MatrixWriter;

pub struct TextMatrixWriter;

impl MatrixWriter for TextMatrixWriter {
    fn write_matrix(&self, matrix: &Matrix, output: &mut dyn Write) -> Result<()> {
        debug!("Writing matrix: {}x{}", matrix.rows, matrix.cols);
        for row in 0..matrix.rows {
            for col in 0..matrix.cols {
                if col > 0 {
                    output.write_all(b",")?;
                }
                write!(output, "{}", matrix.get(row, col))?;
            }
            output.write_all(b"\n")?;
        }
        Ok(())
    }
}
