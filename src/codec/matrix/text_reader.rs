//! Plain-text matrix reader.
//!
//! Parses the simple text format used by the CLI: one matrix row per line,
//! cells separated by commas and/or whitespace. Blank lines are skipped and
//! `#` starts a line comment.

use tracing::debug;

use crate::codec::common::error::{CodecError, Result};
use crate::codec::matrix::reader::MatrixReader;
use crate::codec::matrix::types::Matrix;

pub struct TextMatrixReader;

impl MatrixReader for TextMatrixReader {
    fn read_matrix(&self, data: &[u8]) -> Result<Matrix> {
        let text = std::str::from_utf8(data)
            .map_err(|e| CodecError::MatrixParseError(format!("input is not UTF-8: {}", e)))?;

        let mut values = Vec::new();
        let mut rows = 0usize;
        let mut cols = 0usize;

        for (lineno, raw_line) in text.lines().enumerate() {
            let line = match raw_line.split_once('#') {
                Some((before, _)) => before,
                None => raw_line,
            }
            .trim();
            if line.is_empty() {
                continue;
            }

            let mut row_len = 0usize;
            for cell in line.split(|c: char| c == ',' || c.is_whitespace()) {
                if cell.is_empty() {
                    continue;
                }
                let value: f64 = cell.parse().map_err(|_| {
                    CodecError::MatrixParseError(format!(
                        "line {}: invalid number '{}'",
                        lineno + 1,
                        cell
                    ))
                })?;
                values.push(value);
                row_len += 1;
            }

            if rows == 0 {
                cols = row_len;
            } else if row_len != cols {
                return Err(CodecError::MatrixParseError(format!(
                    "line {}: expected {} columns, got {}",
                    lineno + 1,
                    cols,
                    row_len
                )));
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(CodecError::MatrixParseError("no matrix rows found".to_string()));
        }

        debug!("Parsed matrix: {}x{}", rows, cols);
        Matrix::new(rows, cols, values)
    }
}
