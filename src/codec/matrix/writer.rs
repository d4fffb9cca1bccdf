use std::io::Write;

use crate::codec::common::error::Result;
use crate::codec::matrix::types::Matrix;

pub trait MatrixWriter {
    fn write_matrix(&self, matrix: &Matrix, output: &mut dyn Write) -> Result<()>;
}
