use crate::codec::common::error::Result;
use crate::codec::matrix::types::Matrix;

pub trait MatrixReader {
    fn read_matrix(&self, data: &[u8]) -> Result<Matrix>;
}
