//! Matrix reading and writing module
//!
//! This module provides the in-memory matrix type and the plain-text file
//! format used at the CLI boundary.

mod reader;
mod text_reader;
mod text_writer;
mod writer;
pub mod types;

pub use reader::MatrixReader;
pub use text_reader::TextMatrixReader;
pub use text_writer::TextMatrixWriter;
pub use types::Matrix;
pub use writer::MatrixWriter;
