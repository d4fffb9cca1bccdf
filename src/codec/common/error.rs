use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to parse matrix data: {0}")]
    MatrixParseError(String),

    #[error("Matrix contains a non-finite value at row {row}, col {col}")]
    NonFiniteValueError { row: usize, col: usize },

    #[error("Degenerate value range: z_min={z_min}, z_max={z_max}")]
    DegenerateRangeError { z_min: f64, z_max: f64 },

    #[error("Quantized level {level} at row {row}, col {col} is outside [0, {levels})")]
    RangeError {
        level: i64,
        levels: u32,
        row: usize,
        col: usize,
    },

    #[error("Pixel at row {row}, col {col} is not a valid colormap output: {color:?}")]
    UnknownColorError { row: usize, col: usize, color: [u8; 3] },

    #[error("Dimension mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    DimensionMismatchError {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Unknown colormap scheme: {0}")]
    UnknownSchemeError(String),

    #[error("Failed to decode PNG image: {0}")]
    DecodeError(String),

    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),

    #[error("Missing metadata field: {0}")]
    MissingMetadataError(String),

    #[error("Invalid metadata field {key}: {value}")]
    InvalidMetadataError { key: String, value: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
