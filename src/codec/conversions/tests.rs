#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};
    use std::sync::{Arc, Mutex};

    use crate::codec::colormap::Scheme;
    use crate::codec::common::error::{CodecError, Result};
    use crate::codec::conversions::matrix_to_png::MatrixToPngPipeline;
    use crate::codec::conversions::png_to_matrix::PngToMatrixPipeline;
    use crate::codec::matrix::types::Matrix;
    use crate::codec::matrix::{MatrixReader, MatrixWriter};
    use crate::codec::png::types::{
        DecodeConfig, EncodeConfig, ImageMetadata, PixelFormat, PixelGrid, RecoveredMetadata,
    };
    use crate::codec::png::{PngReader, PngWriter};

    struct MockMatrixReader {
        should_fail: bool,
        mock_matrix: Option<Matrix>,
    }

    impl MatrixReader for MockMatrixReader {
        fn read_matrix(&self, _data: &[u8]) -> Result<Matrix> {
            if self.should_fail {
                return Err(CodecError::MatrixParseError("Mock parse error".to_string()));
            }
            Ok(self
                .mock_matrix
                .clone()
                .unwrap_or(Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap()))
        }
    }

    struct MockPngWriter {
        should_fail: bool,
        written_grids: Arc<Mutex<Vec<PixelGrid>>>,
    }

    impl PngWriter for MockPngWriter {
        fn write_png(
            &self,
            grid: &PixelGrid,
            _metadata: &ImageMetadata,
            _output: &mut dyn Write,
            _config: &EncodeConfig,
        ) -> Result<()> {
            if self.should_fail {
                return Err(CodecError::EncodeError("Mock encode error".to_string()));
            }
            self.written_grids.lock().unwrap().push(grid.clone());
            Ok(())
        }
    }

    struct MockPngReader {
        should_fail: bool,
        mock_result: Option<(PixelGrid, RecoveredMetadata)>,
    }

    impl PngReader for MockPngReader {
        fn read_png(&self, _data: &[u8]) -> Result<(PixelGrid, RecoveredMetadata)> {
            if self.should_fail {
                return Err(CodecError::DecodeError("Mock decode error".to_string()));
            }
            Ok(self.mock_result.clone().unwrap_or_else(|| {
                let grid =
                    PixelGrid::new(2, 2, PixelFormat::Grayscale, vec![0, 64, 128, 255]).unwrap();
                let metadata = RecoveredMetadata {
                    scheme: Some(Scheme::Grayscale),
                    z_min: Some(0.0),
                    z_max: Some(255.0),
                    y_ascend_up: Some(false),
                    ..Default::default()
                };
                (grid, metadata)
            }))
        }
    }

    struct MockMatrixWriter {
        should_fail: bool,
        written_matrices: Arc<Mutex<Vec<Matrix>>>,
    }

    impl MatrixWriter for MockMatrixWriter {
        fn write_matrix(&self, matrix: &Matrix, _output: &mut dyn Write) -> Result<()> {
            if self.should_fail {
                return Err(CodecError::OutputWriteError("Mock write error".to_string()));
            }
            self.written_matrices.lock().unwrap().push(matrix.clone());
            Ok(())
        }
    }

    fn encode_config(scheme: Scheme) -> EncodeConfig {
        EncodeConfig::builder().scheme(scheme).build()
    }

    #[test]
    fn test_encode_pipeline_success() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let pipeline = MatrixToPngPipeline::with_custom(
            MockMatrixReader { should_fail: false, mock_matrix: None },
            MockPngWriter { should_fail: false, written_grids: written.clone() },
            encode_config(Scheme::Grayscale),
        );

        let mut output = Cursor::new(Vec::new());
        assert!(pipeline.convert(b"unused", &mut output).is_ok());

        let grids = written.lock().unwrap();
        assert_eq!(grids.len(), 1);
        assert_eq!(grids[0].width, 2);
        assert_eq!(grids[0].height, 2);
    }

    #[test]
    fn test_encode_pipeline_reader_failure() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let pipeline = MatrixToPngPipeline::with_custom(
            MockMatrixReader { should_fail: true, mock_matrix: None },
            MockPngWriter { should_fail: false, written_grids: written.clone() },
            encode_config(Scheme::Grayscale),
        );

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"unused", &mut output);
        assert!(matches!(result, Err(CodecError::MatrixParseError(_))));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_encode_pipeline_writer_failure() {
        let pipeline = MatrixToPngPipeline::with_custom(
            MockMatrixReader { should_fail: false, mock_matrix: None },
            MockPngWriter { should_fail: true, written_grids: Arc::new(Mutex::new(Vec::new())) },
            encode_config(Scheme::Grayscale),
        );

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"unused", &mut output);
        assert!(matches!(result, Err(CodecError::EncodeError(_))));
    }

    #[test]
    fn test_decode_pipeline_success() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let pipeline = PngToMatrixPipeline::with_custom(
            MockPngReader { should_fail: false, mock_result: None },
            MockMatrixWriter { should_fail: false, written_matrices: written.clone() },
            DecodeConfig::default(),
        );

        let mut output = Cursor::new(Vec::new());
        assert!(pipeline.convert(b"unused", &mut output).is_ok());

        let matrices = written.lock().unwrap();
        assert_eq!(matrices.len(), 1);
        assert_eq!(matrices[0].data, vec![0.0, 64.0, 128.0, 255.0]);
    }

    #[test]
    fn test_decode_pipeline_dimension_mismatch() {
        let pipeline = PngToMatrixPipeline::with_custom(
            MockPngReader { should_fail: false, mock_result: None },
            MockMatrixWriter {
                should_fail: false,
                written_matrices: Arc::new(Mutex::new(Vec::new())),
            },
            DecodeConfig::builder().expected_dimensions(3, 2).build(),
        );

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"unused", &mut output);
        assert!(matches!(
            result,
            Err(CodecError::DimensionMismatchError {
                expected_rows: 3,
                expected_cols: 2,
                rows: 2,
                cols: 2,
            })
        ));
    }

    #[test]
    fn test_decode_pipeline_missing_metadata() {
        let grid = PixelGrid::new(1, 1, PixelFormat::Grayscale, vec![0]).unwrap();
        let pipeline = PngToMatrixPipeline::with_custom(
            MockPngReader {
                should_fail: false,
                mock_result: Some((grid, RecoveredMetadata::default())),
            },
            MockMatrixWriter {
                should_fail: false,
                written_matrices: Arc::new(Mutex::new(Vec::new())),
            },
            DecodeConfig::default(),
        );

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"unused", &mut output);
        assert!(matches!(result, Err(CodecError::MissingMetadataError(key)) if key == "colormap"));
    }

    #[test]
    fn test_decode_pipeline_config_supplies_missing_metadata() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let grid = PixelGrid::new(1, 2, PixelFormat::Grayscale, vec![0, 255]).unwrap();
        let metadata = RecoveredMetadata { y_ascend_up: Some(false), ..Default::default() };
        let pipeline = PngToMatrixPipeline::with_custom(
            MockPngReader { should_fail: false, mock_result: Some((grid, metadata)) },
            MockMatrixWriter { should_fail: false, written_matrices: written.clone() },
            DecodeConfig::builder()
                .scheme(Scheme::Grayscale)
                .z_range(0.0, 1.0)
                .build(),
        );

        let mut output = Cursor::new(Vec::new());
        assert!(pipeline.convert(b"unused", &mut output).is_ok());
        assert_eq!(written.lock().unwrap()[0].data, vec![0.0, 1.0]);
    }

    #[test]
    fn test_full_round_trip_grayscale_exact() {
        let input = b"0,128,255\n64,192,32\n";

        let encoder = MatrixToPngPipeline::new(encode_config(Scheme::Grayscale));
        let mut png_bytes = Vec::new();
        encoder.convert(input, &mut png_bytes).unwrap();

        let decoder = PngToMatrixPipeline::new(DecodeConfig::default());
        let mut text = Vec::new();
        decoder.convert(&png_bytes, &mut text).unwrap();

        // Range [0, 255] matches the bucket width exactly, so the round
        // trip loses nothing.
        assert_eq!(String::from_utf8(text).unwrap(), "0,128,255\n64,192,32\n");
    }

    #[test]
    fn test_full_round_trip_extended_black_body_within_bound() {
        let input = b"1.0,2.0\n3.0,4.0\n";

        let encoder = MatrixToPngPipeline::new(encode_config(Scheme::ExtendedBlackBody));
        let mut png_bytes = Vec::new();
        encoder.convert(input, &mut png_bytes).unwrap();

        let decoder = PngToMatrixPipeline::new(DecodeConfig::default());
        let mut text = Vec::new();
        decoder.convert(&png_bytes, &mut text).unwrap();

        let recovered = crate::codec::matrix::TextMatrixReader
            .read_matrix(&text)
            .unwrap();
        let bound = 3.0 / (2.0 * 765.0);
        for (original, decoded) in [1.0, 2.0, 3.0, 4.0].iter().zip(&recovered.data) {
            assert!((original - decoded).abs() <= bound);
        }
    }

    #[test]
    fn test_convert_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let matrix_path = dir.path().join("input.txt");
        let png_path = dir.path().join("matrix.png");
        let output_path = dir.path().join("recovered.txt");

        std::fs::write(&matrix_path, "0,128,255\n64,192,32\n").unwrap();

        MatrixToPngPipeline::new(encode_config(Scheme::Grayscale))
            .convert_file(&matrix_path, &png_path)
            .unwrap();
        PngToMatrixPipeline::new(DecodeConfig::default())
            .convert_file(&png_path, &output_path)
            .unwrap();

        let recovered = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(recovered, "0,128,255\n64,192,32\n");
    }

    #[test]
    fn test_convert_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = MatrixToPngPipeline::new(encode_config(Scheme::Grayscale))
            .convert_file(dir.path().join("absent.txt"), dir.path().join("out.png"));
        assert!(matches!(result, Err(CodecError::InputReadError(_))));
    }
}
