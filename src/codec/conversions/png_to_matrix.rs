use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::codec::{
    colormap::Scheme,
    common::error::{CodecError, Result},
    decode::decode,
    matrix::{MatrixWriter, TextMatrixWriter},
    png::{DecodeConfig, PngReader, RecoveredMetadata, StandardPngReader},
    quantize::Normalization,
};

pub struct PngToMatrixPipeline<R: PngReader, W: MatrixWriter> {
    reader: R,
    writer: W,
    config: DecodeConfig,
}

impl PngToMatrixPipeline<StandardPngReader, TextMatrixWriter> {
    pub fn new(config: DecodeConfig) -> Self {
        Self {
            reader: StandardPngReader,
            writer: TextMatrixWriter,
            config,
        }
    }
}

impl<R: PngReader, W: MatrixWriter> PngToMatrixPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: DecodeConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Resolves the scheme and normalization for a decode: the caller's
    /// config wins, then the PNG's own metadata; a parameter available from
    /// neither is a `MissingMetadataError`.
    fn resolve_normalization(
        &self,
        metadata: &RecoveredMetadata,
    ) -> Result<(Scheme, Normalization)> {
        let scheme = self
            .config
            .scheme
            .or(metadata.scheme)
            .ok_or_else(|| CodecError::MissingMetadataError("colormap".to_string()))?;

        let (z_min, z_max) = match self.config.z_range {
            Some(range) => range,
            None => {
                let z_min = metadata
                    .z_min
                    .ok_or_else(|| CodecError::MissingMetadataError("z_min".to_string()))?;
                let z_max = metadata
                    .z_max
                    .ok_or_else(|| CodecError::MissingMetadataError("z_max".to_string()))?;
                (z_min, z_max)
            }
        };

        Ok((scheme, Normalization::new(z_min, z_max, scheme.levels())?))
    }

    #[instrument(skip(self, input, output), fields(input_size = input.len()))]
    pub fn convert(&self, input: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting PNG to matrix conversion");

        let (mut grid, metadata) = {
            let _span = tracing::info_span!("read_png").entered();
            self.reader.read_png(input)?
        };

        if let Some((rows, cols)) = self.config.expected_dimensions {
            if grid.height != rows || grid.width != cols {
                return Err(CodecError::DimensionMismatchError {
                    expected_rows: rows,
                    expected_cols: cols,
                    rows: grid.height,
                    cols: grid.width,
                });
            }
        }

        let (scheme, normalization) = self.resolve_normalization(&metadata)?;

        // Undo the vertical flip applied when the y axis ascends upward,
        // so matrix row 0 comes back first.
        if metadata.y_ascend_up.unwrap_or(true) {
            grid.flip_vertical();
        }

        let matrix = {
            let _span = tracing::info_span!("decode_png",
                rows = grid.height,
                cols = grid.width
            )
            .entered();
            decode(&grid, scheme, &normalization)?
        };

        {
            let _span = tracing::info_span!("write_matrix").entered();
            self.writer.write_matrix(&matrix, output)?;
        }

        info!(
            rows = matrix.rows,
            cols = matrix.cols,
            scheme = scheme.name(),
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Decoding file"
        );

        let input_data = std::fs::read(input_path).map_err(|e| {
            CodecError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;

        let mut output_file = std::fs::File::create(output_path).map_err(|e| {
            CodecError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })?;

        self.convert(&input_data, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DecodeConfig) {
        self.config = config;
    }
}
