use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::codec::{
    common::error::{CodecError, Result},
    encode::encode,
    matrix::{MatrixReader, TextMatrixReader},
    png::{EncodeConfig, PngWriter, StandardPngWriter},
};

pub struct MatrixToPngPipeline<R: MatrixReader, W: PngWriter> {
    reader: R,
    writer: W,
    config: EncodeConfig,
}

impl MatrixToPngPipeline<TextMatrixReader, StandardPngWriter> {
    pub fn new(config: EncodeConfig) -> Self {
        Self {
            reader: TextMatrixReader,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: MatrixReader, W: PngWriter> MatrixToPngPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: EncodeConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    #[instrument(skip(self, input, output), fields(input_size = input.len()))]
    pub fn convert(&self, input: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting matrix to PNG conversion");

        let matrix = {
            let _span = tracing::info_span!("parse_matrix").entered();
            self.reader.read_matrix(input)?
        };

        let (grid, metadata) = {
            let _span = tracing::info_span!("encode_matrix",
                rows = matrix.rows,
                cols = matrix.cols
            )
            .entered();
            encode(&matrix, &self.config)?
        };

        {
            let _span = tracing::info_span!("write_png").entered();
            self.writer.write_png(&grid, &metadata, output, &self.config)?;
        }

        info!(
            rows = matrix.rows,
            cols = matrix.cols,
            scheme = metadata.scheme.name(),
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
            "Encoding file"
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

    pub fn config(&self) -> &EncodeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EncodeConfig) {
        self.config = config;
    }
}
