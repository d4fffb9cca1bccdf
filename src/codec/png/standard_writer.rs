//! PNG writer implementation using the png library.
//!
//! Writes the pixel grid as an 8-bit grayscale or RGB truecolor PNG, both
//! strictly lossless, and persists the normalization metadata as iTXt text
//! chunks so the image stays self-describing.

use std::io::Write;

use tracing::debug;

use crate::codec::common::error::{CodecError, Result};
use crate::codec::png::types::{EncodeConfig, ImageMetadata, PixelFormat, PixelGrid, PngCompression};
use crate::codec::png::writer::PngWriter;

pub struct StandardPngWriter;

impl PngWriter for StandardPngWriter {
    fn write_png(
        &self,
        grid: &PixelGrid,
        metadata: &ImageMetadata,
        output: &mut dyn Write,
        config: &EncodeConfig,
    ) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", grid.width, grid.height);

        let mut buffer = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buffer, grid.width as u32, grid.height as u32);
            encoder.set_color(match grid.format {
                PixelFormat::Grayscale => png::ColorType::Grayscale,
                PixelFormat::Rgb => png::ColorType::Rgb,
            });
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_compression(match config.compression {
                PngCompression::Fast => png::Compression::Fast,
                PngCompression::Default => png::Compression::Default,
                PngCompression::Best => png::Compression::Best,
            });

            for (keyword, text) in metadata.text_chunks() {
                encoder
                    .add_itxt_chunk(keyword, text)
                    .map_err(|e| CodecError::EncodeError(e.to_string()))?;
            }

            let mut writer = encoder
                .write_header()
                .map_err(|e| CodecError::EncodeError(e.to_string()))?;
            writer
                .write_image_data(&grid.data)
                .map_err(|e| CodecError::EncodeError(e.to_string()))?;
            writer
                .finish()
                .map_err(|e| CodecError::EncodeError(e.to_string()))?;
        }

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
