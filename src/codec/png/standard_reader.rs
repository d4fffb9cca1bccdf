//! PNG reader implementation using the png library.
//!
//! Decodes the image into a pixel grid and recovers the metadata text
//! chunks. Only the lossless color types a matrix PNG can legitimately use
//! are accepted: 8-bit grayscale and 8-bit RGB truecolor. Anything else
//! (palette, alpha, 16-bit) is rejected as a format mismatch rather than
//! silently converted.

use std::io::Cursor;

use tracing::debug;

use crate::codec::common::error::{CodecError, Result};
use crate::codec::png::reader::PngReader;
use crate::codec::png::types::{PixelFormat, PixelGrid, RecoveredMetadata};

pub struct StandardPngReader;

impl PngReader for StandardPngReader {
    fn read_png(&self, data: &[u8]) -> Result<(PixelGrid, RecoveredMetadata)> {
        debug!("Decoding PNG image, {} bytes", data.len());

        let decoder = png::Decoder::new(Cursor::new(data));
        let mut reader = decoder
            .read_info()
            .map_err(|e| CodecError::DecodeError(e.to_string()))?;

        let mut buffer = vec![0; reader.output_buffer_size()];
        let frame = reader
            .next_frame(&mut buffer)
            .map_err(|e| CodecError::DecodeError(e.to_string()))?;
        buffer.truncate(frame.buffer_size());

        if frame.bit_depth != png::BitDepth::Eight {
            return Err(CodecError::UnsupportedFormat(format!(
                "PNG bit depth {:?}, expected 8",
                frame.bit_depth
            )));
        }
        let format = match frame.color_type {
            png::ColorType::Grayscale => PixelFormat::Grayscale,
            png::ColorType::Rgb => PixelFormat::Rgb,
            other => {
                return Err(CodecError::UnsupportedFormat(format!(
                    "PNG color type {:?}, expected grayscale or RGB truecolor",
                    other
                )));
            }
        };

        let info = reader.info();
        let mut metadata = RecoveredMetadata::default();
        for chunk in &info.utf8_text {
            let text = chunk
                .get_text()
                .map_err(|e| CodecError::DecodeError(e.to_string()))?;
            metadata.apply_chunk(&chunk.keyword, &text)?;
        }
        for chunk in &info.uncompressed_latin1_text {
            metadata.apply_chunk(&chunk.keyword, &chunk.text)?;
        }

        debug!(
            "Decoded PNG: {}x{}, {:?}, scheme {:?}",
            frame.width, frame.height, format, metadata.scheme
        );

        let grid = PixelGrid::new(frame.width as usize, frame.height as usize, format, buffer)?;
        Ok((grid, metadata))
    }
}
