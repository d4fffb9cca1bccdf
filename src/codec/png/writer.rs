use std::io::Write;

use crate::codec::common::error::Result;
use crate::codec::png::types::{EncodeConfig, ImageMetadata, PixelGrid};

pub trait PngWriter {
    fn write_png(
        &self,
        grid: &PixelGrid,
        metadata: &ImageMetadata,
        output: &mut dyn Write,
        config: &EncodeConfig,
    ) -> Result<()>;
}
