use crate::codec::common::error::Result;
use crate::codec::png::types::{PixelGrid, RecoveredMetadata};

pub trait PngReader {
    fn read_png(&self, data: &[u8]) -> Result<(PixelGrid, RecoveredMetadata)>;
}
