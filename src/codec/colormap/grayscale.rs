//! Grayscale colormap: the identity ramp over one 8-bit channel.

use crate::codec::common::error::{CodecError, Result};

pub const LEVELS: u32 = 256;

/// Maps a quantization level to its intensity byte. The mapping is the
/// identity, so every byte is a valid scheme output.
pub fn forward(level: u32) -> Result<u8> {
    if level >= LEVELS {
        // No cell context at the ramp; the encoder's own range check
        // reports the offending coordinates before levels reach here.
        return Err(CodecError::RangeError {
            level: level as i64,
            levels: LEVELS,
            row: 0,
            col: 0,
        });
    }
    Ok(level as u8)
}

#[inline]
pub fn inverse(intensity: u8) -> u32 {
    intensity as u32
}
