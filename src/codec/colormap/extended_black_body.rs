//! Extended Black Body colormap.
//!
//! A perceptually ordered ramp from black through red and yellow to white,
//! defined as a piecewise-linear path through the RGB cube:
//!
//! ```text
//! (0,0,0) -> (255,0,0) -> (255,255,0) -> (255,255,255)
//! ```
//!
//! Each of the three segments advances exactly one channel in 255 unit
//! steps, for 766 levels total. Every level therefore maps to a distinct RGB
//! triple and Rec. 709 luminance increases strictly with the level, which
//! makes the ramp exactly invertible.
//!
//! The inverse direction is served by a lookup table keyed by RGB triple,
//! built once on first use from the forward ramp. Construction asserts that
//! no two levels collide on the same triple rather than trusting the ramp
//! arithmetic blindly.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::codec::common::error::{CodecError, Result};

/// Ramp control points: black, red, yellow, white.
const CONTROL_POINTS: [[u8; 3]; 4] = [
    [0, 0, 0],
    [255, 0, 0],
    [255, 255, 0],
    [255, 255, 255],
];

/// Unit steps per ramp segment.
const SEGMENT_STEPS: u32 = 255;

pub const LEVELS: u32 = SEGMENT_STEPS * (CONTROL_POINTS.len() as u32 - 1) + 1;

static INVERSE_TABLE: OnceLock<HashMap<[u8; 3], u16>> = OnceLock::new();

/// Maps a quantization level to its RGB triple.
pub fn forward(level: u32) -> Result<[u8; 3]> {
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
    Ok(ramp(level))
}

/// Maps an RGB triple back to its level, or `None` if the triple is not on
/// the ramp. A `None` here is how the decoder detects corruption or a PNG
/// that was never produced by this scheme.
pub fn inverse(color: [u8; 3]) -> Option<u32> {
    inverse_table().get(&color).map(|&level| level as u32)
}

/// Piecewise-linear interpolation between the control points. With the
/// corner-walk control points every step moves exactly one channel by one,
/// so the interpolation is exact in integer arithmetic.
fn ramp(level: u32) -> [u8; 3] {
    if level == 0 {
        return CONTROL_POINTS[0];
    }
    let segment = ((level - 1) / SEGMENT_STEPS) as usize;
    let step = (level - segment as u32 * SEGMENT_STEPS) as i32;

    let start = CONTROL_POINTS[segment];
    let end = CONTROL_POINTS[segment + 1];
    let mut rgb = [0u8; 3];
    for channel in 0..3 {
        let lo = start[channel] as i32;
        let hi = end[channel] as i32;
        rgb[channel] = (lo + (hi - lo) * step / SEGMENT_STEPS as i32) as u8;
    }
    rgb
}

fn inverse_table() -> &'static HashMap<[u8; 3], u16> {
    INVERSE_TABLE.get_or_init(|| {
        let mut table = HashMap::with_capacity(LEVELS as usize);
        for level in 0..LEVELS {
            let previous = table.insert(ramp(level), level as u16);
            // Injectivity of the ramp is what makes decoding well-defined,
            // so a collision must fail at table build time, not at decode.
            assert!(
                previous.is_none(),
                "extended black body ramp is not injective: levels {} and {} share {:?}",
                previous.unwrap_or_default(),
                level,
                ramp(level)
            );
        }
        table
    })
}
