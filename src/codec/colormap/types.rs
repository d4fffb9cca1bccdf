//! Colormap scheme types

use crate::codec::colormap::{extended_black_body, grayscale};
use crate::codec::common::error::{CodecError, Result};
use crate::codec::png::types::PixelFormat;

/// A color sample produced by a colormap scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Gray(u8),
    Rgb([u8; 3]),
}

/// Named colormap schemes.
///
/// For a fixed scheme, `forward` is a pure, deterministic, injective
/// function on `[0, levels - 1]` and `inverse` is its exact left inverse,
/// so distinct levels never collide on a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Identity mapping over one 8-bit channel, 256 levels.
    Grayscale,
    /// Black -> red -> yellow -> white RGB ramp, 766 levels.
    ExtendedBlackBody,
}

impl Scheme {
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Grayscale => "grayscale",
            Scheme::ExtendedBlackBody => "extended_black_body",
        }
    }

    /// Resolves a scheme identifier. `ebb` is accepted as the historical
    /// short name for the Extended Black Body scheme.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "grayscale" => Ok(Scheme::Grayscale),
            "extended_black_body" | "ebb" => Ok(Scheme::ExtendedBlackBody),
            other => Err(CodecError::UnknownSchemeError(other.to_string())),
        }
    }

    /// Number of representable quantization levels.
    pub fn levels(&self) -> u32 {
        match self {
            Scheme::Grayscale => grayscale::LEVELS,
            Scheme::ExtendedBlackBody => extended_black_body::LEVELS,
        }
    }

    /// Pixel layout this scheme produces.
    pub fn pixel_format(&self) -> PixelFormat {
        match self {
            Scheme::Grayscale => PixelFormat::Grayscale,
            Scheme::ExtendedBlackBody => PixelFormat::Rgb,
        }
    }

    /// Maps a level in `[0, levels - 1]` to a color. Out-of-range levels
    /// fail with `RangeError`.
    pub fn forward(&self, level: u32) -> Result<Color> {
        match self {
            Scheme::Grayscale => Ok(Color::Gray(grayscale::forward(level)?)),
            Scheme::ExtendedBlackBody => Ok(Color::Rgb(extended_black_body::forward(level)?)),
        }
    }

    /// Maps a color back to its level. Returns `None` for any color the
    /// scheme cannot produce, including a color of the wrong pixel layout.
    pub fn inverse(&self, color: Color) -> Option<u32> {
        match (self, color) {
            (Scheme::Grayscale, Color::Gray(intensity)) => Some(grayscale::inverse(intensity)),
            (Scheme::ExtendedBlackBody, Color::Rgb(rgb)) => extended_black_body::inverse(rgb),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for scheme in [Scheme::Grayscale, Scheme::ExtendedBlackBody] {
            assert_eq!(Scheme::from_name(scheme.name()).unwrap(), scheme);
        }
    }

    #[test]
    fn test_historical_short_name() {
        assert_eq!(Scheme::from_name("ebb").unwrap(), Scheme::ExtendedBlackBody);
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(
            Scheme::from_name("viridis"),
            Err(CodecError::UnknownSchemeError(_))
        ));
    }

    #[test]
    fn test_bijective_through_dispatch() {
        for scheme in [Scheme::Grayscale, Scheme::ExtendedBlackBody] {
            for level in 0..scheme.levels() {
                let color = scheme.forward(level).unwrap();
                assert_eq!(scheme.inverse(color), Some(level));
            }
        }
    }

    #[test]
    fn test_inverse_rejects_wrong_format() {
        assert_eq!(Scheme::Grayscale.inverse(Color::Rgb([0, 0, 0])), None);
        assert_eq!(Scheme::ExtendedBlackBody.inverse(Color::Gray(0)), None);
    }
}
