//! Colormap module
//!
//! This module defines the reversible colormap schemes: the bidirectional
//! mapping between quantization levels and pixel colors.

pub mod extended_black_body;
pub mod grayscale;
mod types;

pub use types::{Color, Scheme};
