//! Common utilities module
//!
//! This module contains shared types used across the matrix-PNG codec.

pub mod error;

pub use error::{CodecError, Result};
