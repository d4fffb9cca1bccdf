//! Store 2-D matrices as human-readable PNG files and recover them.

pub mod codec;
pub mod logger;
