//! Encoding and decoding of the fixed 10 byte frames.
//!
//! Layout, all fields big-endian:
//!
//! | byte  | 0         | 1        | 2..6                  | 6..10                 |
//! |-------|-----------|----------|-----------------------|-----------------------|
//! | field | address   | op-code  | key or memory address | value (i32, u32, f32) |
//!
//! Nothing in the frame describes how the value should be interpreted, that is decided by which
//! function is used to encode or decode it.

mod decoder;
mod encoder;

pub use decoder::*;
pub use encoder::*;

/// Size of every request and response
pub const FRAME_SIZE: usize = 10;

/// Raw request or response
pub type Frame = [u8; FRAME_SIZE];
