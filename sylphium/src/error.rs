use core::result::Result as CoreResult;
use thiserror::Error;

pub type Result<T> = CoreResult<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Expected a frame of {expected} bytes, got {actual}")]
    FrameLength { expected: usize, actual: usize },
    #[error("Device responded with error code {code} (extra: {extra})")]
    Device { code: u32, extra: i32 },
    #[error("Unknown op-code 0x{0:02X}")]
    UnknownOpCode(u8),
    #[error("{0} is not a valid option value")]
    InvalidOption(&'static str),
    #[error("Could not parse received data correctly: {0}")]
    InvalidData(&'static str),

    #[error("{0}")]
    IOError(#[from] std::io::Error),
}
