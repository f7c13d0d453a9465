//! Host side driver for the Sylphium laser-diode controller.
//!
//! Controllers are reached over a serial link using fixed size 10 byte frames. See [`codec`]
//! for the frame layout, [`Sylphium`] for the request/response operations and [`param`] for
//! the parameter keys understood by the firmware.
//!
//! ```no_run
//! # fn main() -> sylphium::Result<()> {
//! use sylphium::{param, IoAdapter, StdIoAdapter};
//! # let port = std::io::Cursor::new(Vec::<u8>::new());
//! let mut laser = StdIoAdapter::new(port, |port| {
//!     port.get_mut().clear();
//!     port.set_position(0);
//!     Ok(())
//! })
//! .open_sylphium(1);
//! laser.write_float(param::I_LIMIT, 0.5)?;
//! laser.enable_main_power(true)?;
//! laser.constant_current(0.25)?;
//! laser.enable_output(true)?;
//! println!("Measured current: {}", laser.read_float(param::I_MEAS)?);
//! # Ok(())
//! # }
//! ```

pub mod codec;
mod device;
pub mod error;
pub mod flags;
pub mod hex_parser;
mod io_adapter;
mod opcode;
pub mod param;
mod waveform;

#[cfg(test)]
mod tests;

pub use codec::{Frame, FRAME_SIZE};
pub use device::{Sylphium, DEFAULT_SAMPLE_PERIOD};
pub use error::{Error, Result};
pub use io_adapter::{std_io::StdIoAdapter, IoAdapter};
pub use opcode::OpCode;
pub use waveform::WaveformBuffer;

#[cfg(feature = "serial")]
pub use io_adapter::serial::SerialAdapter;

/// Version of this driver
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
