pub(crate) mod std_io;
#[cfg(feature = "serial")]
pub(crate) mod serial;

use crate::{device::Sylphium, error::Result};

/// Duplex byte transport connecting the host to one or more controllers
pub trait IoAdapter {
    fn write_all(&mut self, buf: &[u8]) -> Result<()>;

    /// Blocks until some data is available. `Ok(0)` means no more data will arrive, which
    /// includes transports hitting their configured read timeout.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Discards bytes that were received but not read yet. Best effort, transports that can't
    /// tell what is pending may do nothing.
    fn clear_input(&mut self) -> Result<()>;

    fn open_sylphium(self, address: u8) -> Sylphium<Self>
    where
        Self: Sized,
    {
        Sylphium::new(self, address)
    }
}
