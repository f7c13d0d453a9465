use super::IoAdapter;
use crate::error::Result;
use serialport::{ClearBuffer, SerialPort};
use std::io::{ErrorKind, Read, Write};

/// Adapter for a port opened with the `serialport` crate. Read timeout configured on the port
/// bounds how long a transaction waits for a response.
pub struct SerialAdapter<P: SerialPort + ?Sized> {
    port: Box<P>,
}

impl<P: SerialPort + ?Sized> IoAdapter for SerialAdapter<P> {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.port.write_all(buf)?;
        self.port.flush()?;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.port.read(buf) {
            Ok(count) => Ok(count),
            Err(e) if e.kind() == ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn clear_input(&mut self) -> Result<()> {
        let pending = self.port.bytes_to_read().map_err(std::io::Error::from)?;
        if pending > 0 {
            log::warn!("Discarding {} stale bytes", pending);
            self.port
                .clear(ClearBuffer::Input)
                .map_err(std::io::Error::from)?;
        }
        Ok(())
    }
}

impl<P: SerialPort + ?Sized> SerialAdapter<P> {
    pub fn new(port: Box<P>) -> Self {
        SerialAdapter { port }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn into_inner(self) -> Box<P> {
        self.port
    }
}
