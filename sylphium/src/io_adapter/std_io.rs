use super::IoAdapter;
use crate::error::Result;
use std::io::{self, ErrorKind, Read, Write};

type ClearHook<IO> = Box<dyn FnMut(&mut IO) -> io::Result<()>>;

/// Adapter for anything implementing [`std::io::Read`] and [`std::io::Write`].
///
/// Generic streams can't report how many bytes are pending, so discarding stale input is
/// delegated to a hook supplied by the caller. The hook has to leave nothing readable behind
/// that was received before the call, otherwise responses left unread by the waveform
/// generators shift every following exchange by one frame.
pub struct StdIoAdapter<IO: Read + Write> {
    io: IO,
    clear: ClearHook<IO>,
}

impl<IO: Read + Write> IoAdapter for StdIoAdapter<IO> {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.io.write_all(buf)?;
        self.io.flush()?;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.io.read(buf) {
            Ok(count) => Ok(count),
            Err(e) if e.kind() == ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn clear_input(&mut self) -> Result<()> {
        (self.clear)(&mut self.io)?;
        Ok(())
    }
}

impl<IO: Read + Write> StdIoAdapter<IO> {
    /// Wraps `io`, calling `clear` whenever pending input has to be discarded
    pub fn new<F>(io: IO, clear: F) -> Self
    where
        F: FnMut(&mut IO) -> io::Result<()> + 'static,
    {
        StdIoAdapter {
            io,
            clear: Box::new(clear),
        }
    }

    pub fn into_inner(self) -> IO {
        self.io
    }
}
