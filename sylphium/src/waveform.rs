use crate::{device::Sylphium, error::Result, io_adapter::IoAdapter, param::MOD_DATA_START};

/// Arbitrary waveform sample buffer seen as an array of `f32`.
///
/// Samples are not cached, every access is a transaction with the device. Indices are not
/// checked locally, out of range samples are rejected by the device with [`Error::Device`].
///
/// [`Error::Device`]: crate::Error::Device
pub struct WaveformBuffer<'a, IO>
where
    IO: IoAdapter,
{
    device: &'a mut Sylphium<IO>,
}

impl<'a, IO> WaveformBuffer<'a, IO>
where
    IO: IoAdapter,
{
    pub fn new(device: &'a mut Sylphium<IO>) -> Self {
        WaveformBuffer { device }
    }

    fn key(index: u32) -> u32 {
        MOD_DATA_START.wrapping_add(index)
    }

    pub fn get(&mut self, index: u32) -> Result<f32> {
        self.device.read_float(Self::key(index))
    }

    pub fn set(&mut self, index: u32, value: f32) -> Result<()> {
        self.device.write_float(Self::key(index), value)
    }

    /// Writes `samples` starting at `start`, one transaction per sample. Stops at the first
    /// failed sample.
    pub fn upload(&mut self, start: u32, samples: &[f32]) -> Result<()> {
        log::debug!("Uploading {} samples at {}", samples.len(), start);
        for (index, sample) in (start..).zip(samples) {
            self.set(index, *sample)?;
        }
        Ok(())
    }

    /// Reads `len` samples starting at `start`
    pub fn download(&mut self, start: u32, len: usize) -> Result<Vec<f32>> {
        log::debug!("Downloading {} samples at {}", len, start);
        (start..).take(len).map(|index| self.get(index)).collect()
    }
}
