use crate::{
    codec::*,
    error::{Error, Result},
    flags::{EnableTarget, ModShape, ModulationTarget},
    io_adapter::IoAdapter,
    opcode::OpCode,
    param,
    waveform::WaveformBuffer,
};

/// Sample period used by the waveform generators unless specified otherwise
pub const DEFAULT_SAMPLE_PERIOD: i32 = 1000;

/// Single controller on a transport.
///
/// Every operation is one blocking exchange: pending input is discarded, a request frame is
/// written and exactly one 10 byte response is read back. Nothing is pipelined or retried.
/// Sharing one transport between several instances or threads needs a lock around every call,
/// otherwise responses end up being read by the wrong caller.
pub struct Sylphium<IO>
where
    IO: IoAdapter,
{
    io: IO,
    address: u8,
}

impl<IO> Sylphium<IO>
where
    IO: IoAdapter,
{
    pub fn new(io: IO, address: u8) -> Self {
        Sylphium { io, address }
    }

    /// Bus address of the controller
    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Gives back the transport, closing it is up to the caller
    pub fn into_inner(self) -> IO {
        self.io
    }

    /// View over the arbitrary waveform sample buffer
    pub fn waveform(&mut self) -> WaveformBuffer<'_, IO> {
        WaveformBuffer::new(self)
    }

    fn send_package(&mut self, frame: &Frame) -> Result<()> {
        log::trace!("Sending {:02X?}", frame);
        self.io.write_all(frame)
    }

    fn receive_package(&mut self) -> Result<Frame> {
        let mut frame = [0u8; FRAME_SIZE];
        let mut top = 0;
        while top < FRAME_SIZE {
            let read_bytes = self.io.read(&mut frame[top..])?;
            if read_bytes == 0 {
                break;
            }
            top += read_bytes;
        }
        log::trace!("Received {:02X?}", &frame[..top]);
        if top < FRAME_SIZE {
            return Err(Error::FrameLength {
                expected: FRAME_SIZE,
                actual: top,
            });
        }
        Ok(frame)
    }

    /// Clears stale input, then sends `request` and waits for a response.
    ///
    /// Clearing only guards against leftovers of an earlier exchange that was cut short, it does
    /// not guarantee frame alignment since the protocol has no delimiters or checksums.
    fn transaction(&mut self, request: &Frame) -> Result<Frame> {
        self.io.clear_input()?;
        self.send_package(request)?;
        self.receive_package()
    }

    /// Sends an arbitrary request and returns the raw response without checking it for errors
    pub fn exchange(&mut self, request: &Frame) -> Result<Frame> {
        self.transaction(request)
    }

    /// Same as [`Self::transaction`], but turns an error response into [`Error::Device`]
    fn checked_transaction(&mut self, request: &Frame) -> Result<Frame> {
        let response = self.transaction(request)?;
        let (_, opcode) = decode_header(&response)?;
        if opcode == OpCode::Error.code() {
            let (code, extra) = decode_error(&response)?;
            log::debug!("Device {} reported error {} ({})", self.address, code, extra);
            return Err(Error::Device { code, extra });
        }
        Ok(response)
    }

    pub fn write(&mut self, key: u32, value: i32) -> Result<()> {
        self.checked_transaction(&encode_write_int(self.address, key, value))?;
        Ok(())
    }

    pub fn write_float(&mut self, key: u32, value: f32) -> Result<()> {
        self.checked_transaction(&encode_write_float(self.address, key, value))?;
        Ok(())
    }

    pub fn read(&mut self, key: u32) -> Result<i32> {
        let response = self.checked_transaction(&encode_read(self.address, key))?;
        let (_, value) = decode_read(&response)?;
        Ok(value)
    }

    pub fn read_float(&mut self, key: u32) -> Result<f32> {
        let response = self.checked_transaction(&encode_read(self.address, key))?;
        let (_, value) = decode_read_float(&response)?;
        Ok(value)
    }

    /// Writes a word of I2C memory, returns the value echoed by the device
    pub fn mem_write(&mut self, addr: u32, value: i32) -> Result<i32> {
        let request =
            encode_action_mem_uint(self.address, OpCode::I2cMemWrite, addr, value as u32);
        let response = self.checked_transaction(&request)?;
        let (_, value) = decode_action(&response)?;
        Ok(value)
    }

    pub fn mem_read(&mut self, addr: u32) -> Result<u32> {
        let request = encode_action_int(self.address, OpCode::I2cMemRead, addr, 0);
        let response = self.checked_transaction(&request)?;
        let (_, value) = decode_action_mem(&response)?;
        Ok(value)
    }

    pub fn mem_write_float(&mut self, addr: u32, value: f32) -> Result<f32> {
        let request = encode_action_float(self.address, OpCode::I2cMemWrite, addr, value);
        let response = self.checked_transaction(&request)?;
        let (_, value) = decode_action_mem_float(&response)?;
        Ok(value)
    }

    pub fn mem_read_float(&mut self, addr: u32) -> Result<f32> {
        let request = encode_action_int(self.address, OpCode::I2cMemRead, addr, 0);
        let response = self.checked_transaction(&request)?;
        let (_, value) = decode_action_mem_float(&response)?;
        Ok(value)
    }

    // Firmware doesn't reliably report errors for enable requests, the response is consumed to
    // keep the stream in sync but its content is ignored.
    fn enable(&mut self, target: EnableTarget, state: bool) -> Result<()> {
        let request = encode_action_int(
            self.address,
            OpCode::SetEnable,
            target.code(),
            i32::from(state),
        );
        self.transaction(&request)?;
        Ok(())
    }

    /// Switches laser output. Never fails with [`Error::Device`]
    pub fn enable_output(&mut self, state: bool) -> Result<()> {
        self.enable(EnableTarget::Output, state)
    }

    /// Switches main power stage. Never fails with [`Error::Device`]
    pub fn enable_main_power(&mut self, state: bool) -> Result<()> {
        self.enable(EnableTarget::Power, state)
    }

    /// Enters constant current mode with `current` as the set-point
    pub fn constant_current(&mut self, current: f32) -> Result<()> {
        let request = encode_action_float(self.address, OpCode::SetCurrentControl, 0, current);
        self.checked_transaction(&request)?;
        Ok(())
    }

    /// Starts or stops modulation.
    ///
    /// When starting, `single_shot` takes precedence over `periodic`, with neither set the
    /// sample buffer is played continuously. Stopping ignores both flags.
    pub fn modulation(&mut self, state: bool, single_shot: bool, periodic: bool) -> Result<()> {
        let (target, value) = match (state, single_shot, periodic) {
            (false, _, _) => (ModulationTarget::Run, 0),
            (true, true, _) => (ModulationTarget::SingleShot, 1),
            (true, false, true) => (ModulationTarget::Periodic, 1),
            (true, false, false) => (ModulationTarget::Run, 1),
        };
        let request = encode_action_int(self.address, OpCode::SetModulation, target.code(), value);
        self.checked_transaction(&request)?;
        Ok(())
    }

    fn generate(&mut self, shape: ModShape, params: [f32; 4], sample_period: i32) -> Result<()> {
        log::debug!("Generating {:?} waveform with {:?}", shape, params);
        let keys = [
            param::MOD_PARAM0,
            param::MOD_PARAM1,
            param::MOD_PARAM2,
            param::MOD_PARAM3,
        ];
        for (key, value) in keys.into_iter().zip(params) {
            self.write_float(key, value)?;
        }
        self.write(param::MOD_SAMPLERATE, sample_period)?;
        self.write(param::MOD_LENGTH, param::MOD_FILL_LENGTH)?;
        // Response to the fill request is left unread, the clear step of the next transaction
        // discards it
        let request = encode_action_int(
            self.address,
            OpCode::SetModulation,
            ModulationTarget::Fill.code(),
            shape.code() as i32,
        );
        self.send_package(&request)
    }

    /// Fills the sample buffer with a sine wave. `phase` is usually 0 and `sample_period`
    /// usually [`DEFAULT_SAMPLE_PERIOD`].
    pub fn generate_sine(
        &mut self,
        amplitude: f32,
        offset: f32,
        frequency: f32,
        phase: f32,
        sample_period: i32,
    ) -> Result<()> {
        self.generate(
            ModShape::Sine,
            [amplitude, offset, frequency, phase],
            sample_period,
        )
    }

    /// Fills the sample buffer with a pulse train. `sample_period` is usually
    /// [`DEFAULT_SAMPLE_PERIOD`].
    pub fn generate_pulse(
        &mut self,
        amplitude: f32,
        offset: f32,
        duty_cycle: f32,
        sample_period: i32,
    ) -> Result<()> {
        self.generate(
            ModShape::Pulse,
            [amplitude, offset, duty_cycle, 0.0],
            sample_period,
        )
    }
}
