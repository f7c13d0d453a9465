
use crate::{codec::Frame, error::Result, io_adapter::IoAdapter};
use std::collections::VecDeque;

/// Transport replaying scripted responses and recording everything written to it
#[derive(Default)]
pub(crate) struct FakePort {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<Vec<u8>>,
    /// Bytes sitting in the input buffer, filled by the next scripted response on write
    pub pending: VecDeque<u8>,
    pub clears: usize,
}

impl FakePort {
    pub fn with_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Frame>,
    {
        FakePort {
            responses: responses.into_iter().map(|f| f.to_vec()).collect(),
            ..Default::default()
        }
    }

    pub fn push_raw(&mut self, response: &[u8]) {
        self.responses.push_back(response.to_vec());
    }
}

impl IoAdapter for FakePort {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.sent.push(buf.to_vec());
        if let Some(response) = self.responses.pop_front() {
            self.pending.extend(response);
        }
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let count = buf.len().min(self.pending.len());
        for (dst, src) in buf.iter_mut().zip(self.pending.drain(..count)) {
            *dst = src;
        }
        Ok(count)
    }

    fn clear_input(&mut self) -> Result<()> {
        self.clears += 1;
        self.pending.clear();
        Ok(())
    }
}

/// Response to a successful request, echoing key and value
pub(crate) fn ack_int(key: u32, value: i32) -> Frame {
    crate::codec::encode_write_int(0x01, key, value)
}

pub(crate) fn ack_float(key: u32, value: f32) -> Frame {
    crate::codec::encode_write_float(0x01, key, value)
}

pub(crate) fn error_frame(code: u32, extra: i32) -> Frame {
    let mut frame = crate::codec::encode_write_int(0x01, code, extra);
    frame[1] = crate::OpCode::Error.code();
    frame
}
