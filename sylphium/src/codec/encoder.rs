use super::{Frame, FRAME_SIZE};
use crate::opcode::OpCode;

fn pack(address: u8, opcode: u8, key: u32, value: [u8; 4]) -> Frame {
    let mut frame = [0u8; FRAME_SIZE];
    frame[0] = address;
    frame[1] = opcode;
    frame[2..6].copy_from_slice(&key.to_be_bytes());
    frame[6..].copy_from_slice(&value);
    frame
}

pub fn encode_write_int(address: u8, key: u32, value: i32) -> Frame {
    pack(address, OpCode::Write.code(), key, value.to_be_bytes())
}

pub fn encode_write_float(address: u8, key: u32, value: f32) -> Frame {
    pack(address, OpCode::Write.code(), key, value.to_be_bytes())
}

/// Read request, value field is zero-filled
pub fn encode_read(address: u8, key: u32) -> Frame {
    pack(address, OpCode::Read.code(), key, [0; 4])
}

pub fn encode_action_int(address: u8, opcode: OpCode, key: u32, value: i32) -> Frame {
    pack(address, opcode.code(), key, value.to_be_bytes())
}

pub fn encode_action_float(address: u8, opcode: OpCode, key: u32, value: f32) -> Frame {
    pack(address, opcode.code(), key, value.to_be_bytes())
}

/// Memory operations address the I2C space with unsigned values
pub fn encode_action_mem_uint(address: u8, opcode: OpCode, addr: u32, value: u32) -> Frame {
    pack(address, opcode.code(), addr, value.to_be_bytes())
}
