use mockall::mock;
use std::io::{Read, Write};
use sylphium::{codec, hex_parser, Frame, OpCode};

/// Frame written as hex, panics on malformed input
pub fn hex_frame(hex: &str) -> Frame {
    let data = hex_parser::decode_hex(hex).expect("Failed to parse hex frame");
    data.try_into().expect("Hex frame is not 10 bytes long")
}

/// Successful response echoing `key` and `value`
pub fn ack_frame(address: u8, opcode: OpCode, key: u32, value: i32) -> Frame {
    codec::encode_action_int(address, opcode, key, value)
}

pub fn ack_float_frame(address: u8, opcode: OpCode, key: u32, value: f32) -> Frame {
    codec::encode_action_float(address, opcode, key, value)
}

pub fn error_frame(address: u8, code: u32, extra: i32) -> Frame {
    codec::encode_action_int(address, OpCode::Error, code, extra)
}

mock! {
    pub IO {}
    impl Read for IO {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize>;
    }
    impl Write for IO {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize>;
        fn flush(&mut self) -> std::io::Result<()>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_frame_ignores_spacing() {
        assert_eq!(
            hex_frame(" 01 02 00000014  00000C80 "),
            ack_frame(0x01, OpCode::Read, 20, 3200)
        );
    }

    #[test]
    #[should_panic(expected = "not 10 bytes")]
    fn hex_frame_rejects_short_input() {
        hex_frame("01 02 0000");
    }

    #[test]
    #[should_panic(expected = "Failed to parse")]
    fn hex_frame_rejects_non_hex() {
        hex_frame("01 02 NOT HEX");
    }

    #[test]
    fn frames() {
        assert_eq!(
            hex_frame("01 7F 00000005 00000002"),
            error_frame(0x01, 5, 2)
        );
    }
}
