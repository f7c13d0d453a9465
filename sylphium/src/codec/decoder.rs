use super::FRAME_SIZE;
use crate::{
    error::{Error, Result},
    opcode::OpCode,
};
use nom::{
    number::complete::{be_f32, be_i32, be_u32, be_u8},
    sequence::tuple,
    IResult,
};

type Fields<V> = (u8, u8, u32, V);

/// Splits the first [`FRAME_SIZE`] bytes of `input` into header, key and a value read by `value`.
/// Shorter input is never partially interpreted.
fn parse_frame<'a, V, F>(input: &'a [u8], value: F) -> Result<Fields<V>>
where
    F: FnMut(&'a [u8]) -> IResult<&'a [u8], V>,
{
    if input.len() < FRAME_SIZE {
        return Err(Error::FrameLength {
            expected: FRAME_SIZE,
            actual: input.len(),
        });
    }
    let (_, fields) = tuple((be_u8, be_u8, be_u32, value))(&input[..FRAME_SIZE])
        .map_err(|_: nom::Err<nom::error::Error<&[u8]>>| Error::InvalidData("Malformed frame"))?;
    Ok(fields)
}

/// Returns `(address, opcode)`, usable on any frame to classify it before decoding the body
pub fn decode_header(frame: &[u8]) -> Result<(u8, u8)> {
    let (address, opcode, _, _) = parse_frame(frame, be_u32)?;
    Ok((address, opcode))
}

/// Typed op-code of any frame
pub fn decode_opcode(frame: &[u8]) -> Result<OpCode> {
    let (_, opcode) = decode_header(frame)?;
    OpCode::try_from(opcode)
}

/// Returns `(error_code, extra)` of a frame carrying [`OpCode::Error`](crate::OpCode::Error)
pub fn decode_error(frame: &[u8]) -> Result<(u32, i32)> {
    let (_, _, code, extra) = parse_frame(frame, be_i32)?;
    Ok((code, extra))
}

pub fn decode_read(frame: &[u8]) -> Result<(u32, i32)> {
    let (_, _, key, value) = parse_frame(frame, be_i32)?;
    Ok((key, value))
}

pub fn decode_read_float(frame: &[u8]) -> Result<(u32, f32)> {
    let (_, _, key, value) = parse_frame(frame, be_f32)?;
    Ok((key, value))
}

pub fn decode_action(frame: &[u8]) -> Result<(u32, i32)> {
    let (_, _, key, value) = parse_frame(frame, be_i32)?;
    Ok((key, value))
}

pub fn decode_action_mem(frame: &[u8]) -> Result<(u32, u32)> {
    let (_, _, addr, value) = parse_frame(frame, be_u32)?;
    Ok((addr, value))
}

pub fn decode_action_mem_float(frame: &[u8]) -> Result<(u32, f32)> {
    let (_, _, addr, value) = parse_frame(frame, be_f32)?;
    Ok((addr, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::*;
    use claims::*;

    #[test]
    fn decode_int_responses() {
        let frame = encode_write_int(0x01, 17, -123_456);
        assert_ok_eq!(decode_read(&frame), (17, -123_456));
        assert_ok_eq!(decode_action(&frame), (17, -123_456));
        assert_ok_eq!(decode_header(&frame), (0x01, OpCode::Write.code()));

        let frame = encode_write_int(0x01, u32::MAX, i32::MAX);
        assert_ok_eq!(decode_read(&frame), (u32::MAX, i32::MAX));
    }

    #[test]
    fn decode_float_responses_bit_exact() {
        for value in [0.1f32, -0.0, f32::MIN_POSITIVE, f32::MAX, 1e-42] {
            let frame = encode_write_float(0x07, 1010, value);
            let (key, decoded) = decode_read_float(&frame).unwrap();
            assert_eq!(key, 1010);
            assert_eq!(decoded.to_bits(), value.to_bits());
        }
        let frame = encode_action_float(0x01, OpCode::I2cMemWrite, 0x50, 3.25);
        assert_ok_eq!(decode_action_mem_float(&frame), (0x50, 3.25));
    }

    #[test]
    fn decode_mem_response_unsigned() {
        let frame = encode_action_mem_uint(0x01, OpCode::I2cMemRead, 0xA0, 0xFFFF_FFFE);
        assert_ok_eq!(decode_action_mem(&frame), (0xA0, 0xFFFF_FFFE));
        // The same bytes read as a signed action value
        assert_ok_eq!(decode_action(&frame), (0xA0, -2));
    }

    #[test]
    fn decode_error_frame() {
        let frame = [0x01, 0x7F, 0x00, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00, 0x02];
        assert_ok_eq!(decode_header(&frame), (0x01, 0x7F));
        assert_ok_eq!(decode_error(&frame), (5, 2));
        assert_ok_eq!(decode_opcode(&frame), OpCode::Error);
    }

    #[test]
    fn decode_unknown_opcode() {
        let frame = [0x01, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert_matches!(decode_opcode(&frame), Err(Error::UnknownOpCode(0x42)));
        assert_ok_eq!(decode_header(&frame), (0x01, 0x42));
    }

    #[test]
    fn reject_short_frames() {
        let frame = encode_read(0x01, 20);
        for len in 0..FRAME_SIZE {
            let short = &frame[..len];
            assert_matches!(
                decode_header(short),
                Err(Error::FrameLength { expected: FRAME_SIZE, actual }) if actual == len
            );
            assert_err!(decode_error(short));
            assert_err!(decode_read(short));
            assert_err!(decode_read_float(short));
            assert_err!(decode_action(short));
            assert_err!(decode_action_mem(short));
            assert_err!(decode_action_mem_float(short));
        }
    }

    #[test]
    fn ignore_bytes_past_frame() {
        let mut long = encode_write_int(0x01, 20, 5).to_vec();
        long.extend_from_slice(&[0xAA, 0xBB]);
        assert_ok_eq!(decode_read(&long), (20, 5));
    }
}
