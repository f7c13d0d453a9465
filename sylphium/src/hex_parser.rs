//! Conversions between frames and their human readable hex form, e.g. `01 02 00 00 00 14 00 00 00 00`
use crate::error::{Error, Result};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::space0,
    combinator::{all_consuming, map_res},
    multi::many1,
    sequence::delimited,
    IResult,
};

/// Decodes a pair of chars formatted as hex into a byte. For example "FF" -> 255
fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |hex| u8::from_str_radix(hex, 16),
    )(input)
}

pub(crate) fn parse_hex_str(input: &str) -> IResult<&str, Vec<u8>> {
    all_consuming(many1(delimited(space0, hex_byte, space0)))(input)
}

pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let (_, data) = parse_hex_str(input.trim()).map_err(|_| Error::InvalidData("Not a hex string"))?;
    Ok(data)
}

pub fn encode_hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use nom::{
        error::{make_error, ErrorKind},
        Err::Error,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_byte_parser() {
        assert_eq!(hex_byte("FF"), Ok(("", 255)));
        assert_eq!(hex_byte("ff"), Ok(("", 255)));
        assert!(hex_byte("NH").is_err());
    }

    #[test]
    fn hex_str_parser() {
        assert_eq!(
            parse_hex_str("DEADBEEF"),
            Ok(("", vec![0xDE, 0xAD, 0xBE, 0xEF]))
        );
        assert_eq!(
            parse_hex_str(" DE   AD BEEF    "),
            Ok(("", vec![0xDE, 0xAD, 0xBE, 0xEF]))
        );
        assert_eq!(
            parse_hex_str("NOT HEX"),
            Err(Error(make_error("NOT HEX", ErrorKind::TakeWhileMN)))
        );
        assert_eq!(
            parse_hex_str("DE AD BE EF NO TH EX"),
            Err(Error(make_error("NO TH EX", ErrorKind::Eof)))
        );
    }

    #[test]
    fn frame_hex_round_trip() {
        let frame = crate::codec::encode_read(0x01, 20);
        let hex = encode_hex(&frame);
        assert_eq!(hex, "01 02 00 00 00 14 00 00 00 00");
        assert_ok_eq!(decode_hex(&hex), frame.to_vec());
        assert_err!(decode_hex("01 0"));
    }
}
