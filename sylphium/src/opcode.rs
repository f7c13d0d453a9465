use crate::error::Error;
use core::fmt::{self, Display};
use num_derive::{FromPrimitive, ToPrimitive};

/// Operation code carried in the second byte of every frame
#[derive(ToPrimitive, FromPrimitive, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OpCode {
    Write = 0x01,
    Read = 0x02,
    SetCurrentControl = 0x03,
    SetEnable = 0x04,
    SetModulation = 0x05,
    I2cMemWrite = 0x19,
    I2cMemRead = 0x20,
    /// Only ever sent by the device, body carries `(error_code, extra)`
    Error = 0x7F,
}

impl OpCode {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> u8 {
        op.code()
    }
}

impl TryFrom<u8> for OpCode {
    type Error = Error;

    fn try_from(c: u8) -> Result<Self, Error> {
        num_traits::FromPrimitive::from_u8(c).ok_or(Error::UnknownOpCode(c))
    }
}

impl Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpCode::Write => "WRITE",
            OpCode::Read => "READ",
            OpCode::SetCurrentControl => "SET_CURRENT_CONTROL",
            OpCode::SetEnable => "SET_ENABLE",
            OpCode::SetModulation => "SET_MODULATION",
            OpCode::I2cMemWrite => "I2C_MEM_WRITE",
            OpCode::I2cMemRead => "I2C_MEM_READ",
            OpCode::Error => "ERROR",
        };
        f.write_str(name)
    }
}
