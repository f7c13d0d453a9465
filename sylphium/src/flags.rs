use crate::error::Error;
use num_derive::{FromPrimitive, ToPrimitive};

/// Declares an option enumeration together with its wire code conversions
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(ToPrimitive, FromPrimitive, Debug, PartialEq, Eq, Clone, Copy, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $code,)+
        }

        impl $name {
            /// Code used on the wire, either as a key or as a value depending on the op-code
            pub const fn code(self) -> u32 {
                self as u32
            }
        }

        impl TryFrom<u32> for $name {
            type Error = Error;

            fn try_from(c: u32) -> Result<Self, Self::Error> {
                num_traits::FromPrimitive::from_u32(c).ok_or(Error::InvalidOption(stringify!($name)))
            }
        }

        impl TryFrom<i32> for $name {
            type Error = Error;

            fn try_from(c: i32) -> Result<Self, Self::Error> {
                num_traits::FromPrimitive::from_i32(c).ok_or(Error::InvalidOption(stringify!($name)))
            }
        }
    };
}

option_enum! {
    /// Subsystem switched by [`OpCode::SetEnable`](crate::OpCode::SetEnable)
    EnableTarget {
        Output = 0,
        Power = 1,
        Photodiode = 2,
        PhotodiodeControl = 3,
    }
}

option_enum! {
    /// Sub-command of [`OpCode::SetModulation`](crate::OpCode::SetModulation)
    ModulationTarget {
        Run = 0,
        /// Fill sample buffer using a built-in generator, value is a [`ModShape`]
        Fill = 1,
        SingleShot = 2,
        Periodic = 3,
    }
}

option_enum! {
    /// Waveform shape used by [`ModulationTarget::Fill`]
    ModShape {
        Pulse = 0,
        Sine = 1,
    }
}

option_enum! {
    CurrentRange {
        Range3A = 0,
        Range300mA = 1,
    }
}

option_enum! {
    TriggerPolarity {
        Positive = 0,
        Negative = 1,
    }
}

option_enum! {
    /// Photodiode transimpedance gain
    PdGain {
        Gain1k = 0,
        Gain10k = 1,
        Gain100k = 2,
        Gain1M = 3,
    }
}

option_enum! {
    PdBias {
        Bias0V = 0,
        Bias5V = 1,
    }
}

option_enum! {
    InterlockStrategy {
        Normal = 0,
        Secondary = 1,
        SecondaryInverted = 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    #[test]
    fn firmware_codes() {
        assert_eq!(EnableTarget::Output.code(), 0);
        assert_eq!(EnableTarget::Power.code(), 1);
        assert_eq!(EnableTarget::PhotodiodeControl.code(), 3);
        assert_eq!(ModulationTarget::Fill.code(), 1);
        assert_eq!(ModulationTarget::Periodic.code(), 3);
        assert_eq!(ModShape::Sine.code(), 1);
        assert_eq!(PdGain::Gain1M.code(), 3);
        assert_eq!(InterlockStrategy::SecondaryInverted.code(), 2);
    }

    #[test]
    fn options_from_device_values() {
        assert_ok_eq!(CurrentRange::try_from(1i32), CurrentRange::Range300mA);
        assert_ok_eq!(TriggerPolarity::try_from(0u32), TriggerPolarity::Positive);
        assert_matches!(PdBias::try_from(2i32), Err(Error::InvalidOption("PdBias")));
        assert_err!(ModShape::try_from(-1i32));
    }
}
