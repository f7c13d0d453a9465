//! Parameter keys understood by the controller firmware.
//!
//! Keys form a flat `u32` namespace. The value type of each parameter (integer or float) is not
//! encoded anywhere on the wire, the caller picks [`Sylphium::read`](crate::Sylphium::read) or
//! [`Sylphium::read_float`](crate::Sylphium::read_float) accordingly.

// Status and measurements
pub const I_MEAS: u32 = 0;
pub const VIN: u32 = 1;
pub const I_MON_HS: u32 = 2;
pub const V_MON_LP: u32 = 3;
pub const V_MON_LM: u32 = 4;
pub const EXT_PD: u32 = 5;
pub const EXT_MOD: u32 = 6;
pub const PD_SIGNAL: u32 = 7;
pub const OUTPUT_EN: u32 = 8;
pub const POWER_OK: u32 = 9;
pub const TEMP_0: u32 = 10;
pub const TEMP_1: u32 = 11;
pub const TEMP_2: u32 = 12;
pub const TEMP_3: u32 = 13;
pub const INTERLOCK_OK: u32 = 15;
pub const LASER_OK: u32 = 16;
pub const TRIGGER_CNT: u32 = 17;

// Set-points
pub const V_SET: u32 = 20;
pub const I_LIMIT: u32 = 21;
pub const TRIG_LVL: u32 = 22;
pub const PD_THOLD: u32 = 23;
/// See [`TriggerPolarity`](crate::flags::TriggerPolarity)
pub const TRIG_POL: u32 = 24;
/// See [`CurrentRange`](crate::flags::CurrentRange)
pub const IRANGE: u32 = 25;
pub const PD_EN: u32 = 26;
/// See [`PdGain`](crate::flags::PdGain)
pub const PD_GAIN: u32 = 27;
/// See [`PdBias`](crate::flags::PdBias)
pub const PD_BIAS: u32 = 28;
pub const POWER_EN: u32 = 29;

// Running averages
pub const PD_AVG: u32 = 30;
pub const PD_RMS: u32 = 31;
pub const I_AVG: u32 = 32;
pub const I_RMS: u32 = 33;
pub const VD_AVG: u32 = 34;
pub const VD_RMS: u32 = 35;
pub const P_AVG: u32 = 36;
pub const P_RMS: u32 = 37;

pub const VDROP: u32 = 38;
pub const PD_CTRL: u32 = 39;

// Calibration
pub const LSET_GAIN: u32 = 40;
pub const LSET_OFFSET: u32 = 41;
pub const DAC_OFFSET: u32 = 42;
pub const CURRENT_GAIN: u32 = 43;

// I/O
pub const IO_IN: u32 = 50;
pub const OPTO_IN: u32 = 51;
pub const IO_OUT: u32 = 52;
pub const OPTO_OUT: u32 = 53;

// Interlock
/// See [`InterlockStrategy`](crate::flags::InterlockStrategy)
pub const INTERLOCK_STRATEGY: u32 = 55;
pub const INTERLOCK_DELAY: u32 = 56;

// Device identity
pub const SERIAL_NUMBER: u32 = 136;
pub const FIRMWARE_VER: u32 = 137;
pub const UPTIME: u32 = 138;

// Modulation
pub const MOD_PARAM0: u32 = 1010;
pub const MOD_PARAM1: u32 = 1011;
pub const MOD_PARAM2: u32 = 1012;
pub const MOD_PARAM3: u32 = 1013;

pub const MOD_LENGTH: u32 = 1020;
pub const MOD_STATE: u32 = 1021;
pub const MOD_REPEAT_PERIOD: u32 = 1022;
pub const MOD_SAMPLERATE: u32 = 1023;
/// First sample slot of the arbitrary waveform buffer, sample `n` lives at `MOD_DATA_START + n`
pub const MOD_DATA_START: u32 = 1024;

/// Number of samples written by the firmware waveform generators
pub const MOD_FILL_LENGTH: i32 = 1000;

/// Firmware names of all parameters, used to look keys up by name
pub const NAMES: &[(&str, u32)] = &[
    ("I_MEAS", I_MEAS),
    ("VIN", VIN),
    ("I_MON_HS", I_MON_HS),
    ("V_MON_LP", V_MON_LP),
    ("V_MON_LM", V_MON_LM),
    ("EXT_PD", EXT_PD),
    ("EXT_MOD", EXT_MOD),
    ("PD_SIGNAL", PD_SIGNAL),
    ("OUTPUT_EN", OUTPUT_EN),
    ("POWER_OK", POWER_OK),
    ("TEMP_0", TEMP_0),
    ("TEMP_1", TEMP_1),
    ("TEMP_2", TEMP_2),
    ("TEMP_3", TEMP_3),
    ("INTERLOCK_OK", INTERLOCK_OK),
    ("LASER_OK", LASER_OK),
    ("TRIGGER_CNT", TRIGGER_CNT),
    ("V_SET", V_SET),
    ("I_LIMIT", I_LIMIT),
    ("TRIG_LVL", TRIG_LVL),
    ("PD_THOLD", PD_THOLD),
    ("TRIG_POL", TRIG_POL),
    ("IRANGE", IRANGE),
    ("PD_EN", PD_EN),
    ("PD_GAIN", PD_GAIN),
    ("PD_BIAS", PD_BIAS),
    ("POWER_EN", POWER_EN),
    ("PD_AVG", PD_AVG),
    ("PD_RMS", PD_RMS),
    ("I_AVG", I_AVG),
    ("I_RMS", I_RMS),
    ("VD_AVG", VD_AVG),
    ("VD_RMS", VD_RMS),
    ("P_AVG", P_AVG),
    ("P_RMS", P_RMS),
    ("VDROP", VDROP),
    ("PD_CTRL", PD_CTRL),
    ("LSET_GAIN", LSET_GAIN),
    ("LSET_OFFSET", LSET_OFFSET),
    ("DAC_OFFSET", DAC_OFFSET),
    ("CURRENT_GAIN", CURRENT_GAIN),
    ("IO_IN", IO_IN),
    ("OPTO_IN", OPTO_IN),
    ("IO_OUT", IO_OUT),
    ("OPTO_OUT", OPTO_OUT),
    ("INTERLOCK_STRATEGY", INTERLOCK_STRATEGY),
    ("INTERLOCK_DELAY", INTERLOCK_DELAY),
    ("SERIAL_NUMBER", SERIAL_NUMBER),
    ("FIRMWARE_VER", FIRMWARE_VER),
    ("UPTIME", UPTIME),
    ("MOD_PARAM0", MOD_PARAM0),
    ("MOD_PARAM1", MOD_PARAM1),
    ("MOD_PARAM2", MOD_PARAM2),
    ("MOD_PARAM3", MOD_PARAM3),
    ("MOD_LENGTH", MOD_LENGTH),
    ("MOD_STATE", MOD_STATE),
    ("MOD_REPEAT_PERIOD", MOD_REPEAT_PERIOD),
    ("MOD_SAMPLERATE", MOD_SAMPLERATE),
    ("MOD_DATA_START", MOD_DATA_START),
];

/// Looks up a key by its firmware name, case insensitive
pub fn from_name(name: &str) -> Option<u32> {
    NAMES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, key)| *key)
}

/// Firmware name of `key`, `None` for waveform sample slots and unknown keys
pub fn name(key: u32) -> Option<&'static str> {
    NAMES.iter().find(|(_, k)| *k == key).map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(from_name("V_SET"), Some(20));
        assert_eq!(from_name("mod_samplerate"), Some(1023));
        assert_eq!(from_name("NOT_A_KEY"), None);
        assert_eq!(name(138), Some("UPTIME"));
        assert_eq!(name(MOD_DATA_START + 1), None);
    }

    #[test]
    fn names_are_unique() {
        for (i, (name, key)) in NAMES.iter().enumerate() {
            assert!(
                NAMES[i + 1..].iter().all(|(n, k)| n != name && k != key),
                "{} is listed twice",
                name
            );
        }
    }
}
