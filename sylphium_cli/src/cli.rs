use crate::serial::SerialConf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use sylphium::{param, DEFAULT_SAMPLE_PERIOD};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lists connected serial devices
    List,
    /// Get serial number, firmware version and uptime
    Info(SerialConf),
    /// Read a parameter
    Read(ReadConf),
    /// Write a parameter
    Write(WriteConf),
    /// Read a word of I2C memory
    MemRead(MemReadConf),
    /// Write a word of I2C memory
    MemWrite(MemWriteConf),
    /// Switch laser output
    Output(SwitchConf),
    /// Switch main power
    Power(SwitchConf),
    /// Enter constant current mode
    Current(CurrentConf),
    /// Start or stop modulation
    Modulation(ModulationConf),
    /// Fill sample buffer with a sine wave
    Sine(SineConf),
    /// Fill sample buffer with a pulse train
    Pulse(PulseConf),
    /// Arbitrary waveform sample buffer access
    Arb(ArbCommand),
    /// Send a single hex encoded frame and print the response
    Raw(RawConf),
}

/// Accepts either a parameter name like `V_SET` or a numeric key
fn parse_key(s: &str) -> Result<u32, String> {
    param::from_name(s)
        .or_else(|| s.parse().ok())
        .ok_or_else(|| format!("{} is neither a parameter name nor a number", s))
}

#[derive(Args)]
pub struct ReadConf {
    /// Parameter name or key
    #[clap(value_parser = parse_key)]
    pub key: u32,
    /// Interpret value as a float
    #[clap(short, long)]
    pub float: bool,
    #[clap(flatten)]
    pub serial: SerialConf,
}

#[derive(Args)]
pub struct WriteConf {
    /// Parameter name or key
    #[clap(value_parser = parse_key)]
    pub key: u32,
    #[clap(value_parser, allow_hyphen_values = true)]
    pub value: String,
    /// Send value as a float
    #[clap(short, long)]
    pub float: bool,
    #[clap(flatten)]
    pub serial: SerialConf,
}

#[derive(Args)]
pub struct MemReadConf {
    /// Memory address
    #[clap(value_parser)]
    pub addr: u32,
    /// Interpret value as a float
    #[clap(short, long)]
    pub float: bool,
    #[clap(flatten)]
    pub serial: SerialConf,
}

#[derive(Args)]
pub struct MemWriteConf {
    /// Memory address
    #[clap(value_parser)]
    pub addr: u32,
    #[clap(value_parser, allow_hyphen_values = true)]
    pub value: String,
    /// Send value as a float
    #[clap(short, long)]
    pub float: bool,
    #[clap(flatten)]
    pub serial: SerialConf,
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Switch {
    On,
    Off,
}

impl From<Switch> for bool {
    fn from(s: Switch) -> bool {
        s == Switch::On
    }
}

#[derive(Args)]
pub struct SwitchConf {
    #[clap(value_enum)]
    pub state: Switch,
    #[clap(flatten)]
    pub serial: SerialConf,
}

#[derive(Args)]
pub struct CurrentConf {
    /// Current set-point
    #[clap(value_parser)]
    pub current: f32,
    #[clap(flatten)]
    pub serial: SerialConf,
}

#[derive(Args)]
pub struct ModulationConf {
    #[clap(value_enum)]
    pub state: Switch,
    /// Play sample buffer once, takes precedence over --periodic
    #[clap(long)]
    pub single_shot: bool,
    /// Replay sample buffer every repeat period
    #[clap(long)]
    pub periodic: bool,
    #[clap(flatten)]
    pub serial: SerialConf,
}

#[derive(Args)]
pub struct SineConf {
    #[clap(value_parser)]
    pub amplitude: f32,
    #[clap(value_parser, allow_hyphen_values = true)]
    pub offset: f32,
    #[clap(value_parser)]
    pub frequency: f32,
    #[clap(long, value_parser, default_value_t = 0.0, allow_hyphen_values = true)]
    pub phase: f32,
    #[clap(long, value_parser, default_value_t = DEFAULT_SAMPLE_PERIOD)]
    pub sample_period: i32,
    #[clap(flatten)]
    pub serial: SerialConf,
}

#[derive(Args)]
pub struct PulseConf {
    #[clap(value_parser)]
    pub amplitude: f32,
    #[clap(value_parser, allow_hyphen_values = true)]
    pub offset: f32,
    #[clap(value_parser)]
    pub duty_cycle: f32,
    #[clap(long, value_parser, default_value_t = DEFAULT_SAMPLE_PERIOD)]
    pub sample_period: i32,
    #[clap(flatten)]
    pub serial: SerialConf,
}

#[derive(Args)]
pub struct ArbCommand {
    #[clap(subcommand)]
    pub command: ArbCommands,
}

#[derive(Subcommand)]
pub enum ArbCommands {
    /// Get a single sample
    Get(ArbGetConf),
    /// Set a single sample
    Set(ArbSetConf),
    /// Upload samples from a file, separated by commas or whitespace
    Load(ArbLoadConf),
    /// Print a range of samples
    Dump(ArbDumpConf),
}

#[derive(Args)]
pub struct ArbGetConf {
    #[clap(value_parser)]
    pub index: u32,
    #[clap(flatten)]
    pub serial: SerialConf,
}

#[derive(Args)]
pub struct ArbSetConf {
    #[clap(value_parser)]
    pub index: u32,
    #[clap(value_parser, allow_hyphen_values = true)]
    pub value: f32,
    #[clap(flatten)]
    pub serial: SerialConf,
}

#[derive(Args)]
pub struct ArbLoadConf {
    /// File with samples
    #[clap(value_parser, value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,
    /// Index of the first sample
    #[clap(long, value_parser, default_value_t = 0)]
    pub start: u32,
    #[clap(flatten)]
    pub serial: SerialConf,
}

#[derive(Args)]
pub struct ArbDumpConf {
    #[clap(value_parser)]
    pub start: u32,
    #[clap(value_parser)]
    pub len: usize,
    #[clap(flatten)]
    pub serial: SerialConf,
}

#[derive(Args)]
pub struct RawConf {
    /// Request frame, e.g. "01 02 00 00 00 14 00 00 00 00"
    #[clap(value_parser)]
    pub frame: String,
    #[clap(flatten)]
    pub serial: SerialConf,
}
