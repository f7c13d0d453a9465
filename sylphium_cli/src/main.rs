mod cli;
mod serial;

use clap::Parser;
use simple_eyre::{eyre::eyre, Result};
use std::io::Write;
use sylphium::{hex_parser, param, Frame, FRAME_SIZE};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use cli::*;
use serial::SerialConf;

fn main() -> Result<()> {
    simple_eyre::install()?;
    let cli = Cli::parse();
    env_logger::init();

    match &cli.command {
        Commands::List => list_serial(),
        Commands::Info(conf) => get_info(conf),
        Commands::Read(conf) => read_param(conf),
        Commands::Write(conf) => write_param(conf),
        Commands::MemRead(conf) => mem_read(conf),
        Commands::MemWrite(conf) => mem_write(conf),
        Commands::Output(conf) => {
            let mut laser = conf.serial.open_device()?;
            laser.enable_output(conf.state.into())?;
            Ok(())
        }
        Commands::Power(conf) => {
            let mut laser = conf.serial.open_device()?;
            laser.enable_main_power(conf.state.into())?;
            Ok(())
        }
        Commands::Current(conf) => {
            let mut laser = conf.serial.open_device()?;
            laser.constant_current(conf.current)?;
            Ok(())
        }
        Commands::Modulation(conf) => {
            let mut laser = conf.serial.open_device()?;
            laser.modulation(conf.state.into(), conf.single_shot, conf.periodic)?;
            Ok(())
        }
        Commands::Sine(conf) => {
            let mut laser = conf.serial.open_device()?;
            laser.generate_sine(
                conf.amplitude,
                conf.offset,
                conf.frequency,
                conf.phase,
                conf.sample_period,
            )?;
            Ok(())
        }
        Commands::Pulse(conf) => {
            let mut laser = conf.serial.open_device()?;
            laser.generate_pulse(
                conf.amplitude,
                conf.offset,
                conf.duty_cycle,
                conf.sample_period,
            )?;
            Ok(())
        }
        Commands::Arb(subcomm) => match &subcomm.command {
            ArbCommands::Get(conf) => {
                let mut laser = conf.serial.open_device()?;
                println!("{}", laser.waveform().get(conf.index)?);
                Ok(())
            }
            ArbCommands::Set(conf) => {
                let mut laser = conf.serial.open_device()?;
                laser.waveform().set(conf.index, conf.value)?;
                Ok(())
            }
            ArbCommands::Load(conf) => load_samples(conf),
            ArbCommands::Dump(conf) => {
                let mut laser = conf.serial.open_device()?;
                let samples = laser.waveform().download(conf.start, conf.len)?;
                println!("{}", samples_to_csv(&samples));
                Ok(())
            }
        },
        Commands::Raw(conf) => send_raw(conf),
    }
}

/// Returns std::io::Write stream with coloring enabled if program is run interactively
fn get_stdout() -> StandardStream {
    StandardStream::stdout(if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    })
}

fn list_serial() -> Result<()> {
    let mut stdout = get_stdout();
    let paths = serialport::available_ports()?;
    if paths.is_empty() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(&mut stdout, "No connected serial ports found.")?;
    } else {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(&mut stdout, "Connected serial ports:")?;
    }
    stdout.reset()?;
    paths.iter().for_each(|p| println!("{}", p.port_name));

    Ok(())
}

fn get_info(conf: &SerialConf) -> Result<()> {
    let mut laser = conf.open_device()?;
    let serial_number = laser.read(param::SERIAL_NUMBER)?;
    let firmware = laser.read(param::FIRMWARE_VER)?;
    let uptime = laser.read(param::UPTIME)?;
    println!(
        concat!("Serial number: {}\n", "Firmware version: {}\n", "Uptime: {}"),
        serial_number, firmware, uptime
    );
    Ok(())
}

fn describe(key: u32) -> String {
    match param::name(key) {
        Some(name) => format!("{} ({})", name, key),
        None => key.to_string(),
    }
}

fn read_param(conf: &ReadConf) -> Result<()> {
    let mut laser = conf.serial.open_device()?;
    if conf.float {
        println!("{}: {}", describe(conf.key), laser.read_float(conf.key)?);
    } else {
        println!("{}: {}", describe(conf.key), laser.read(conf.key)?);
    }
    Ok(())
}

fn write_param(conf: &WriteConf) -> Result<()> {
    let mut laser = conf.serial.open_device()?;
    if conf.float {
        laser.write_float(conf.key, conf.value.parse()?)?;
    } else {
        laser.write(conf.key, conf.value.parse()?)?;
    }
    Ok(())
}

fn mem_read(conf: &MemReadConf) -> Result<()> {
    let mut laser = conf.serial.open_device()?;
    if conf.float {
        println!("{}", laser.mem_read_float(conf.addr)?);
    } else {
        println!("{}", laser.mem_read(conf.addr)?);
    }
    Ok(())
}

fn mem_write(conf: &MemWriteConf) -> Result<()> {
    let mut laser = conf.serial.open_device()?;
    if conf.float {
        println!("{}", laser.mem_write_float(conf.addr, conf.value.parse()?)?);
    } else {
        println!("{}", laser.mem_write(conf.addr, conf.value.parse()?)?);
    }
    Ok(())
}

fn parse_samples(input: &str) -> Result<Vec<f32>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().map_err(|e| eyre!("Invalid sample {:?}: {}", s, e)))
        .collect()
}

fn samples_to_csv(samples: &[f32]) -> String {
    samples
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn load_samples(conf: &ArbLoadConf) -> Result<()> {
    let samples = parse_samples(&std::fs::read_to_string(&conf.input)?)?;
    log::info!("Loaded {} samples from {:?}", samples.len(), conf.input);
    let mut laser = conf.serial.open_device()?;
    laser.waveform().upload(conf.start, &samples)?;
    Ok(())
}

fn send_raw(conf: &RawConf) -> Result<()> {
    let data = hex_parser::decode_hex(&conf.frame)?;
    let request: Frame = data
        .try_into()
        .map_err(|d: Vec<u8>| eyre!("Expected {} bytes, got {}", FRAME_SIZE, d.len()))?;
    let mut laser = conf.serial.open_device()?;
    let response = laser.exchange(&request)?;
    println!("{}", hex_parser::encode_hex(&response));
    Ok(())
}
