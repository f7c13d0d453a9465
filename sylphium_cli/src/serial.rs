use clap::Args;
use serialport::SerialPort;
use simple_eyre::{eyre::eyre, Result};
use std::time::Duration;
use sylphium::{IoAdapter, SerialAdapter, Sylphium};

#[derive(Args)]
pub struct SerialConf {
    /// Name of serial port that should be used
    #[clap(short, long, value_parser)]
    pub serial: String,

    /// Serial port baud rate
    #[clap(short, long, value_parser, default_value_t = 115200)]
    pub baud_rate: u32,

    /// Bus address of the controller
    #[clap(short, long, value_parser, default_value_t = 1)]
    pub address: u8,

    /// How long to wait for a response, in milliseconds
    #[clap(long, value_parser, default_value_t = 100)]
    pub timeout_ms: u64,
}

pub type SerialSylphium = Sylphium<SerialAdapter<dyn SerialPort>>;

impl SerialConf {
    pub fn open_device(&self) -> Result<SerialSylphium> {
        log::debug!(
            "Opening {} at {} baud, device address {}",
            self.serial,
            self.baud_rate,
            self.address
        );
        let port = serialport::new(&self.serial, self.baud_rate)
            .timeout(Duration::from_millis(self.timeout_ms))
            .open()
            .map_err(|e| eyre!("Could not open serial port {}: {}", self.serial, e))?;
        Ok(SerialAdapter::new(port).open_sylphium(self.address))
    }
}
