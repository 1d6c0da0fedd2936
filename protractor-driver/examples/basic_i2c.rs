mod common;

use clap::Parser;
use linux_embedded_hal::I2cdev;
use protractor_driver::{Protractor, DEFAULT_I2C_ADDRESS};

/// Polls a Protractor on an I2C bus and prints every object and path in view.
#[derive(Parser)]
struct Args {
    /// Path to the I2C bus
    #[arg(long, default_value = "/dev/i2c-1")]
    bus: String,
    #[arg(long, default_value_t = DEFAULT_I2C_ADDRESS)]
    address: u8,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    common::init_logger(args.verbose);

    let bus = I2cdev::new(&args.bus)?;
    let mut protractor = Protractor::new_i2c(bus, args.address, false);
    common::connect(&mut protractor)?;

    loop {
        protractor.read()?;
        common::print_readings(&protractor);
        common::sleep_ms(1000);
    }
}
