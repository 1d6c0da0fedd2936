mod common;

use clap::Parser;
use linux_embedded_hal::I2cdev;
use protractor_driver::{Protractor, DEFAULT_I2C_ADDRESS};

/// Programs a new I2C address. The sensor keeps answering on the old address
/// until it is rebooted.
#[derive(Parser)]
struct Args {
    #[arg(long, default_value = "/dev/i2c-1")]
    bus: String,
    /// Address the Protractor currently answers on
    #[arg(long, default_value_t = DEFAULT_I2C_ADDRESS)]
    address: u8,
    /// New address, 2 to 127, not already used on the bus
    new_address: u8,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    common::init_logger(args.verbose);

    let bus = I2cdev::new(&args.bus)?;
    let mut protractor = Protractor::new_i2c(bus, args.address, false);
    common::connect(&mut protractor)?;

    protractor.set_i2c_address(args.new_address.into())?;
    log::info!(
        "New I2C address {} set, reboot the Protractor to use it",
        args.new_address
    );

    loop {
        protractor.read()?;
        common::print_most_visible(&protractor);
        common::sleep_ms(1000);
    }
}
