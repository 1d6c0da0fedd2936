mod common;

use clap::Parser;
use linux_embedded_hal::I2cdev;
use protractor_driver::{Protractor, DEFAULT_I2C_ADDRESS};

/// Slows the sweep down for a while, then switches the Protractor to scanning
/// only when data is requested.
///
/// Scan time changes take effect immediately and are lost on reboot.
#[derive(Parser)]
struct Args {
    #[arg(long, default_value = "/dev/i2c-1")]
    bus: String,
    #[arg(long, default_value_t = DEFAULT_I2C_ADDRESS)]
    address: u8,
    /// Time for one 180 degree sweep in milliseconds
    #[arg(long, default_value_t = 300)]
    scan_time: i32,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    common::init_logger(args.verbose);

    let bus = I2cdev::new(&args.bus)?;
    let mut protractor = Protractor::new_i2c(bus, args.address, false);
    common::connect(&mut protractor)?;

    protractor.set_scan_time(args.scan_time)?;
    log::info!("New Scan Time Set");
    // the blue LEDs now update less smoothly
    common::sleep_ms(10_000);

    protractor.set_scan_time(0)?;
    log::info!("Continuous Scan Disabled");

    loop {
        protractor.read()?;
        common::print_most_visible(&protractor);
        common::sleep_ms(3000);
    }
}
