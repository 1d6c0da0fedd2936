mod common;

use clap::Parser;
use linux_embedded_hal::I2cdev;
use protractor_driver::{LedMode, Protractor, DEFAULT_I2C_ADDRESS};

/// Cycles the feedback LEDs through their modes: show path, off, show object.
/// LED changes take effect immediately and are lost on reboot.
#[derive(Parser)]
struct Args {
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

    let steps = [
        (LedMode::ShowPath, "Showing Path", 10_000),
        // also disables the green status LED
        (LedMode::Off, "LEDs Off", 2000),
    ];
    for (mode, message, wait_ms) in steps {
        protractor.set_led_mode(mode)?;
        log::info!("{}", message);
        common::sleep_ms(wait_ms);
    }

    protractor.led_show_object()?;
    log::info!("Showing Objects");

    loop {
        protractor.read()?;
        common::print_most_visible(&protractor);
        common::sleep_ms(1000);
    }
}
