mod common;

use clap::Parser;
use protractor_driver::{Protractor, DEFAULT_BAUD_RATE};

/// Programs a new serial baud rate, used by the Protractor after its next
/// reboot.
#[derive(Parser)]
struct Args {
    /// The device path to a serial port
    port: String,
    /// Baud rate the Protractor currently uses
    #[arg(long, default_value_t = DEFAULT_BAUD_RATE)]
    baud_rate: u32,
    /// New baud rate, 1200 to 1000000
    new_baud_rate: i32,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    common::init_logger(args.verbose);

    let mut protractor = Protractor::new_serial(&args.port, args.baud_rate)?;
    common::connect(&mut protractor)?;

    protractor.set_serial_baud_rate(args.new_baud_rate)?;
    log::info!("New Baud Rate Set: {}", args.new_baud_rate);

    loop {
        protractor.read()?;
        common::print_most_visible(&protractor);
        common::sleep_ms(1000);
    }
}
