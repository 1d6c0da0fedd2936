mod common;

use clap::Parser;
use protractor_driver::{Protractor, DEFAULT_BAUD_RATE};

/// Polls a Protractor on a serial port and prints every object and path in view.
#[derive(Parser)]
struct Args {
    /// The device path to a serial port
    port: String,
    #[arg(long, default_value_t = DEFAULT_BAUD_RATE)]
    baud_rate: u32,
    /// Print each scan as a JSON line
    #[arg(long)]
    json: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    common::init_logger(args.verbose);

    let mut protractor = Protractor::new_serial(&args.port, args.baud_rate)?;
    common::connect(&mut protractor)?;

    loop {
        if protractor.read()? {
            if args.json {
                println!("{}", serde_json::to_string(&protractor.scan())?);
            } else {
                common::print_readings(&protractor);
            }
        }
        common::sleep_ms(1000);
    }
}
