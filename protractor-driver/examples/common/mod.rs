#![allow(dead_code)]

use protractor_driver::{Protractor, ProtractorError, Transport, BOOT_DELAY_MS};
use std::time::Duration;

pub fn sleep_ms(duration: u64) {
    std::thread::sleep(Duration::from_millis(duration));
}

pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("{e}");
    }
}

/// Waits for the sensor to boot and checks that it answers.
pub fn connect<T: Transport>(protractor: &mut Protractor<T>) -> Result<(), ProtractorError> {
    sleep_ms(BOOT_DELAY_MS);
    match protractor.read() {
        Ok(true) => {
            log::info!("Connected to Protractor.");
            Ok(())
        }
        Ok(false) => Err(ProtractorError::DeviceUnavailable),
        Err(e) => {
            log::error!(
                "Could not connect to Protractor. Check the wiring and the configured address."
            );
            Err(e)
        }
    }
}

pub fn print_readings<T: Transport>(protractor: &Protractor<T>) {
    let n_objects = protractor.object_count() as i32;
    print!("Number of objects: {}", n_objects);
    if n_objects > 0 {
        print!(
            ", Angle of Most Visible Object = {} degrees",
            protractor.object_angle()
        );
    }
    println!();
    println!("Angles, Visibility");
    for i in 0..n_objects {
        println!(
            "   {:>3}, {:>3}",
            protractor.object_angle_at(i),
            protractor.object_visibility_at(i)
        );
    }
    println!();

    let n_paths = protractor.path_count() as i32;
    print!("Number of Paths: {}", n_paths);
    if n_paths > 0 {
        print!(
            ", Angle of Most Visible Path = {} degrees",
            protractor.path_angle()
        );
    }
    println!();
    println!("Angles, Visibility");
    for i in 0..n_paths {
        println!(
            "   {:>3}, {:>3}",
            protractor.path_angle_at(i),
            protractor.path_visibility_at(i)
        );
    }
    println!();
}

pub fn print_most_visible<T: Transport>(protractor: &Protractor<T>) {
    println!("Number of Objects: {}", protractor.object_count());
    if protractor.object_count() > 0 {
        println!(
            "Angle to most visible Object = {} degrees",
            protractor.object_angle()
        );
    }
    println!("Number of Paths: {}", protractor.path_count());
    if protractor.path_count() > 0 {
        println!("Angle to the Path = {} degrees", protractor.path_angle());
    }
    println!();
}
