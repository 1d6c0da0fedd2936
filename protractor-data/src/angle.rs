/// Largest angle the sensor reports, in degrees.
pub const MAX_ANGLE_DEGREES: i32 = 180;

fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Converts a raw angle byte (0-255 across the 180° field of view) to whole
/// degrees, truncating toward zero.
pub fn raw_to_degrees(raw: u8) -> u8 {
    // 255 * 180 / 255 == 180 so the result always fits in a byte
    map_range(raw.into(), 0, 255, 0, MAX_ANGLE_DEGREES) as u8
}
