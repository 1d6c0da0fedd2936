#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One detected object or open pathway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Direction in degrees, 0 to 180.
    pub angle: u8,
    /// Raw visibility score reported by the sensor.
    pub visibility: u8,
}

/// Decoded copy of one sensor response.
///
/// Objects are ranked from most to least visible, paths from most to least
/// open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scan {
    pub objects: Vec<Reading>,
    pub paths: Vec<Reading>,
}

impl Scan {
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.paths.is_empty()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_scan_to_json() {
        let scan = Scan {
            objects: vec![Reading { angle: 35, visibility: 100 }],
            paths: vec![],
        };
        let json = serde_json::to_string(&scan).unwrap();
        assert_eq!(json, r#"{"objects":[{"angle":35,"visibility":100}],"paths":[]}"#);
    }
}
