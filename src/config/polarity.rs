//! Physical direction polarity of each axis.

use serde::Deserialize;

/// Logical direction bit that leaves the DIR line low, per axis.
///
/// The sequencer raises an axis's DIR line when the step's direction bit
/// differs from this polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AxisPolarity {
    /// X axis polarity.
    pub x: bool,
    /// Y axis polarity.
    pub y: bool,
    /// Z axis polarity.
    pub z: bool,
}

impl Default for AxisPolarity {
    fn default() -> Self {
        Self {
            x: false,
            y: false,
            z: true,
        }
    }
}

impl AxisPolarity {
    /// Polarity as an `[x, y, z]` array.
    #[inline]
    pub fn as_array(&self) -> [bool; 3] {
        [self.x, self.y, self.z]
    }
}
