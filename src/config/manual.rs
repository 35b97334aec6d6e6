//! Manual (joystick) control configuration.

use serde::Deserialize;

use super::units::FeedRate;

/// Joystick tuning for manual control.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ManualConfig {
    /// Normalized magnitude below which the stick counts as centered.
    pub deadzone_radius: f32,

    /// Feed rate just outside the deadzone, in mm/min.
    pub min_feed: FeedRate,

    /// Feed rate at full deflection, in mm/min.
    pub max_feed: FeedRate,

    /// Raw sample reading of the centered X axis.
    pub zero_x: u8,

    /// Raw sample reading of the centered Y axis.
    pub zero_y: u8,
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            deadzone_radius: 0.1,
            min_feed: FeedRate(30.0),
            max_feed: FeedRate(3000.0),
            zero_x: 128,
            zero_y: 128,
        }
    }
}
