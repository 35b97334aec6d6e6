//! Machine parameters from configuration.

use serde::Deserialize;

use super::units::{FeedRate, Hertz, MillimetersPerSecSquared};

/// Fixed machine parameters, set once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MachineParameters {
    /// Motor steps per millimeter of travel.
    pub steps_per_millimeter: f32,

    /// Maximum linear speed in mm/min.
    pub max_speed: FeedRate,

    /// Maximum acceleration in mm/s². Reserved: no ramping is performed.
    pub max_acceleration: MillimetersPerSecSquared,

    /// Step-clock frequency driving the pulse timer.
    #[serde(rename = "clock_frequency_hz")]
    pub clock_frequency: Hertz,
}

impl Default for MachineParameters {
    fn default() -> Self {
        Self {
            steps_per_millimeter: 640.0,
            max_speed: FeedRate(3000.0),
            max_acceleration: MillimetersPerSecSquared(150.0),
            clock_frequency: Hertz(200_000),
        }
    }
}

impl MachineParameters {
    /// Pulse period in clock ticks for a linear feed rate (mm/s).
    ///
    /// Not truncated: the caller decides how to fit the result into a timer.
    #[inline]
    pub fn ticks_per_step(&self, feed_mm_per_sec: f32) -> f32 {
        self.clock_frequency.ticks_per_event(feed_mm_per_sec) / self.steps_per_millimeter
    }
}
