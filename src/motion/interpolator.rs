//! Manual control: joystick vector to line-interpolated steps.
//!
//! The stick deflection picks both the direction of travel and the feed rate.
//! The axis with the larger component (major) steps every cycle; the other
//! (minor) steps whenever its accumulated coordinate crosses a rounding
//! boundary, which traces the same cells as a Bresenham line.

use libm::{fabsf, hypotf, roundf};

use crate::config::units::Ticks;
use crate::config::{MachineParameters, ManualConfig};

use super::step::{AxisFlags, AxisMotion, Step};

/// Full-scale deflection of a raw sample around its zero point.
const SAMPLE_HALF_RANGE: f32 = 128.0;

/// Joystick vector after normalization and deadzone shaping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShapedVector {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Magnitude, in `[0, 1]`.
    pub magnitude: f32,
}

impl ShapedVector {
    /// Normalize a raw sample pair against its zero offsets and apply the
    /// deadzone, rescaling so magnitude rises linearly from 0 at the deadzone
    /// edge to 1 at full deflection.
    pub fn from_raw(raw: [u8; 2], zero: [u8; 2], deadzone_radius: f32) -> Self {
        let x = (raw[0] as f32 - zero[0] as f32) / SAMPLE_HALF_RANGE;
        let y = (raw[1] as f32 - zero[1] as f32) / SAMPLE_HALF_RANGE;
        let magnitude = hypotf(x, y).min(1.0);

        let mut factor = (magnitude - deadzone_radius) / ((1.0 - deadzone_radius) * magnitude);
        // 0/0 at the origin with no deadzone yields NaN
        if factor.is_nan() || factor <= 0.0 {
            factor = 0.0;
        }

        Self {
            x: x * factor,
            y: y * factor,
            magnitude: magnitude * factor,
        }
    }

    /// Whether the vector commands no motion.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Interpolator working state, persisted across calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualControlStatus {
    /// Last shaped vector; a change restarts the line.
    pub x: f32,
    /// See `x`.
    pub y: f32,
    /// Magnitude below which the stick counts as centered.
    pub deadzone_radius: f32,
    /// Raw zero offsets `[x, y]`.
    pub zero: [u8; 2],
    /// Major-axis steps taken along the current line.
    pub steps: u32,
    /// Total interpolator calls, for diagnostics.
    pub calls: u32,
    /// Minor coordinate before the latest step.
    pub previous_coord: f32,
    /// Minor coordinate after the latest step.
    pub new_coord: f32,
}

impl ManualControlStatus {
    /// Fresh status from configuration.
    pub fn from_config(config: &ManualConfig) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            deadzone_radius: config.deadzone_radius,
            zero: [config.zero_x, config.zero_y],
            steps: 0,
            calls: 0,
            previous_coord: 0.0,
            new_coord: 0.0,
        }
    }
}

/// Converts joystick samples into a stream of steps.
#[derive(Debug, Clone)]
pub struct ManualInterpolator {
    config: ManualConfig,
    status: ManualControlStatus,
}

impl ManualInterpolator {
    /// Create an interpolator from joystick configuration.
    pub fn new(config: ManualConfig) -> Self {
        Self {
            status: ManualControlStatus::from_config(&config),
            config,
        }
    }

    /// Current working state.
    #[inline]
    pub fn status(&self) -> &ManualControlStatus {
        &self.status
    }

    /// Store `raw` as the centered reading of both axes.
    pub fn set_zero(&mut self, raw: [u8; 2]) {
        self.status.zero = raw;
    }

    /// Produce the next step for the raw sample pair.
    ///
    /// Returns the step and whether its duration had to be clamped to fit the
    /// timer.
    pub fn next_step(&mut self, raw: [u8; 2], params: &MachineParameters) -> (Step, bool) {
        let status = &mut self.status;
        let vector = ShapedVector::from_raw(raw, status.zero, status.deadzone_radius);

        status.calls = status.calls.wrapping_add(1);
        if vector.x != status.x || vector.y != status.y {
            status.x = vector.x;
            status.y = vector.y;
            status.steps = 0;
        }

        let (duration, clamped) = if vector.magnitude > 0.0 {
            let feed = self.config.min_feed.lerp(self.config.max_feed, vector.magnitude);
            Ticks::saturating_from_f32(params.ticks_per_step(feed.per_second()))
        } else {
            (Ticks::ZERO, false)
        };

        let mut axes = AxisFlags {
            x: AxisMotion {
                direction: vector.x >= 0.0,
                step: false,
            },
            y: AxisMotion {
                direction: vector.y >= 0.0,
                step: false,
            },
            z: AxisMotion::default(),
        };

        if !vector.is_zero() {
            status.steps = status.steps.wrapping_add(1);
            let x_major = fabsf(vector.x) > fabsf(vector.y);
            let (major, minor) = if x_major {
                (vector.x, vector.y)
            } else {
                (vector.y, vector.x)
            };
            let major_sign = if major > 0.0 { 1.0 } else { -1.0 };
            let slope = major_sign * minor / major;

            status.previous_coord = status.steps.wrapping_sub(1) as f32 * slope;
            status.new_coord = status.steps as f32 * slope;
            let minor_steps = roundf(status.new_coord) != roundf(status.previous_coord);

            if x_major {
                axes.x.step = true;
                axes.y.step = minor_steps;
            } else {
                axes.x.step = minor_steps;
                axes.y.step = true;
            }
        }

        (Step::new(duration, axes), clamped)
    }
}
