//! Position tracking for the three axes.
//!
//! Position only ever changes by one step per pulsing axis; there is no
//! direct setter.

use crate::config::units::Steps;
use crate::motion::{Axis, Step};

/// Machine position in motor steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    x: Steps,
    y: Steps,
    z: Steps,
}

impl Position {
    /// Position at the origin.
    #[inline]
    pub const fn new() -> Self {
        Self {
            x: Steps(0),
            y: Steps(0),
            z: Steps(0),
        }
    }

    /// Position along one axis.
    #[inline]
    pub fn axis(&self, axis: Axis) -> Steps {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// X position.
    #[inline]
    pub fn x(&self) -> Steps {
        self.x
    }

    /// Y position.
    #[inline]
    pub fn y(&self) -> Steps {
        self.y
    }

    /// Z position.
    #[inline]
    pub fn z(&self) -> Steps {
        self.z
    }

    /// Integrate a pulsed step: ±1 on each axis whose step flag is set.
    #[inline]
    pub fn apply(&mut self, step: &Step) {
        self.x = Steps(self.x.0 + step.axes.x.delta());
        self.y = Steps(self.y.0 + step.axes.y.delta());
        self.z = Steps(self.z.0 + step.axes.z.delta());
    }

    /// Position in millimeters `[x, y, z]`.
    pub fn millimeters(&self, steps_per_millimeter: f32) -> [f32; 3] {
        Axis::ALL.map(|axis| self.axis(axis).to_millimeters(steps_per_millimeter))
    }
}
