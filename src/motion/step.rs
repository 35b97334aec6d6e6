//! Step records and their 3-byte wire format.

use crate::config::units::Ticks;

/// One of the three machine axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// All axes, in wire order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Array index of this axis.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Logical travel direction encoded by a direction bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Direction bit set (position counts up).
    Positive,
    /// Direction bit clear (position counts down).
    Negative,
}

impl Direction {
    /// Direction from a raw direction bit.
    #[inline]
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }
}

/// Direction and step bits for a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisMotion {
    /// Direction bit (sign convention fixed per axis).
    pub direction: bool,
    /// Whether this axis pulses during the cycle.
    pub step: bool,
}

impl AxisMotion {
    /// Position change caused by executing this motion: 0 or ±1.
    #[inline]
    pub fn delta(self) -> i64 {
        if self.step {
            Direction::from_bit(self.direction).sign()
        } else {
            0
        }
    }
}

/// Per-axis flags of a step.
///
/// Packed layout (LSB first): x-direction, x-step, y-direction, y-step,
/// z-direction, z-step. Bits 6 and 7 are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisFlags {
    /// X axis flags.
    pub x: AxisMotion,
    /// Y axis flags.
    pub y: AxisMotion,
    /// Z axis flags.
    pub z: AxisMotion,
}

impl AxisFlags {
    /// Mask of the six defined bits.
    pub const DEFINED_BITS: u8 = 0b0011_1111;

    /// Flags for one axis.
    #[inline]
    pub fn axis(&self, axis: Axis) -> AxisMotion {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Number of axes pulsing this cycle (0 to 3).
    #[inline]
    pub fn active_axes(&self) -> u8 {
        self.x.step as u8 + self.y.step as u8 + self.z.step as u8
    }

    /// Pack into the flag byte. Reserved bits are zero.
    pub fn to_byte(&self) -> u8 {
        Axis::ALL.iter().enumerate().fold(0u8, |acc, (i, &axis)| {
            let motion = self.axis(axis);
            acc | (motion.direction as u8) << (2 * i) | (motion.step as u8) << (2 * i + 1)
        })
    }

    /// Unpack from the flag byte. Reserved bits are ignored.
    pub fn from_byte(byte: u8) -> Self {
        let motion = |i: usize| AxisMotion {
            direction: byte & (1 << (2 * i)) != 0,
            step: byte & (1 << (2 * i + 1)) != 0,
        };
        Self {
            x: motion(0),
            y: motion(1),
            z: motion(2),
        }
    }
}

/// One pulse instruction.
///
/// A zero duration means "stop": nothing pulses and stepping halts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// Pulse period in step-clock ticks.
    pub duration: Ticks,
    /// Per-axis direction and step bits.
    pub axes: AxisFlags,
}

impl Step {
    /// Size of an encoded step record in bytes.
    pub const ENCODED_LEN: usize = 3;

    /// The stop step: zero duration, no flags.
    pub const STOP: Self = Self {
        duration: Ticks::ZERO,
        axes: AxisFlags {
            x: AxisMotion {
                direction: false,
                step: false,
            },
            y: AxisMotion {
                direction: false,
                step: false,
            },
            z: AxisMotion {
                direction: false,
                step: false,
            },
        },
    };

    /// Create a new step.
    #[inline]
    pub const fn new(duration: Ticks, axes: AxisFlags) -> Self {
        Self { duration, axes }
    }

    /// Whether this step halts stepping.
    #[inline]
    pub const fn is_stop(&self) -> bool {
        self.duration.is_zero()
    }

    /// Encode as `[duration_lo, duration_hi, flags]`.
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        let [lo, hi] = self.duration.value().to_le_bytes();
        [lo, hi, self.axes.to_byte()]
    }

    /// Decode from `[duration_lo, duration_hi, flags]`.
    pub fn from_bytes(bytes: [u8; Self::ENCODED_LEN]) -> Self {
        Self {
            duration: Ticks(u16::from_le_bytes([bytes[0], bytes[1]])),
            axes: AxisFlags::from_byte(bytes[2]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_bit_layout() {
        let flags = AxisFlags {
            x: AxisMotion {
                direction: true,
                step: true,
            },
            y: AxisMotion::default(),
            z: AxisMotion {
                direction: false,
                step: true,
            },
        };
        assert_eq!(flags.to_byte(), 0b0010_0011);
        assert_eq!(AxisFlags::from_byte(0b0010_0011), flags);
    }

    #[test]
    fn test_reserved_bits_ignored() {
        assert_eq!(AxisFlags::from_byte(0b1100_0000), AxisFlags::default());
        assert_eq!(AxisFlags::from_byte(0xFF).to_byte(), AxisFlags::DEFINED_BITS);
    }

    #[test]
    fn test_step_bytes() {
        let step = Step::from_bytes([0x34, 0x12, 0b0000_1010]);
        assert_eq!(step.duration, Ticks(0x1234));
        assert!(step.axes.x.step && !step.axes.x.direction);
        assert!(step.axes.y.step && !step.axes.y.direction);
        assert!(!step.axes.z.step);
        assert_eq!(step.to_bytes(), [0x34, 0x12, 0b0000_1010]);
    }

    #[test]
    fn test_active_axes() {
        assert_eq!(Step::STOP.axes.active_axes(), 0);
        assert_eq!(AxisFlags::from_byte(0b0010_1010).active_axes(), 3);
        assert_eq!(AxisFlags::from_byte(0b0000_1010).active_axes(), 2);
    }

    #[test]
    fn test_motion_delta() {
        assert_eq!(AxisFlags::from_byte(0b11).x.delta(), 1);
        assert_eq!(AxisFlags::from_byte(0b10).x.delta(), -1);
        assert_eq!(
            AxisMotion {
                direction: true,
                step: false
            }
            .delta(),
            0
        );
    }
}
