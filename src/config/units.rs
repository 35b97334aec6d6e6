//! Unit types for physical quantities.
//!
//! Provides type-safe representations of feed rates, clock frequencies,
//! timer ticks and motor steps to prevent unit confusion at compile time.

use serde::Deserialize;

/// Linear feed rate in millimeters per minute.
///
/// Used for configuration and the manual feed range. Converted to mm/s
/// before any timing computation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct FeedRate(pub f32);

impl FeedRate {
    /// Get the raw value in mm/min.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to millimeters per second.
    #[inline]
    pub fn per_second(self) -> f32 {
        self.0 / 60.0
    }

    /// Linear interpolation between `self` (at 0) and `max` (at 1).
    #[inline]
    pub fn lerp(self, max: FeedRate, t: f32) -> FeedRate {
        FeedRate(self.0 + (max.0 - self.0) * t)
    }
}

/// Linear acceleration in millimeters per second squared.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct MillimetersPerSecSquared(pub f32);

impl MillimetersPerSecSquared {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Frequency in hertz (step-clock ticks per second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Hertz(pub u32);

impl Hertz {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Number of ticks spanning one period of `rate` events per second.
    #[inline]
    pub fn ticks_per_event(self, rate: f32) -> f32 {
        self.0 as f32 / rate
    }
}

/// Step-clock tick count, as loaded into the hardware timer reload register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Ticks(pub u16);

impl Ticks {
    /// Zero ticks, the "stop" duration.
    pub const ZERO: Self = Self(0);

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Whether this is the zero ("stop") duration.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Convert a float tick count, saturating into `1..=u16::MAX`.
    ///
    /// Returns the ticks and whether the value had to be clamped. A non-finite
    /// or sub-tick input becomes one tick so a requested pulse never turns into
    /// a stop.
    pub fn saturating_from_f32(ticks: f32) -> (Self, bool) {
        if !ticks.is_finite() || ticks > u16::MAX as f32 {
            (Self(u16::MAX), true)
        } else if ticks < 1.0 {
            (Self(1), true)
        } else {
            (Self(ticks as u16), false)
        }
    }
}

/// Machine position along one axis, in motor steps.
///
/// Uses i64 for unlimited range in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(pub i64);

impl Steps {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Convert to millimeters using the steps-per-millimeter factor.
    #[inline]
    pub fn to_millimeters(self, steps_per_millimeter: f32) -> f32 {
        self.0 as f32 / steps_per_millimeter
    }
}
