//! Pulse period computation for a dispatched step.

use libm::{roundf, sqrtf};

use crate::config::units::Ticks;

use super::step::Step;

/// Timer program for one step cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulsePlan {
    /// Pulse the active axes over a period of this many ticks.
    Pulse(Ticks),
    /// Nothing pulses; fire once after the idle period to re-check state.
    Idle(Ticks),
}

impl PulsePlan {
    /// Reload value to program into the timer.
    #[inline]
    pub fn reload(self) -> Ticks {
        match self {
            PulsePlan::Pulse(ticks) | PulsePlan::Idle(ticks) => ticks,
        }
    }
}

/// Period for a step, stretched so linear speed stays constant when axes
/// move together: ×√2 for two axes, ×√3 for three.
///
/// Returns the period and whether scaling overflowed the timer range.
pub fn corrected_duration(step: &Step) -> (Ticks, bool) {
    let base = step.duration.value() as f32;
    let scale = match step.axes.active_axes() {
        2 => sqrtf(2.0),
        3 => sqrtf(3.0),
        _ => return (step.duration, false),
    };

    let scaled = roundf(base * scale);
    if scaled > u16::MAX as f32 {
        (Ticks(u16::MAX), true)
    } else {
        (Ticks(scaled as u16), false)
    }
}

/// Plan the timer program for `step`.
///
/// Returns the plan and whether the period had to be clamped.
pub fn plan_step(step: &Step, idle_reload: Ticks) -> (PulsePlan, bool) {
    if step.is_stop() {
        return (PulsePlan::Idle(idle_reload), false);
    }
    let (ticks, clamped) = corrected_duration(step);
    (PulsePlan::Pulse(ticks), clamped)
}
