//! Operating state and host-visible events.

/// Which producer feeds the step pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingState {
    /// No stepping.
    #[default]
    Ready,
    /// Steps come from the joystick interpolator.
    ManualControl,
    /// Steps come from the program byte stream.
    RunningProgram,
}

/// Kind of the last recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// Nothing recorded yet.
    #[default]
    None,
    /// Operating state changed; payload `[from, to, 0]` as state indices.
    StateChanged,
    /// Joystick zero recalibrated; payload `[zero_x, zero_y, 0]`.
    JoystickZeroed,
    /// A step period was clamped into timer range; payload `[applied, total_clamped, 0]`.
    DurationClamped,
    /// Reported by the host side.
    External(u8),
}

/// Last externally observable event with up to three payload values.
///
/// Kept for host inspection only; stepping never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// Payload values, meaning depends on `kind`.
    pub values: [i32; 3],
}

impl Event {
    /// Create a new event.
    #[inline]
    pub const fn new(kind: EventKind, values: [i32; 3]) -> Self {
        Self { kind, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_ready() {
        assert_eq!(OperatingState::default(), OperatingState::Ready);
    }

    #[test]
    fn test_default_event_is_empty() {
        let event = Event::default();
        assert_eq!(event.kind, EventKind::None);
        assert_eq!(event.values, [0; 3]);
    }
}
