//! Hardware seams: output lines, the one-shot step timer and input sources.
//!
//! Pins use embedded-hal 1.0 `OutputPin`. The timer and the analog source are
//! small traits implemented by the board support code.

use bitflags::bitflags;
use embedded_hal::digital::OutputPin;

use crate::error::MachineError;
use crate::motion::Axis;

bitflags! {
    /// Timer events that can be pending within one period.
    ///
    /// The peripheral raises them in increasing time order: direction compare,
    /// step compare, then update at the end of the period.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TimerEvents: u8 {
        /// First compare channel: direction lines settle.
        const DIRECTION_COMPARE = 0b001;
        /// Second compare channel: step lines pulse.
        const STEP_COMPARE = 0b010;
        /// Period end: the next step is dispatched.
        const UPDATE = 0b100;
    }
}

/// One-shot step timer with two compare channels and a period-end event.
pub trait StepTimer {
    /// Events currently latched.
    fn pending(&self) -> TimerEvents;

    /// Acknowledge the given events.
    fn clear(&mut self, events: TimerEvents);

    /// Load `reload` ticks as the period, select single-pulse mode and start.
    ///
    /// The timer must not refire until started again.
    fn start_one_shot(&mut self, reload: u16);
}

/// Continuously updated raw joystick sample pair `[x, y]`.
///
/// Read without synchronization; a torn pair is acceptable.
pub trait AnalogSource {
    /// Latest raw samples.
    fn sample(&self) -> [u8; 2];
}

impl<A: AnalogSource + ?Sized> AnalogSource for &A {
    fn sample(&self) -> [u8; 2] {
        (**self).sample()
    }
}

/// Direction and step lines of one axis.
#[derive(Debug)]
pub struct AxisPins<P> {
    /// Direction line.
    pub direction: P,
    /// Step pulse line.
    pub step: P,
}

impl<P> AxisPins<P> {
    /// Create a new axis pin pair.
    pub fn new(direction: P, step: P) -> Self {
        Self { direction, step }
    }
}

/// All six output lines of the machine.
#[derive(Debug)]
pub struct MotorPins<P> {
    /// X axis lines.
    pub x: AxisPins<P>,
    /// Y axis lines.
    pub y: AxisPins<P>,
    /// Z axis lines.
    pub z: AxisPins<P>,
}

impl<P: OutputPin> MotorPins<P> {
    /// Create a new pin set.
    pub fn new(x: AxisPins<P>, y: AxisPins<P>, z: AxisPins<P>) -> Self {
        Self { x, y, z }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisPins<P> {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Drive every direction and step line low.
    pub fn reset_all(&mut self) -> Result<(), MachineError> {
        for axis in Axis::ALL {
            let pins = self.axis_mut(axis);
            pins.direction.set_low().map_err(|_| MachineError::PinError)?;
            pins.step.set_low().map_err(|_| MachineError::PinError)?;
        }
        Ok(())
    }

    /// Raise the direction line of `axis`.
    pub fn assert_direction(&mut self, axis: Axis) -> Result<(), MachineError> {
        self.axis_mut(axis)
            .direction
            .set_high()
            .map_err(|_| MachineError::PinError)
    }

    /// Raise the step line of `axis`.
    pub fn assert_step(&mut self, axis: Axis) -> Result<(), MachineError> {
        self.axis_mut(axis)
            .step
            .set_high()
            .map_err(|_| MachineError::PinError)
    }
}
