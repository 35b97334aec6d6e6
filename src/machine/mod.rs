//! Machine module for cnc-motion.
//!
//! Provides the controller that owns all stepping state, the interrupt-driven
//! pulse sequencer and the hardware traits it is generic over.

mod controller;
mod hal;
mod position;
mod state;

pub use controller::MachineController;
pub use hal::{AnalogSource, AxisPins, MotorPins, StepTimer, TimerEvents};
pub use position::Position;
pub use state::{Event, EventKind, OperatingState};
