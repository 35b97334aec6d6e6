//! Motion module for cnc-motion.
//!
//! Provides the step record, the two step producers (joystick interpolation
//! and program decoding) and the pulse period computation.

mod executor;
mod interpolator;
mod program;
mod step;

pub use executor::{corrected_duration, plan_step, PulsePlan};
pub use interpolator::{ManualControlStatus, ManualInterpolator, ShapedVector};
pub use program::{ByteSource, ProgramDecoder};
pub use step::{Axis, AxisFlags, AxisMotion, Direction, Step};
