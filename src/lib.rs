//! # cnc-motion
//!
//! Real-time motion core of a three-axis stepper controller.
//!
//! ## Features
//!
//! - **Joystick jogging**: a 2-axis analog vector becomes a line-interpolated
//!   step stream with feed rate proportional to deflection
//! - **Program streaming**: 3-byte step records pulled from any byte source
//! - **Diagonal correction**: pulse periods stretched by √2 / √3 so linear
//!   speed does not depend on how many axes move together
//! - **Interrupt driven**: a one-shot timer's three events sequence direction,
//!   step and dispatch of the next step
//! - **embedded-hal 1.0**: uses `OutputPin` for STEP/DIR
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cnc_motion::{MachineConfig, MachineController, OperatingState};
//!
//! let config: MachineConfig = cnc_motion::load_config("machine.toml")?;
//! let mut machine = MachineController::new(config, pins, timer, joystick, program)?;
//!
//! machine.set_state(OperatingState::ManualControl);
//! machine.start()?;
//!
//! // in the timer ISR
//! machine.on_timer_interrupt()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod machine;
pub mod motion;

// Re-exports for ergonomic API
pub use config::{validate_config, AxisPolarity, MachineConfig, MachineParameters, ManualConfig};
pub use error::{Error, Result};
pub use machine::{
    AnalogSource, AxisPins, Event, EventKind, MachineController, MotorPins, OperatingState,
    Position, StepTimer, TimerEvents,
};
pub use motion::{Axis, AxisFlags, AxisMotion, ByteSource, ManualInterpolator, ProgramDecoder, Step};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{FeedRate, Hertz, Steps, Ticks};
