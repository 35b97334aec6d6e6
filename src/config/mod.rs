//! Configuration module for cnc-motion.
//!
//! Provides the machine parameters, joystick tuning and axis polarity that
//! the controller is constructed with, loaded from TOML files (with `std`
//! feature) or built in code.

mod machine;
mod manual;
mod polarity;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use machine::MachineParameters;
pub use manual::ManualConfig;
pub use polarity::AxisPolarity;
pub use system::{MachineConfig, DEFAULT_IDLE_RELOAD};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{FeedRate, Hertz, MillimetersPerSecSquared, Steps, Ticks};
