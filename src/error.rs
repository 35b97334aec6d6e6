//! Error types for cnc-motion.
//!
//! Provides unified error handling across configuration and machine control.
//! Stepping itself has no recoverable error taxonomy: a zero-duration step halts,
//! a starved byte source stalls. What remains are configuration mistakes,
//! hardware pin failures and foreground calls made at the wrong time.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all cnc-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Machine controller error
    Machine(MachineError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid steps per millimeter (must be > 0)
    InvalidStepsPerMillimeter(f32),
    /// Invalid max speed (must be > 0)
    InvalidMaxSpeed(f32),
    /// Invalid max acceleration (must be > 0)
    InvalidMaxAcceleration(f32),
    /// Step clock frequency of zero
    InvalidClockFrequency(u32),
    /// Deadzone radius outside `[0, 1)`
    InvalidDeadzone(f32),
    /// Feed range is empty, inverted or non-positive
    InvalidFeedRange {
        /// Minimum feed in mm/min
        min: f32,
        /// Maximum feed in mm/min
        max: f32,
    },
    /// Idle reload of zero ticks
    InvalidIdleReload(u16),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Machine controller errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MachineError {
    /// Pin operation failed
    PinError,
    /// A stepping cycle is armed; the foreground may not touch stepping state
    Busy,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Machine(e) => write!(f, "Machine error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidStepsPerMillimeter(v) => {
                write!(f, "Invalid steps per millimeter: {}. Must be > 0", v)
            }
            ConfigError::InvalidMaxSpeed(v) => write!(f, "Invalid max speed: {}. Must be > 0", v),
            ConfigError::InvalidMaxAcceleration(v) => {
                write!(f, "Invalid max acceleration: {}. Must be > 0", v)
            }
            ConfigError::InvalidClockFrequency(v) => {
                write!(f, "Invalid clock frequency: {} Hz. Must be > 0", v)
            }
            ConfigError::InvalidDeadzone(v) => {
                write!(f, "Invalid deadzone radius: {}. Must be in [0, 1)", v)
            }
            ConfigError::InvalidFeedRange { min, max } => {
                write!(f, "Invalid feed range: min ({}) must be > 0 and < max ({})", min, max)
            }
            ConfigError::InvalidIdleReload(v) => {
                write!(f, "Invalid idle reload: {} ticks. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineError::PinError => write!(f, "GPIO pin operation failed"),
            MachineError::Busy => write!(f, "Stepping cycle in progress"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MachineError> for Error {
    fn from(e: MachineError) -> Self {
        Error::Machine(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MachineError {}
