//! Machine configuration - root configuration structure.

use serde::Deserialize;

use super::machine::MachineParameters;
use super::manual::ManualConfig;
use super::polarity::AxisPolarity;
use super::units::Ticks;

/// Reload used when a zero-duration step is executed: the timer still fires
/// once after this many ticks so the dispatcher can re-check the state.
pub const DEFAULT_IDLE_RELOAD: Ticks = Ticks(10_000);

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Fixed machine parameters.
    pub parameters: MachineParameters,

    /// Joystick tuning.
    pub manual: ManualConfig,

    /// Direction polarity per axis.
    pub polarity: AxisPolarity,

    /// Idle re-check period in ticks.
    pub idle_reload_ticks: Ticks,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            parameters: MachineParameters::default(),
            manual: ManualConfig::default(),
            polarity: AxisPolarity::default(),
            idle_reload_ticks: DEFAULT_IDLE_RELOAD,
        }
    }
}
