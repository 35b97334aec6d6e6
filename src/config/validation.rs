//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{MachineConfig, MachineParameters, ManualConfig};

/// Validate a machine configuration.
///
/// Checks:
/// - Steps per millimeter, max speed and max acceleration are positive
/// - Step clock frequency is non-zero
/// - Deadzone radius lies in `[0, 1)`
/// - Feed range is positive and increasing
/// - Idle reload is non-zero
pub fn validate_config(config: &MachineConfig) -> Result<()> {
    validate_parameters(&config.parameters)?;
    validate_manual(&config.manual)?;

    if config.idle_reload_ticks.is_zero() {
        return Err(Error::Config(ConfigError::InvalidIdleReload(
            config.idle_reload_ticks.value(),
        )));
    }

    Ok(())
}

// NaN fails this check as well
fn is_positive(value: f32) -> bool {
    value > 0.0
}

fn validate_parameters(params: &MachineParameters) -> Result<()> {
    if !is_positive(params.steps_per_millimeter) {
        return Err(Error::Config(ConfigError::InvalidStepsPerMillimeter(
            params.steps_per_millimeter,
        )));
    }

    if !is_positive(params.max_speed.0) {
        return Err(Error::Config(ConfigError::InvalidMaxSpeed(params.max_speed.0)));
    }

    // Stored only; still must be physically meaningful
    if !is_positive(params.max_acceleration.0) {
        return Err(Error::Config(ConfigError::InvalidMaxAcceleration(
            params.max_acceleration.0,
        )));
    }

    if params.clock_frequency.0 == 0 {
        return Err(Error::Config(ConfigError::InvalidClockFrequency(
            params.clock_frequency.0,
        )));
    }

    Ok(())
}

fn validate_manual(manual: &ManualConfig) -> Result<()> {
    if !(0.0..1.0).contains(&manual.deadzone_radius) {
        return Err(Error::Config(ConfigError::InvalidDeadzone(manual.deadzone_radius)));
    }

    let (min, max) = (manual.min_feed.0, manual.max_feed.0);
    if !is_positive(min) || max <= min {
        return Err(Error::Config(ConfigError::InvalidFeedRange { min, max }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{FeedRate, Hertz, Ticks};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&MachineConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_steps_per_millimeter() {
        let mut config = MachineConfig::default();
        config.parameters.steps_per_millimeter = 0.0;

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidStepsPerMillimeter(_)))
        ));
    }

    #[test]
    fn test_zero_clock_frequency() {
        let mut config = MachineConfig::default();
        config.parameters.clock_frequency = Hertz(0);

        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidClockFrequency(0)))
        );
    }

    #[test]
    fn test_deadzone_bounds() {
        let mut config = MachineConfig::default();
        config.manual.deadzone_radius = 1.0;
        assert!(validate_config(&config).is_err());

        config.manual.deadzone_radius = -0.1;
        assert!(validate_config(&config).is_err());

        config.manual.deadzone_radius = 0.0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_inverted_feed_range() {
        let mut config = MachineConfig::default();
        config.manual.min_feed = FeedRate(3000.0);
        config.manual.max_feed = FeedRate(30.0);

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidFeedRange { .. }))
        ));
    }

    #[test]
    fn test_zero_idle_reload() {
        let mut config = MachineConfig::default();
        config.idle_reload_ticks = Ticks(0);

        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidIdleReload(0)))
        );
    }
}
