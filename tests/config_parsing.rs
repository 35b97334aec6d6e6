//! TOML configuration parsing and validation.

#![cfg(feature = "std")]

use std::io::Write;

use tempfile::NamedTempFile;

use cnc_motion::config::{parse_config, DEFAULT_IDLE_RELOAD};
use cnc_motion::error::{ConfigError, Error};
use cnc_motion::{load_config, AxisPolarity, FeedRate, Hertz, MachineConfig, Ticks};

/// A full machine description.
#[test]
fn test_parse_machine_config() {
    let toml_str = r#"
idle_reload_ticks = 5000

[parameters]
steps_per_millimeter = 800.0
max_speed = 2400.0
max_acceleration = 100.0
clock_frequency_hz = 1000000

[manual]
deadzone_radius = 0.05
min_feed = 10.0
max_feed = 2000.0
zero_x = 126
zero_y = 130

[polarity]
x = true
y = false
z = false
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.parameters.steps_per_millimeter, 800.0);
    assert_eq!(config.parameters.max_speed, FeedRate(2400.0));
    assert_eq!(config.parameters.max_acceleration.0, 100.0);
    assert_eq!(config.parameters.clock_frequency, Hertz(1_000_000));

    assert_eq!(config.manual.deadzone_radius, 0.05);
    assert_eq!(config.manual.min_feed.value(), 10.0);
    assert_eq!(config.manual.max_feed.value(), 2000.0);
    assert_eq!((config.manual.zero_x, config.manual.zero_y), (126, 130));

    assert_eq!(
        config.polarity,
        AxisPolarity {
            x: true,
            y: false,
            z: false
        }
    );
    assert_eq!(config.idle_reload_ticks, Ticks(5000));
}

/// Sections that are left out keep their defaults.
#[test]
fn test_partial_config() {
    let config = parse_config(
        r#"
[manual]
max_feed = 1200.0
"#,
    )
    .unwrap();

    let defaults = MachineConfig::default();
    assert_eq!(config.manual.max_feed.value(), 1200.0);
    assert_eq!(config.manual.min_feed, defaults.manual.min_feed);
    assert_eq!(config.parameters, defaults.parameters);
    assert_eq!(config.polarity, AxisPolarity::default());
    assert_eq!(config.idle_reload_ticks, DEFAULT_IDLE_RELOAD);
}

#[test]
fn test_default_values() {
    let config = MachineConfig::default();

    assert_eq!(config.parameters.steps_per_millimeter, 640.0);
    assert_eq!(config.parameters.max_speed.value(), 3000.0);
    assert_eq!(config.parameters.max_acceleration.0, 150.0);
    assert_eq!(config.parameters.clock_frequency.value(), 200_000);
    assert_eq!(config.manual.deadzone_radius, 0.1);
    assert_eq!(config.manual.min_feed.value(), 30.0);
    assert_eq!(config.manual.max_feed.value(), 3000.0);
    assert_eq!([config.manual.zero_x, config.manual.zero_y], [128, 128]);
    assert!(config.polarity.z && !config.polarity.x && !config.polarity.y);
    assert_eq!(config.idle_reload_ticks.value(), 10_000);
}

#[test]
fn test_rejects_inverted_feed_range() {
    let result = parse_config(
        r#"
[manual]
min_feed = 500.0
max_feed = 100.0
"#,
    );
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidFeedRange { .. }))
    ));
}

#[test]
fn test_rejects_zero_clock() {
    let result = parse_config(
        r#"
[parameters]
clock_frequency_hz = 0
"#,
    );
    assert_eq!(
        result,
        Err(Error::Config(ConfigError::InvalidClockFrequency(0)))
    );
}

#[test]
fn test_rejects_zero_idle_reload() {
    let result = parse_config("idle_reload_ticks = 0");
    assert_eq!(result, Err(Error::Config(ConfigError::InvalidIdleReload(0))));
}

#[test]
fn test_rejects_out_of_range_zero_offset() {
    let result = parse_config(
        r#"
[manual]
zero_x = 300
"#,
    );
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[parameters]\nsteps_per_millimeter = 200.0").unwrap();

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.parameters.steps_per_millimeter, 200.0);
}
