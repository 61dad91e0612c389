//! Property-based tests for configuration validation

use proptest::prelude::*;
use qps_simulator::config::{QpsConfig, SimulatorConfig};

proptest! {
    /// Test that valid port numbers pass validation
    #[test]
    fn test_valid_port_passes(
        port in 1u16..=65535,
    ) {
        let mut config = SimulatorConfig::default();
        config.server.port = port;

        let result = config.validate();
        prop_assert!(result.is_ok(), "Port {} should be valid", port);
    }

    /// Test that valid burst probability passes
    #[test]
    fn test_valid_burst_probability(
        probability in 0.0f64..=1.0,
    ) {
        let mut config = SimulatorConfig::default();
        config.qps.burst_probability = probability;

        let result = config.validate();
        prop_assert!(result.is_ok(), "Probability {} should be valid", probability);
    }

    /// Test that out-of-range burst probability fails
    #[test]
    fn test_invalid_burst_probability(
        probability in prop_oneof![-10.0f64..-0.001, 1.001f64..10.0],
    ) {
        let mut config = QpsConfig::default();
        config.burst_probability = probability;

        prop_assert!(config.validate().is_err());
    }

    /// Test that ordered peak windows pass and inverted ones fail
    #[test]
    fn test_peak_window_ordering(
        start in 0u32..23,
        end in 1u32..=23,
    ) {
        let mut config = QpsConfig::default();
        config.peak_start_hour = start;
        config.peak_end_hour = end;

        prop_assert_eq!(config.validate().is_ok(), start < end);
    }

    /// Test that a base-rate range passes only when ordered
    #[test]
    fn test_base_rate_range(
        min in 0.0f64..1000.0,
        max in 0.0f64..1000.0,
    ) {
        let mut config = QpsConfig::default();
        config.base_rate_min = min;
        config.base_rate_max = max;

        prop_assert_eq!(config.validate().is_ok(), min <= max);
    }

    /// Test that default point counts above the cap fail
    #[test]
    fn test_default_points_capped(
        max_points in 1i64..10_000,
        default_points in 1i64..20_000,
    ) {
        let mut config = QpsConfig::default();
        config.max_points = max_points;
        config.default_points = default_points;

        prop_assert_eq!(config.validate().is_ok(), default_points <= max_points);
    }

    /// Test that host string validation works
    #[test]
    fn test_host_string(
        host in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
    ) {
        let mut config = SimulatorConfig::default();
        config.server.host = host;

        prop_assert!(config.validate().is_ok());
    }

    /// Test that configuration survives a JSON round trip
    #[test]
    fn test_config_json_round_trip(
        seed in proptest::option::of(any::<u64>()),
        default_points in 1i64..=10_000,
    ) {
        let mut config = SimulatorConfig::default();
        config.seed = seed;
        config.qps.default_points = default_points;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SimulatorConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed.seed, seed);
        prop_assert_eq!(parsed.qps, config.qps);
    }
}

proptest! {
    /// Test that a NaN or infinite QPS parameter never validates
    #[test]
    fn test_non_finite_qps_parameter_rejected(
        field in 0usize..10,
        value in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
    ) {
        let mut config = QpsConfig::default();
        match field {
            0 => config.base_rate_min = value,
            1 => config.base_rate_max = value,
            2 => config.peak_amplitude = value,
            3 => config.off_peak_factor = value,
            4 => config.noise_min = value,
            5 => config.noise_max = value,
            6 => config.burst_probability = value,
            7 => config.burst_min = value,
            8 => config.burst_max = value,
            _ => config.smoothing_window_secs = value,
        }

        prop_assert!(config.validate().is_err(), "field {} accepted {}", field, value);
    }
}

#[test]
fn test_nan_from_yaml_file_rejected() {
    use std::io::Write;

    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "qps:\n  peak_amplitude: .nan").unwrap();

    assert!(SimulatorConfig::from_file(file.path()).is_err());
}
