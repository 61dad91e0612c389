//! Property-based tests for QPS series generation

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use qps_simulator::config::QpsConfig;
use qps_simulator::qps::{FixedClock, QpsGenerator, RngSource};
use qps_simulator::SimulationError;

fn now_at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn generator(seed: u64, now: NaiveDateTime) -> QpsGenerator<RngSource, Arc<FixedClock>> {
    QpsGenerator::with_sources(
        QpsConfig::default(),
        RngSource::with_seed(seed),
        Arc::new(FixedClock::new(now)),
    )
}

fn is_two_decimals(value: f64) -> bool {
    ((value * 100.0).round() - value * 100.0).abs() < 1e-6
}

proptest! {
    /// The series has exactly the requested length
    #[test]
    fn test_series_length(
        seed in any::<u64>(),
        window in 1i64..=1440,
        points in 1i64..=500,
    ) {
        let mut generator = generator(seed, now_at(12, 0));
        let series = generator.calculate_series(window, points).unwrap();
        prop_assert_eq!(series.data.len() as i64, points);
        prop_assert!(series.is_success());
    }

    /// Timestamps start at the window start, increase strictly, and stay before now
    #[test]
    fn test_timestamps_cover_window(
        seed in any::<u64>(),
        window in 1i64..=1440,
        points in 1i64..=500,
        hour in 0u32..24,
    ) {
        let now = now_at(hour, 30);
        let mut generator = generator(seed, now);
        let series = generator.calculate_series(window, points).unwrap();

        prop_assert_eq!(series.data[0].timestamp, now - Duration::minutes(window));
        for pair in series.data.windows(2) {
            prop_assert!(pair[0].timestamp < pair[1].timestamp);
        }
        let last = series.data[series.data.len() - 1].timestamp;
        prop_assert!(last < now);
    }

    /// Consecutive timestamps are spaced evenly, to the microsecond
    #[test]
    fn test_even_spacing(
        seed in any::<u64>(),
        window in 1i64..=1440,
        points in 2i64..=200,
    ) {
        let mut generator = generator(seed, now_at(18, 0));
        let series = generator.calculate_series(window, points).unwrap();

        let step_us = (window * 60_000_000) as f64 / points as f64;
        for (i, pair) in series.data.windows(2).enumerate() {
            let gap = (pair[1].timestamp - pair[0].timestamp).num_microseconds().unwrap();
            prop_assert!((gap as f64 - step_us).abs() <= 1.0, "gap {} at {}", gap, i);
        }
    }

    /// Values are finite, non-negative and carry at most two decimals
    #[test]
    fn test_values_well_formed(
        seed in any::<u64>(),
        window in 1i64..=120,
        points in 1i64..=200,
        hour in 0u32..24,
    ) {
        let mut generator = generator(seed, now_at(hour, 0));
        generator.calculate_series(window, points).unwrap();

        // Second call is the one that actually smooths toward fresh samples
        generator.clock().advance(Duration::minutes(window));
        let series = generator.calculate_series(window, points).unwrap();

        for point in &series.data {
            prop_assert!(point.qps_value.is_finite());
            prop_assert!(point.qps_value >= 0.0);
            prop_assert!(is_two_decimals(point.qps_value), "{}", point.qps_value);
        }
    }

    /// The smoothed rate never leaves the reachable envelope
    #[test]
    fn test_values_within_envelope(
        seed in any::<u64>(),
        points in 1i64..=100,
        hour in 0u32..24,
    ) {
        let mut generator = generator(seed, now_at(hour, 0));
        let base = generator.state().base_rate;
        generator.clock().advance(Duration::minutes(30));
        let series = generator.calculate_series(30, points).unwrap();

        // base * off-peak * min noise up to base * peak * max noise * max burst
        let low = (base * 0.5 * 0.8 * 100.0).floor() / 100.0;
        let high = (base * 1.5 * 1.2 * 2.5 * 100.0).ceil() / 100.0;
        for point in &series.data {
            prop_assert!(point.qps_value >= low && point.qps_value <= high);
        }
    }

    /// Same seed and clock give the same series
    #[test]
    fn test_seeded_determinism(
        seed in any::<u64>(),
        window in 1i64..=60,
        points in 1i64..=100,
    ) {
        let now = now_at(10, 0);
        let mut a = generator(seed, now);
        let mut b = generator(seed, now);

        a.clock().advance(Duration::minutes(window));
        b.clock().advance(Duration::minutes(window));

        prop_assert_eq!(
            a.calculate_series(window, points).unwrap(),
            b.calculate_series(window, points).unwrap()
        );
    }

    /// Non-positive inputs are rejected
    #[test]
    fn test_non_positive_inputs_rejected(
        window in -1000i64..=0,
        points in -1000i64..=0,
    ) {
        let mut generator = generator(7, now_at(12, 0));
        let before = generator.state().clone();

        let by_window = generator.calculate_series(window, 10);
        let by_points = generator.calculate_series(5, points);
        let window_rejected = matches!(by_window, Err(SimulationError::InvalidArgument { .. }));
        let points_rejected = matches!(by_points, Err(SimulationError::InvalidArgument { .. }));
        prop_assert!(window_rejected, "window {} gave {:?}", window, by_window);
        prop_assert!(points_rejected, "points {} gave {:?}", points, by_points);
        prop_assert_eq!(generator.state(), &before);
    }
}
