//! Tests for forecast series handling
//!
//! Tests cover:
//! - Stride downsampling bounds and idempotence
//! - Date parsing of the formats the forecast endpoint sends
//! - Chart data, summaries and change against the last real value

use chrono::{NaiveDate, Timelike};
use vora::api::TimePoint;
use vora::series::{
    downsample, from_time_points, parse_timestamp, ForecastChartData, SeriesSummary,
    FORECAST_MAX_POINTS, HISTORY_MAX_POINTS,
};

use crate::common::daily_points;

// ============================================
// Downsample Tests
// ============================================

#[test]
fn test_downsample_never_exceeds_twice_the_limit() {
    for len in [0usize, 1, 59, 60, 61, 119, 120, 121, 399, 400, 401, 799, 1000, 5000] {
        let values: Vec<usize> = (0..len).collect();
        let result = downsample(Some(values.as_slice()), FORECAST_MAX_POINTS);

        assert!(result.len() <= len);
        assert!(result.len() < 2 * FORECAST_MAX_POINTS || len <= FORECAST_MAX_POINTS);
        if len > 0 {
            assert_eq!(result[0], 0, "first point kept for len {}", len);
        }
    }
}

#[test]
fn test_downsample_keeps_order() {
    let values: Vec<usize> = (0..2345).collect();
    let result = downsample(Some(values.as_slice()), HISTORY_MAX_POINTS);
    assert!(result.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_downsample_is_idempotent_once_small() {
    let values: Vec<usize> = (0..800).collect();
    let once = downsample(Some(values.as_slice()), HISTORY_MAX_POINTS);
    let twice = downsample(Some(once.as_slice()), HISTORY_MAX_POINTS);
    assert_eq!(once, twice);
}

#[test]
fn test_downsample_empty_slice() {
    let values: Vec<f64> = Vec::new();
    assert!(downsample(Some(values.as_slice()), 400).is_empty());
}

// ============================================
// Timestamp Tests
// ============================================

#[test]
fn test_parse_timestamp_formats() {
    let midnight = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    assert_eq!(parse_timestamp("2024-03-05"), Some(midnight));
    assert_eq!(parse_timestamp("2024-03-05T00:00:00"), Some(midnight));
    assert_eq!(parse_timestamp("2024-03-05 00:00:00"), Some(midnight));
    assert_eq!(parse_timestamp(" 2024-03-05T00:00:00.000 "), Some(midnight));
}

#[test]
fn test_parse_timestamp_with_offset_converts_to_utc() {
    let parsed = parse_timestamp("2024-03-05T03:00:00+03:00").unwrap();
    assert_eq!(parsed.hour(), 0);
    assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
}

#[test]
fn test_parse_timestamp_rejects_garbage() {
    assert!(parse_timestamp("").is_none());
    assert!(parse_timestamp("yesterday").is_none());
    assert!(parse_timestamp("2024-13-01").is_none());
}

#[test]
fn test_from_time_points_skips_bad_dates() {
    let points = vec![
        TimePoint {
            date: "2024-01-01".into(),
            value: 1.0,
        },
        TimePoint {
            date: "n/a".into(),
            value: 2.0,
        },
        TimePoint {
            date: "2024-01-03T00:00:00".into(),
            value: 3.0,
        },
    ];

    let series = from_time_points(&points);
    assert_eq!(series.len(), 2);
    assert_eq!(series[1].value, 3.0);
    assert_eq!(series[1].label(), "2024-01-03");
}

// ============================================
// Chart Data Tests
// ============================================

#[test]
fn test_chart_data_caps_both_series() {
    let history = from_time_points(&daily_points(1000, 0.0));
    let forecast = from_time_points(&daily_points(120, 0.0));

    let charts = ForecastChartData::build(&history, &forecast);
    assert_eq!(charts.history_labels.len(), charts.history_values.len());
    assert_eq!(charts.history_values.len(), 500);
    assert_eq!(charts.forecast_values.len(), FORECAST_MAX_POINTS);
    assert_eq!(charts.forecast_labels[1], "2024-01-03");
}

#[test]
fn test_chart_data_small_series_unchanged() {
    let history = from_time_points(&daily_points(30, 10.0));
    let forecast = from_time_points(&daily_points(7, 40.0));

    let charts = ForecastChartData::build(&history, &forecast);
    assert_eq!(charts.history_values.len(), 30);
    assert_eq!(charts.forecast_values, vec![40.0, 41.0, 42.0, 43.0, 44.0, 45.0, 46.0]);
    assert_eq!(charts.combined_labels().len(), 37);
}

#[test]
fn test_slots_line_up_on_shared_timeline() {
    let history = from_time_points(&daily_points(3, 1.0));
    let forecast = from_time_points(&daily_points(2, 9.0));
    let charts = ForecastChartData::build(&history, &forecast);

    assert_eq!(
        charts.history_slots(),
        vec![Some(1.0), Some(2.0), Some(3.0), None, None]
    );
    assert_eq!(
        charts.forecast_slots(),
        vec![None, None, None, Some(9.0), Some(10.0)]
    );
}

#[test]
fn test_forecast_summary_and_change() {
    let charts = ForecastChartData {
        history_values: vec![50.0, 100.0],
        forecast_values: vec![90.0, 110.0, 130.0],
        ..Default::default()
    };

    let summary = charts.forecast_summary().unwrap();
    assert_eq!(
        summary,
        SeriesSummary {
            min: 90.0,
            mean: 110.0,
            max: 130.0
        }
    );

    let change = charts.change_vs_last_actual().unwrap();
    assert_eq!(change.len(), 3);
    assert!((change[0] + 10.0).abs() < 1e-9);
    assert!((change[2] - 30.0).abs() < 1e-9);
}

#[test]
fn test_change_undefined_without_baseline() {
    let zero_baseline = ForecastChartData {
        history_values: vec![0.0],
        forecast_values: vec![1.0],
        ..Default::default()
    };
    assert!(zero_baseline.change_vs_last_actual().is_none());

    let no_history = ForecastChartData {
        forecast_values: vec![1.0],
        ..Default::default()
    };
    assert!(no_history.change_vs_last_actual().is_none());
    assert!(ForecastChartData::default().forecast_summary().is_none());
    assert!(ForecastChartData::default().is_empty());
}
