//! Time series handling for forecast charts.
//!
//! Forecast responses carry a history series and a forecast series. Before
//! charting, each one is thinned with uniform stride sampling and turned
//! into the label/value arrays the chart widgets consume.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::api::TimePoint;

/// Maximum history points handed to the charts
pub const HISTORY_MAX_POINTS: usize = 400;

/// Maximum forecast points handed to the charts
pub const FORECAST_MAX_POINTS: usize = 60;

/// A single observation or prediction
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Chart label: the ISO date, truncated to the day
    pub fn label(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }
}

/// Time-ordered points, in the order the server sent them
pub type TimeSeries = Vec<SeriesPoint>;

/// Parse the date formats the forecast endpoint produces.
///
/// Offsets are converted to UTC; naive datetimes and plain dates are taken
/// as-is.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Convert API points into a series, skipping points whose date does not parse
pub fn from_time_points(points: &[TimePoint]) -> TimeSeries {
    points
        .iter()
        .filter_map(|p| match parse_timestamp(&p.date) {
            Some(timestamp) => Some(SeriesPoint::new(timestamp, p.value)),
            None => {
                tracing::warn!("Skipping point with unparseable date: {}", p.date);
                None
            }
        })
        .collect()
}

/// Reduce `points` for plotting by keeping every `stride`-th element.
///
/// `stride = max(1, len / max_points)` and indices `0, stride, 2*stride, ..`
/// are kept. Inputs with `len <= max_points` are returned unchanged. The
/// result can exceed `max_points` when `len` is not a multiple of
/// `max_points` (1000 points at 400 gives stride 2 and 500 points), and the
/// last point is only kept if it lands on a stride boundary.
pub fn downsample<T: Clone>(points: Option<&[T]>, max_points: usize) -> Vec<T> {
    let Some(points) = points else {
        return Vec::new();
    };

    if points.len() <= max_points {
        return points.to_vec();
    }

    let stride = (points.len() / max_points.max(1)).max(1);
    points.iter().step_by(stride).cloned().collect()
}

/// Min / mean / max of a set of values
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl SeriesSummary {
    /// `None` for an empty slice
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        Some(Self { min, mean, max })
    }
}

/// Chart-ready data for one forecast run.
///
/// Labels and values are parallel arrays. The combined timeline puts the
/// history first and the forecast after it; `None` slots mark where a line
/// has no segment.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ForecastChartData {
    pub history_labels: Vec<String>,
    pub history_values: Vec<f64>,
    pub forecast_labels: Vec<String>,
    pub forecast_values: Vec<f64>,
}

impl ForecastChartData {
    /// Downsample both series (history to 400, forecast to 60) and split
    /// them into label/value arrays
    pub fn build(history: &[SeriesPoint], forecast: &[SeriesPoint]) -> Self {
        let history = downsample(Some(history), HISTORY_MAX_POINTS);
        let forecast = downsample(Some(forecast), FORECAST_MAX_POINTS);

        Self {
            history_labels: history.iter().map(SeriesPoint::label).collect(),
            history_values: history.iter().map(|p| p.value).collect(),
            forecast_labels: forecast.iter().map(SeriesPoint::label).collect(),
            forecast_values: forecast.iter().map(|p| p.value).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.history_values.is_empty() && self.forecast_values.is_empty()
    }

    /// Labels of the shared history + forecast timeline
    pub fn combined_labels(&self) -> Vec<String> {
        self.history_labels
            .iter()
            .chain(self.forecast_labels.iter())
            .cloned()
            .collect()
    }

    /// History values on the shared timeline, padded with `None` over the forecast
    pub fn history_slots(&self) -> Vec<Option<f64>> {
        self.history_values
            .iter()
            .copied()
            .map(Some)
            .chain(std::iter::repeat_n(None, self.forecast_values.len()))
            .collect()
    }

    /// Forecast values on the shared timeline, padded with `None` over the history
    pub fn forecast_slots(&self) -> Vec<Option<f64>> {
        std::iter::repeat_n(None, self.history_values.len())
            .chain(self.forecast_values.iter().copied().map(Some))
            .collect()
    }

    /// Min / mean / max of the forecast values
    pub fn forecast_summary(&self) -> Option<SeriesSummary> {
        SeriesSummary::of(&self.forecast_values)
    }

    /// Percentage change of each forecast value against the last real value.
    ///
    /// `None` when either series is empty or the last real value is zero.
    pub fn change_vs_last_actual(&self) -> Option<Vec<f64>> {
        let last = *self.history_values.last()?;
        if self.forecast_values.is_empty() || last == 0.0 {
            return None;
        }

        Some(
            self.forecast_values
                .iter()
                .map(|v| (v - last) / last * 100.0)
                .collect(),
        )
    }
}
