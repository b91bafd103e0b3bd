//! Shared domain types.
//!
//! These types are intentionally kept small and serializable so they can be:
//!
//! - handed straight to the chart widget
//! - printed as tables by the CLI
//! - exported to CSV/JSON

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Label attached to every generated series so nobody mistakes it for telemetry.
pub const DEMO_LABEL: &str = "DEMO";

/// One FAQ row: a question (unique key) and its canned answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QaEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A single sample of the demo power series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    /// Power draw in kW.
    pub value: f64,
}

/// Shape of the synthetic power series.
///
/// Constructed per render request and thrown away afterwards; nothing here
/// is persisted between draws.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesParams {
    /// Trailing window ending at `now`.
    pub window: Duration,
    /// Spacing between consecutive samples.
    pub interval: Duration,
    /// Resting level (kW).
    pub baseline: f64,
    /// Standard deviation of the additive Gaussian noise (kW).
    pub noise_std: f64,
    /// Peak height of the Gaussian bump (kW).
    pub bump_amplitude: f64,
    /// Bump center as a fraction of the point count.
    pub bump_center_frac: f64,
    /// Bump spread (sigma) as a fraction of the point count.
    pub bump_width_frac: f64,
}

impl SeriesParams {
    pub const DEFAULT_WINDOW_MINUTES: i64 = 24 * 60;
    pub const DEFAULT_INTERVAL_MINUTES: i64 = 15;
    pub const DEFAULT_BASELINE: f64 = 500.0;
    pub const DEFAULT_NOISE_STD: f64 = 15.0;
    pub const DEFAULT_BUMP_AMPLITUDE: f64 = 80.0;
    pub const DEFAULT_BUMP_CENTER: f64 = 0.5;
    pub const DEFAULT_BUMP_WIDTH: f64 = 0.1;

    /// Same shape with the noise switched off (deterministic output).
    pub fn without_noise(&self) -> Self {
        Self {
            noise_std: 0.0,
            ..self.clone()
        }
    }
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            window: Duration::minutes(Self::DEFAULT_WINDOW_MINUTES),
            interval: Duration::minutes(Self::DEFAULT_INTERVAL_MINUTES),
            baseline: Self::DEFAULT_BASELINE,
            noise_std: Self::DEFAULT_NOISE_STD,
            bump_amplitude: Self::DEFAULT_BUMP_AMPLITUDE,
            bump_center_frac: Self::DEFAULT_BUMP_CENTER,
            bump_width_frac: Self::DEFAULT_BUMP_WIDTH,
        }
    }
}

/// A generated series together with the label the chart must display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoSeries {
    pub label: &'static str,
    pub points: Vec<SeriesPoint>,
}

impl DemoSeries {
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Self {
            label: DEMO_LABEL,
            points,
        }
    }

    /// Smallest and largest value, or `None` for an empty series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for p in &self.points {
            lo = lo.min(p.value);
            hi = hi.max(p.value);
        }
        if lo.is_finite() && hi.is_finite() {
            Some((lo, hi))
        } else {
            None
        }
    }

    pub fn first(&self) -> Option<&SeriesPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_constants() {
        let p = SeriesParams::default();
        assert_eq!(p.window, Duration::hours(24));
        assert_eq!(p.interval, Duration::minutes(15));
        assert_eq!(p.baseline, 500.0);
        assert_eq!(p.noise_std, 15.0);
        assert_eq!(p.bump_amplitude, 80.0);
        assert_eq!(p.without_noise().noise_std, 0.0);
    }

    #[test]
    fn demo_series_reports_value_range() {
        let t = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
        let series = DemoSeries::new(vec![
            SeriesPoint { timestamp: t, value: 510.0 },
            SeriesPoint { timestamp: t + Duration::minutes(15), value: 495.5 },
        ]);
        assert_eq!(series.label, DEMO_LABEL);
        assert_eq!(series.value_range(), Some((495.5, 510.0)));
        assert!(DemoSeries::new(Vec::new()).value_range().is_none());
    }
}
