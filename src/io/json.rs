//! Read/write series JSON documents.
//!
//! A series document is the "portable" form of one generated series:
//! - the demo label
//! - the generator parameters that produced it
//! - the points themselves

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DemoSeries, SeriesParams, SeriesPoint};
use crate::error::AppError;
use crate::series::{duration_from_minutes, point_count};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsRecord {
    pub window_minutes: i64,
    pub interval_minutes: i64,
    pub baseline: f64,
    pub noise_std: f64,
    pub bump_amplitude: f64,
    pub bump_center: f64,
    pub bump_width: f64,
}

impl From<&SeriesParams> for ParamsRecord {
    fn from(p: &SeriesParams) -> Self {
        Self {
            window_minutes: p.window.num_minutes(),
            interval_minutes: p.interval.num_minutes(),
            baseline: p.baseline,
            noise_std: p.noise_std,
            bump_amplitude: p.bump_amplitude,
            bump_center: p.bump_center_frac,
            bump_width: p.bump_width_frac,
        }
    }
}

impl TryFrom<&ParamsRecord> for SeriesParams {
    type Error = AppError;

    fn try_from(r: &ParamsRecord) -> Result<Self, AppError> {
        Ok(Self {
            window: duration_from_minutes(r.window_minutes, "Window")?,
            interval: duration_from_minutes(r.interval_minutes, "Sample interval")?,
            baseline: r.baseline,
            noise_std: r.noise_std,
            bump_amplitude: r.bump_amplitude,
            bump_center_frac: r.bump_center,
            bump_width_frac: r.bump_width,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDocument {
    pub tool: String,
    pub label: String,
    pub generated_at: DateTime<Utc>,
    pub seed: Option<u64>,
    pub params: ParamsRecord,
    pub points: Vec<SeriesPoint>,
}

impl SeriesDocument {
    pub fn new(
        series: &DemoSeries,
        params: &SeriesParams,
        generated_at: DateTime<Utc>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            tool: "bms".to_string(),
            label: series.label.to_string(),
            generated_at,
            seed,
            params: ParamsRecord::from(params),
            points: series.points.clone(),
        }
    }

    /// Turn a loaded document back into a series and the parameters that made it.
    ///
    /// The parameters go through the same validation as freshly parsed flags, and
    /// the stored points must match them in count and be finite.
    pub fn into_series(self) -> Result<(DemoSeries, SeriesParams), AppError> {
        let params = SeriesParams::try_from(&self.params)?;
        let n = point_count(&params)?;
        if self.points.len() != n {
            return Err(AppError::usage(format!(
                "Series JSON holds {} points but its parameters describe {n}.",
                self.points.len()
            )));
        }
        if let Some(bad) = self.points.iter().find(|p| !p.value.is_finite()) {
            return Err(AppError::usage(format!(
                "Series JSON has a non-finite value at {}.",
                bad.timestamp.to_rfc3339()
            )));
        }
        Ok((DemoSeries::new(self.points), params))
    }
}

/// Write a series JSON file.
pub fn write_series_json(path: &Path, doc: &SeriesDocument) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create series JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, doc)
        .map_err(|e| AppError::runtime(format!("Failed to write series JSON: {e}")))?;

    log::info!("wrote series document to {}", path.display());
    Ok(())
}

/// Read a series JSON file.
pub fn read_series_json(path: &Path) -> Result<SeriesDocument, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::usage(format!("Failed to open series JSON '{}': {e}", path.display())))?;
    let doc: SeriesDocument =
        serde_json::from_reader(file).map_err(|e| AppError::usage(format!("Invalid series JSON: {e}")))?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::series::SeriesSource;

    #[test]
    fn document_keeps_label_params_and_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.json");

        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let params = SeriesParams::default();
        let series = SeriesSource::Seeded(3).generate(now, &params).unwrap();
        let doc = SeriesDocument::new(&series, &params, now, Some(3));

        write_series_json(&path, &doc).unwrap();
        let back = read_series_json(&path).unwrap();

        assert_eq!(back.label, "DEMO");
        assert_eq!(back.seed, Some(3));
        assert_eq!(back.points.len(), 97);
        assert_eq!(back.points.last().unwrap().timestamp, now);
        assert_eq!(SeriesParams::try_from(&back.params).unwrap(), params);

        let (replayed, replayed_params) = back.into_series().unwrap();
        assert_eq!(replayed.points, series.points);
        assert_eq!(replayed_params, params);
    }

    #[test]
    fn out_of_range_minutes_in_a_document_are_errors() {
        let mut record = ParamsRecord::from(&SeriesParams::default());
        record.window_minutes = i64::MAX;
        let err = SeriesParams::try_from(&record).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
        assert!(err.message().contains("out of range"));

        let mut record = ParamsRecord::from(&SeriesParams::default());
        record.interval_minutes = i64::MIN;
        assert!(SeriesParams::try_from(&record).is_err());
    }

    #[test]
    fn replay_rejects_documents_that_disagree_with_their_params() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let params = SeriesParams::default();
        let series = SeriesSource::Seeded(3).generate(now, &params).unwrap();

        let mut short = SeriesDocument::new(&series, &params, now, Some(3));
        short.points.pop();
        let err = short.into_series().unwrap_err();
        assert!(err.message().contains("96 points"), "{}", err.message());

        let mut bad_width = SeriesDocument::new(&series, &params, now, Some(3));
        bad_width.params.bump_width = 0.0;
        assert!(bad_width.into_series().is_err());

        let mut non_finite = SeriesDocument::new(&series, &params, now, Some(3));
        non_finite.points[10].value = f64::NAN;
        assert!(non_finite.into_series().is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_series_json(&path).unwrap_err();
        assert!(err.message().starts_with("Invalid series JSON"));
    }
}
