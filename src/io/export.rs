//! Export a generated series to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.
//! Every row repeats the demo label so the data cannot be lifted out of context.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::SecondsFormat;

use crate::domain::DemoSeries;
use crate::error::AppError;

/// Write the series to a CSV file.
pub fn write_series_csv(path: &Path, series: &DemoSeries) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "timestamp,value_kw,label")
        .map_err(|e| AppError::runtime(format!("Failed to write export CSV header: {e}")))?;

    for p in &series.points {
        writeln!(
            out,
            "{},{:.4},{}",
            p.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            p.value,
            series.label,
        )
        .map_err(|e| AppError::runtime(format!("Failed to write export CSV row: {e}")))?;
    }

    out.flush()
        .map_err(|e| AppError::runtime(format!("Failed to flush export CSV: {e}")))?;

    log::info!("wrote {} points to {}", series.points.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::domain::SeriesPoint;

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.csv");

        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let series = DemoSeries::new(vec![
            SeriesPoint { timestamp: t0, value: 500.0 },
            SeriesPoint { timestamp: t0 + Duration::minutes(15), value: 512.5 },
        ]);

        write_series_csv(&path, &series).unwrap();
        let txt = std::fs::read_to_string(&path).unwrap();
        let expected = concat!(
            "timestamp,value_kw,label\n",
            "2025-01-01T00:00:00Z,500.0000,DEMO\n",
            "2025-01-01T00:15:00Z,512.5000,DEMO\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("series.csv");
        let series = DemoSeries::new(Vec::new());
        let err = write_series_csv(&path, &series).unwrap_err();
        assert!(err.message().contains("Failed to create export CSV"));
    }
}
