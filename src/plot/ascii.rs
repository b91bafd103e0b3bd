//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal or a log
//! - deterministic output (helpful for golden tests)
//!
//! The series is drawn as a `*` polyline, x = time and y = kW.

use crate::domain::DemoSeries;

/// Render the demo series on a `width` x `height` character grid.
pub fn render_series_plot(series: &DemoSeries, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|p| (p.timestamp.timestamp() as f64, p.value))
        .collect();

    let (x_min, x_max) = x_range(&points).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = series
        .value_range()
        .filter(|(lo, hi)| hi > lo)
        .unwrap_or_else(|| {
            let v = series.first().map(|p| p.value).unwrap_or(0.0);
            (v - 0.5, v + 0.5)
        });
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    let mut prev = None;
    for &(x, y) in &points {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(&mut grid, c0, r0, col, row, '*');
        } else {
            grid[row][col] = '*';
        }
        prev = Some((col, row));
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot [{}]: n={} | y=[{y_min:.2}, {y_max:.2}] kW\n",
        series.label,
        points.len()
    ));

    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }

    out
}

fn x_range(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let first = points.first()?.0;
    let last = points.last()?.0;
    if last > first { Some((first, last)) } else { None }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0 && (y0 as usize) < grid.len() && x0 >= 0 && (x0 as usize) < grid[0].len() {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::domain::SeriesPoint;

    #[test]
    fn plot_golden_snapshot_small() {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let series = DemoSeries::new(vec![
            SeriesPoint { timestamp: t0, value: 500.0 },
            SeriesPoint { timestamp: t0 + Duration::minutes(15), value: 520.0 },
            SeriesPoint { timestamp: t0 + Duration::minutes(30), value: 500.0 },
        ]);

        let txt = render_series_plot(&series, 11, 5);
        let expected = concat!(
            "Plot [DEMO]: n=3 | y=[499.00, 521.00] kW\n",
            "     *\n",
            "    * *\n",
            "  **   **\n",
            " *       *\n",
            "*         *\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn flat_series_still_renders() {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let series = DemoSeries::new(vec![
            SeriesPoint { timestamp: t0, value: 500.0 },
            SeriesPoint { timestamp: t0 + Duration::minutes(15), value: 500.0 },
        ]);
        let txt = render_series_plot(&series, 10, 5);
        assert_eq!(txt.lines().count(), 6);
        assert!(txt.lines().any(|l| l == "**********"));
    }
}
