//! Plain-text output for the CLI subcommands.
//!
//! We keep formatting code in one place so:
//! - the FAQ table and the generator stay free of presentation details
//! - output changes are localized (and covered by golden-string tests)

use std::fmt::Display;

use chrono::TimeZone;

use crate::domain::{DemoSeries, QaEntry, SeriesParams};
use crate::faq::FaqTable;

/// Numbered list of every FAQ question, in display order.
pub fn format_question_list(faq: &FaqTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("Anomaly FAQ ({} questions):\n", faq.len()));
    for (idx, question) in faq.questions().enumerate() {
        out.push_str(&format!("{:>3}) {question}\n", idx + 1));
    }
    out
}

/// A question followed by its answer text.
pub fn format_answer(entry: &QaEntry) -> String {
    let mut out = String::new();
    out.push_str(&format!("Q: {}\n\n", entry.question));
    out.push_str(entry.answer);
    out.push('\n');
    out
}

/// Summary header plus one row per point, timestamps rendered in `tz`.
pub fn format_series_table<Tz>(series: &DemoSeries, params: &SeriesParams, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    out.push_str(&format_series_summary(series, params));

    out.push_str(&format!("{:<20} {:>10}\n", "timestamp", "power_kw"));
    for p in &series.points {
        out.push_str(&format!(
            "{:<20} {:>10.2}\n",
            p.timestamp.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string(),
            p.value
        ));
    }
    out
}

/// One-paragraph description of a generated series.
pub fn format_series_summary(series: &DemoSeries, params: &SeriesParams) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Demo: Power Consumption (kW) vs Time [{}] ===\n", series.label));
    out.push_str(&format!(
        "Window: {} min @ {} min | n={}\n",
        params.window.num_minutes(),
        params.interval.num_minutes(),
        series.points.len(),
    ));
    out.push_str(&format!(
        "Shape: baseline={:.1}kW noise_std={:.1} bump={:.1}kW @ {:.2} (width {:.2})\n",
        params.baseline,
        params.noise_std,
        params.bump_amplitude,
        params.bump_center_frac,
        params.bump_width_frac,
    ));
    if let Some((lo, hi)) = series.value_range() {
        out.push_str(&format!("Range: [{lo:.2}, {hi:.2}] kW\n"));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::SeriesPoint;

    #[test]
    fn question_list_is_numbered_from_one() {
        let txt = format_question_list(&FaqTable::builtin());
        let mut lines = txt.lines();
        assert_eq!(lines.next(), Some("Anomaly FAQ (12 questions):"));
        assert_eq!(lines.next(), Some("  1) Higher ambient temperature"));
        assert_eq!(lines.next(), Some("  2) Increase in IT load"));
        assert!(txt.contains(" 12) What triggers an internal alert from the model\n"));
    }

    #[test]
    fn answer_block_golden() {
        let faq = FaqTable::builtin();
        let entry = faq.resolve("Health KPIs and thresholds").unwrap();
        let expected = concat!(
            "Q: Health KPIs and thresholds\n",
            "\n",
            "Common KPIs:\n",
            "- COP/EER\n",
            "- Rack inlet temperature compliance\n",
            "- UPS efficiency\n",
            "- PUE & energy KPIs\n",
        );
        assert_eq!(format_answer(entry), expected);
    }

    #[test]
    fn series_table_golden_small() {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let series = DemoSeries::new(vec![
            SeriesPoint { timestamp: t0, value: 500.0 },
            SeriesPoint { timestamp: t0 + Duration::minutes(15), value: 512.25 },
        ]);
        let params = SeriesParams {
            window: Duration::minutes(15),
            ..SeriesParams::default()
        };

        let txt = format_series_table(&series, &params, &Utc);
        let expected = concat!(
            "=== Demo: Power Consumption (kW) vs Time [DEMO] ===\n",
            "Window: 15 min @ 15 min | n=2\n",
            "Shape: baseline=500.0kW noise_std=15.0 bump=80.0kW @ 0.50 (width 0.10)\n",
            "Range: [500.00, 512.25] kW\n",
            "\n",
            "timestamp              power_kw\n",
            "2025-01-01 00:00         500.00\n",
            "2025-01-01 00:15         512.25\n",
        );
        assert_eq!(txt, expected);
    }
}
