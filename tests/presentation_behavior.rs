//! Behavior-driven tests for presentation helpers
//!
//! These tests verify the values the UI layer renders: change summaries and
//! chart rows derived from fetched series.

mod support;

use std::sync::Arc;

use lienscope_core::{
    format_chart_data, CalendarDate, ChangeSummary, MarketDataPoint, Metric, Series,
};
use serde_json::json;
use support::{client_with, RecordingHttpClient};

fn series(points: &[(&str, f64)]) -> Series {
    let points = points
        .iter()
        .map(|(date, value)| {
            MarketDataPoint::new(CalendarDate::parse(date).expect("valid date"), *value)
                .expect("finite value")
        })
        .collect();
    Series::new(points).expect("ascending series")
}

// =============================================================================
// Change Calculator
// =============================================================================

#[test]
fn summary_of_short_series_is_all_zero() {
    let zero = ChangeSummary {
        current: 0.0,
        previous: 0.0,
        change: 0.0,
        change_percent: 0.0,
    };

    assert_eq!(Series::empty().change_summary(), zero);
    assert_eq!(series(&[("2024-01-01", 6.9)]).change_summary(), zero);
}

#[test]
fn rise_from_100_to_110_is_ten_percent() {
    let summary = series(&[
        ("2024-01-01", 95.0),
        ("2024-02-01", 100.0),
        ("2024-03-01", 110.0),
    ])
    .change_summary();

    assert_eq!(summary.current, 110.0);
    assert_eq!(summary.previous, 100.0);
    assert_eq!(summary.change, 10.0);
    assert!((summary.change_percent - 10.0).abs() < 1e-9);
}

#[test]
fn rise_from_zero_reports_zero_percent_not_infinity() {
    let summary = series(&[("2024-01-01", 0.0), ("2024-02-01", 5.0)]).change_summary();

    assert_eq!(summary.change, 5.0);
    assert_eq!(summary.change_percent, 0.0);
    assert!(summary.change_percent.is_finite());
}

#[test]
fn decline_gives_negative_percent() {
    let summary = series(&[("2024-01-01", 7.0), ("2024-01-08", 6.3)]).change_summary();

    assert!(summary.change < 0.0);
    assert!((summary.change_percent - -10.0).abs() < 1e-9);
}

// =============================================================================
// Chart Data Formatter
// =============================================================================

#[test]
fn chart_row_carries_date_labelled_value_and_short_date() {
    let rows = format_chart_data(&series(&[("2024-01-15", 6.8)]), "rate");

    let row = serde_json::to_value(&rows[0]).expect("serializes");
    assert_eq!(row["date"], json!("2024-01-15"));
    assert_eq!(row["rate"], json!(6.8));
    assert_eq!(row["formattedDate"], json!("Jan 15"));
}

#[test]
fn chart_rows_preserve_series_order_and_length() {
    let source = series(&[
        ("2023-11-02", 7.76),
        ("2023-11-09", 7.5),
        ("2023-11-16", 7.44),
    ]);

    let rows = format_chart_data(&source, "rate");

    assert_eq!(rows.len(), source.len());
    let labels = rows
        .iter()
        .map(|row| row.formatted_date.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["Nov 2", "Nov 9", "Nov 16"]);
}

// =============================================================================
// End-to-End: Fetch then Present
// =============================================================================

#[tokio::test]
async fn fetched_snapshot_feeds_summary_and_chart() {
    // Given: FRED returns two observations and a sentinel
    let body = r#"{"observations":[
        {"date":"2024-03-01","value":"6.5"},
        {"date":"2024-02-01","value":"."},
        {"date":"2024-01-01","value":"6.9"}
    ]}"#;
    let client = client_with(Arc::new(RecordingHttpClient::json(body)));

    // When: The snapshot is fetched and projected
    let snapshot = client.fetch(Metric::MortgageRate, 30).await;
    let summary = snapshot.change();
    let chart = snapshot.chart(Metric::MortgageRate.chart_label());

    // Then: The summary reflects the two live points and the chart matches
    assert_eq!(summary.current, 6.5);
    assert_eq!(summary.previous, 6.9);
    assert!(summary.change < 0.0);
    assert_eq!(chart.len(), 2);
    assert_eq!(chart[0].formatted_date, "Jan 1");
    assert_eq!(chart[1].value_for("rate"), Some(6.5));
}
