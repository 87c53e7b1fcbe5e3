//! Behavior-driven tests for the synthetic fallback
//!
//! These tests verify HOW the client degrades when FRED is unreachable,
//! answers with an error status, or sends a payload it cannot normalize.

mod support;

use std::sync::Arc;

use lienscope_core::{
    Cadence, FixedClock, FredAdapter, FredConfig, MarketDataClient, Metric, ProviderId,
    SeriesSnapshot, SYNTHETIC_SERIES_LEN,
};
use support::{client_with, today, RecordingHttpClient};
use time::Duration;

fn assert_synthetic_shape(snapshot: &SeriesSnapshot) {
    let metric = snapshot.metric;
    let profile = metric.synthetic_profile();
    let series = &snapshot.series;

    assert_eq!(snapshot.source, ProviderId::Synthetic, "{metric}");
    assert_eq!(series.len(), SYNTHETIC_SERIES_LEN, "{metric}");
    assert_eq!(series.last().map(|p| p.date), Some(today()), "{metric}");

    for point in series {
        assert!(point.value.is_finite(), "{metric}: {}", point.value);
        assert!(
            point.value >= profile.floor && point.value <= profile.ceiling,
            "{metric}: {} outside [{}, {}]",
            point.value,
            profile.floor,
            profile.ceiling
        );
    }

    for pair in series.points().windows(2) {
        let (earlier, later) = (pair[0].date.into_inner(), pair[1].date.into_inner());
        match metric.cadence() {
            Cadence::Weekly => assert_eq!(later - earlier, Duration::days(7), "{metric}"),
            Cadence::Monthly => {
                let months = (later.year() - earlier.year()) * 12
                    + i32::from(u8::from(later.month()))
                    - i32::from(u8::from(earlier.month()));
                assert_eq!(months, 1, "{metric}");
            }
        }
    }
}

// =============================================================================
// Fallback: Upstream Failures
// =============================================================================

#[tokio::test]
async fn when_fred_returns_500_user_still_gets_thirty_synthetic_points() {
    // Given: FRED is having a bad day
    let transport = Arc::new(RecordingHttpClient::status(500, "Internal Server Error"));
    let client = client_with(transport.clone());

    for metric in Metric::ALL {
        // When: Each metric is fetched
        let snapshot = client.fetch(metric, 10).await;

        // Then: A full synthetic series in the documented range comes back
        assert_synthetic_shape(&snapshot);
        let reason = snapshot.fallback_reason.as_deref().unwrap_or_default();
        assert!(reason.contains("status 500"), "{reason}");
    }

    // And: No retries were attempted
    assert_eq!(transport.recorded_requests().len(), Metric::ALL.len());
}

#[tokio::test]
async fn when_network_is_down_fallback_ignores_requested_limit() {
    // Given: The connection is refused
    let client = client_with(Arc::new(RecordingHttpClient::connection_refused()));

    // When: A short series is requested
    let series = client.mortgage_rates(5).await;

    // Then: The fallback is always 30 points long
    assert_eq!(series.len(), SYNTHETIC_SERIES_LEN);
}

#[tokio::test]
async fn when_payload_is_malformed_fallback_is_served() {
    let payloads = [
        "<html>rate limited</html>",
        r#"{"observations":"nope"}"#,
        r#"{"observations":[{"date":"01/02/2024","value":"6.1"}]}"#,
        r#"{"observations":[{"date":"2024-01-02","value":"n/a"}]}"#,
        r#"{"observations":[{"date":"2024-01-02","value":"NaN"}]}"#,
    ];

    for body in payloads {
        // Given: FRED answers 200 with something unusable
        let client = client_with(Arc::new(RecordingHttpClient::json(body)));

        // When: The series is fetched
        let snapshot = client.fetch(Metric::UnemploymentRate, 12).await;

        // Then: Synthetic data replaces it and no NaN leaks through
        assert_synthetic_shape(&snapshot);
    }
}

#[tokio::test]
async fn placeholder_key_still_attempts_call_then_falls_back() {
    // Given: No key was configured, so the placeholder is sent
    let transport = Arc::new(RecordingHttpClient::status(
        400,
        r#"{"error_code":400,"error_message":"Bad Request.  The value for variable api_key is not registered."}"#,
    ));
    let adapter = FredAdapter::new(transport.clone(), FredConfig::default());
    let client = MarketDataClient::new(Arc::new(adapter))
        .with_clock(Arc::new(FixedClock::new(today())));

    // When: The delinquency rate is fetched
    let snapshot = client.fetch(Metric::DelinquencyRate, 30).await;

    // Then: The call was made with the placeholder and synthetic data served
    let requests = transport.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.contains("api_key=demo_key"));
    assert_synthetic_shape(&snapshot);
}

// =============================================================================
// Fallback: Isolation and Determinism
// =============================================================================

#[tokio::test]
async fn concurrent_fetches_each_fall_back_independently() {
    // Given: Every upstream call fails
    let client = client_with(Arc::new(RecordingHttpClient::connection_refused()));

    // When: The whole dashboard is loaded
    let overview = client.fetch_all(10).await;

    // Then: Every metric has its own correctly shaped fallback
    assert!(!overview.all_live());
    for snapshot in overview.snapshots() {
        assert_synthetic_shape(snapshot);
    }
}

#[tokio::test]
async fn seeded_client_reproduces_fallback_values() {
    // Given: Two offline clients with the same seed
    let build = || {
        MarketDataClient::offline(FredConfig::default())
            .with_clock(Arc::new(FixedClock::new(today())))
            .with_synthetic_seed(42)
    };

    // When: Both fetch the same metric
    let a = build().home_price_index(30).await;
    let b = build().home_price_index(30).await;

    // Then: The synthetic series match exactly
    assert_eq!(a, b);
}

#[tokio::test]
async fn offline_client_never_reports_live_data() {
    let client = MarketDataClient::offline(FredConfig::default())
        .with_clock(Arc::new(FixedClock::new(today())));

    let snapshot = client.fetch(Metric::MortgageRate, 30).await;

    assert!(snapshot.is_synthetic());
    assert_synthetic_shape(&snapshot);
    assert!(snapshot
        .fallback_reason
        .as_deref()
        .is_some_and(|reason| reason.contains("offline")));
}
