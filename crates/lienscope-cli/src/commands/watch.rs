use std::time::{Duration, Instant};

use lienscope_core::{MarketDataClient, Metric};
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::cli::WatchArgs;
use crate::error::CliError;

use super::series::SeriesResponseData;
use super::{elapsed_ms, emit, CommandResult};

/// Re-fetches one metric every `interval_secs`, one compact JSON line per fetch.
///
/// `--pretty` is ignored so every tick stays a single line.
pub async fn run(
    args: &WatchArgs,
    client: &MarketDataClient,
    warnings: Vec<String>,
) -> Result<(), CliError> {
    poll(args, client, |result| emit(result.with_warnings(warnings.clone()), false)).await?;
    Ok(())
}

/// Fetches on every tick until `iterations` is reached and returns the number
/// of fetches made. The first fetch happens immediately.
async fn poll<F>(
    args: &WatchArgs,
    client: &MarketDataClient,
    mut on_tick: F,
) -> Result<u64, CliError>
where
    F: FnMut(CommandResult) -> Result<(), CliError>,
{
    let metric = args.metric.parse::<Metric>()?;
    let label = metric.chart_label();

    let mut interval = tokio::time::interval(Duration::from_secs(args.interval_secs));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut tick = 0_u64;
    loop {
        interval.tick().await;
        tick += 1;

        let started = Instant::now();
        let snapshot = client.fetch(metric, args.limit).await;
        let latency_ms = elapsed_ms(started);
        info!(metric = %metric, tick, source = %snapshot.source, "watch tick");

        let data = serde_json::to_value(SeriesResponseData::new(&snapshot, label))?;
        on_tick(CommandResult::from_snapshots(data, [&snapshot]).with_latency(latency_ms))?;

        if args.iterations != 0 && tick >= args.iterations {
            return Ok(tick);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lienscope_core::{FredConfig, ProviderId};

    fn watch_args(metric: &str, interval_secs: u64, iterations: u64) -> WatchArgs {
        WatchArgs {
            metric: metric.to_string(),
            limit: 30,
            interval_secs,
            iterations,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stops_after_requested_iterations() {
        // Given: An offline client polled every minute, twice
        let client = MarketDataClient::offline(FredConfig::default());
        let args = watch_args("mortgage_rate", 60, 2);
        let started = tokio::time::Instant::now();
        let mut documents = Vec::new();

        // When: The poll loop runs
        let fetches = poll(&args, &client, |result| {
            documents.push(result);
            Ok(())
        })
        .await
        .expect("polls");

        // Then: Exactly two documents were produced, one interval apart
        assert_eq!(fetches, 2);
        assert_eq!(documents.len(), 2);
        assert!(started.elapsed() >= Duration::from_secs(60));
        for result in &documents {
            assert_eq!(result.sources, vec![ProviderId::Synthetic]);
            assert_eq!(result.data["metric"], "mortgage_rate");
            assert_eq!(result.warnings.len(), 1);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn tick_error_ends_the_loop() {
        let client = MarketDataClient::offline(FredConfig::default());
        let args = watch_args("unemployment_rate", 5, 0);
        let mut calls = 0;

        let outcome = poll(&args, &client, |_| {
            calls += 1;
            Err(CliError::Command(String::from("stdout closed")))
        })
        .await;

        assert!(outcome.is_err());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn unknown_metric_is_rejected_before_polling() {
        let client = MarketDataClient::offline(FredConfig::default());
        let args = watch_args("gold", 1, 1);

        let outcome = poll(&args, &client, |_| Ok(())).await;

        assert!(matches!(outcome, Err(CliError::Validation(_))));
    }
}
