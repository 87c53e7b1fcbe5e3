use std::time::Instant;

use lienscope_core::{ChangeSummary, MarketDataClient, Metric, ProviderId, Series};
use serde::Serialize;

use crate::cli::DashboardArgs;
use crate::error::CliError;

use super::{elapsed_ms, CommandResult};

#[derive(Debug, Serialize)]
struct MetricPanel<'a> {
    metric: Metric,
    source: ProviderId,
    change: ChangeSummary,
    series: &'a Series,
}

#[derive(Debug, Serialize)]
struct DashboardResponseData<'a> {
    metrics: Vec<MetricPanel<'a>>,
}

pub async fn run(
    args: &DashboardArgs,
    client: &MarketDataClient,
) -> Result<CommandResult, CliError> {
    let started = Instant::now();
    let overview = client.fetch_all(args.limit).await;
    let latency_ms = elapsed_ms(started);

    let metrics = overview
        .snapshots()
        .into_iter()
        .map(|snapshot| MetricPanel {
            metric: snapshot.metric,
            source: snapshot.source,
            change: snapshot.change(),
            series: &snapshot.series,
        })
        .collect();

    let data = serde_json::to_value(DashboardResponseData { metrics })?;
    Ok(CommandResult::from_snapshots(data, overview.snapshots()).with_latency(latency_ms))
}
