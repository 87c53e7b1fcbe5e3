use std::time::Instant;

use lienscope_core::{ChangeSummary, ChartPoint, MarketDataClient, Metric, SeriesSnapshot};
use serde::Serialize;

use crate::cli::SeriesArgs;
use crate::error::CliError;

use super::{elapsed_ms, CommandResult};

#[derive(Debug, Serialize)]
pub(super) struct SeriesResponseData<'a> {
    #[serde(flatten)]
    snapshot: &'a SeriesSnapshot,
    change: ChangeSummary,
    chart: Vec<ChartPoint>,
}

impl<'a> SeriesResponseData<'a> {
    pub(super) fn new(snapshot: &'a SeriesSnapshot, label: &str) -> Self {
        Self {
            snapshot,
            change: snapshot.change(),
            chart: snapshot.chart(label),
        }
    }
}

pub async fn run(args: &SeriesArgs, client: &MarketDataClient) -> Result<CommandResult, CliError> {
    let metric = args.metric.parse::<Metric>()?;
    let label = args
        .label
        .as_deref()
        .unwrap_or_else(|| metric.chart_label());

    let started = Instant::now();
    let snapshot = client.fetch(metric, args.limit).await;
    let latency_ms = elapsed_ms(started);

    let data = serde_json::to_value(SeriesResponseData::new(&snapshot, label))?;
    Ok(CommandResult::from_snapshots(data, [&snapshot]).with_latency(latency_ms))
}
