use lienscope_core::{Cadence, MarketDataClient, Metric};
use serde::Serialize;

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct MetricDescriptor {
    metric: Metric,
    series_id: &'static str,
    description: &'static str,
    cadence: Cadence,
    chart_label: &'static str,
    fallback_range: [f64; 2],
}

#[derive(Debug, Serialize)]
struct SourcesResponseData {
    metrics: Vec<MetricDescriptor>,
}

pub fn run(client: &MarketDataClient) -> Result<CommandResult, CliError> {
    let metrics = Metric::ALL
        .into_iter()
        .map(|metric| {
            let profile = metric.synthetic_profile();
            MetricDescriptor {
                metric,
                series_id: metric.series_id(),
                description: metric.description(),
                cadence: metric.cadence(),
                chart_label: metric.chart_label(),
                fallback_range: [profile.floor, profile.ceiling],
            }
        })
        .collect();

    let data = serde_json::to_value(SourcesResponseData { metrics })?;
    Ok(CommandResult::ok(data, vec![client.source_id()]))
}
